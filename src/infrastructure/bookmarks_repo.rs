//! File-backed bookmark persistence
//!
//! One JSON document per user under `<data_dir>/bookmarks/`, fronted by an
//! in-memory cache so repeated reads for the same user skip the disk.
//! Files hold sorted arrays so repeated writes stay diff-stable.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use dashmap::DashMap;

use crate::shared::bookmarks::BookmarkDesiredState;
use crate::shared::errors::Result;
use crate::shared::logging;

/// User ids become file names; anything outside this alphabet is rejected
/// before it reaches the filesystem.
pub fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id.len() <= 128
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub struct BookmarkRepo {
    dir: PathBuf,
    cache: DashMap<String, HashSet<String>>,
}

impl BookmarkRepo {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let dir = data_dir.join("bookmarks");
        fs::create_dir_all(&dir)?;
        Ok(BookmarkRepo {
            dir,
            cache: DashMap::new(),
        })
    }

    /// All saved item ids for `user_id`. A user with no file has an empty
    /// set; that is not an error.
    pub fn ids_for(&self, user_id: &str) -> Result<HashSet<String>> {
        if let Some(ids) = self.cache.get(user_id) {
            return Ok(ids.clone());
        }

        let ids = match self.read_file(user_id) {
            Ok(ids) => ids,
            Err(e) => {
                logging::log_bookmark_fetch_error(user_id, &e.to_string());
                return Err(e);
            }
        };
        logging::log_bookmark_fetch(user_id, ids.len());
        self.cache.insert(user_id.to_string(), ids.clone());
        Ok(ids)
    }

    /// Drive membership of `item_id` to the desired state. Idempotent:
    /// setting an already-present id to present is a no-op write. Returns
    /// whether the item is saved afterwards.
    pub fn set(
        &self,
        user_id: &str,
        item_id: &str,
        desired: BookmarkDesiredState,
    ) -> Result<bool> {
        let mut ids = self.ids_for(user_id)?;
        let saved = match desired {
            BookmarkDesiredState::Present => {
                ids.insert(item_id.to_string());
                true
            }
            BookmarkDesiredState::Absent => {
                ids.remove(item_id);
                false
            }
        };

        if let Err(e) = self.write_file(user_id, &ids) {
            logging::log_bookmark_write_error(user_id, item_id, &e.to_string());
            return Err(e);
        }
        self.cache.insert(user_id.to_string(), ids);
        logging::log_bookmark_write(user_id, item_id, saved);
        Ok(saved)
    }

    fn user_file(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{user_id}.json"))
    }

    fn read_file(&self, user_id: &str) -> Result<HashSet<String>> {
        let path = self.user_file(user_id);
        if !path.exists() {
            return Ok(HashSet::new());
        }
        let raw = fs::read_to_string(&path)?;
        let ids: Vec<String> = serde_json::from_str(&raw)?;
        Ok(ids.into_iter().collect())
    }

    fn write_file(&self, user_id: &str, ids: &HashSet<String>) -> Result<()> {
        let mut sorted: Vec<&String> = ids.iter().collect();
        sorted.sort();
        fs::write(
            self.user_file(user_id),
            serde_json::to_string_pretty(&sorted)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_repo() -> (PathBuf, BookmarkRepo) {
        let dir = std::env::temp_dir().join(format!("cryptohub-test-{}", uuid::Uuid::new_v4()));
        let repo = BookmarkRepo::open(&dir).expect("repo opens in temp dir");
        (dir, repo)
    }

    #[test]
    fn test_unknown_user_has_empty_set() {
        let (dir, repo) = temp_repo();
        assert!(repo.ids_for("nobody").unwrap().is_empty());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_set_and_fetch_round_trip() {
        let (dir, repo) = temp_repo();

        repo.set("u1", "post-3", BookmarkDesiredState::Present).unwrap();
        repo.set("u1", "post-7", BookmarkDesiredState::Present).unwrap();

        let ids = repo.ids_for("u1").unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("post-3"));
        assert!(ids.contains("post-7"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_round_trip_survives_cache_loss() {
        let (dir, repo) = temp_repo();
        repo.set("u1", "post-3", BookmarkDesiredState::Present).unwrap();
        drop(repo);

        // A fresh repo over the same directory reads from disk.
        let repo = BookmarkRepo::open(&dir).unwrap();
        assert!(repo.ids_for("u1").unwrap().contains("post-3"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_desired_state_is_idempotent() {
        let (dir, repo) = temp_repo();

        assert!(repo.set("u1", "post-1", BookmarkDesiredState::Present).unwrap());
        assert!(repo.set("u1", "post-1", BookmarkDesiredState::Present).unwrap());
        assert_eq!(repo.ids_for("u1").unwrap().len(), 1);

        assert!(!repo.set("u1", "post-1", BookmarkDesiredState::Absent).unwrap());
        assert!(!repo.set("u1", "post-1", BookmarkDesiredState::Absent).unwrap());
        assert!(repo.ids_for("u1").unwrap().is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_users_are_isolated() {
        let (dir, repo) = temp_repo();
        repo.set("u1", "post-1", BookmarkDesiredState::Present).unwrap();
        repo.set("u2", "post-2", BookmarkDesiredState::Present).unwrap();

        assert!(!repo.ids_for("u1").unwrap().contains("post-2"));
        assert!(!repo.ids_for("u2").unwrap().contains("post-1"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_user_id_validation() {
        assert!(is_valid_user_id("demo-user"));
        assert!(is_valid_user_id("a1_B2"));
        assert!(!is_valid_user_id(""));
        assert!(!is_valid_user_id("../escape"));
        assert!(!is_valid_user_id("user/with/slashes"));
        assert!(!is_valid_user_id(&"x".repeat(200)));
    }
}
