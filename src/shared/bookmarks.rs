//! Saved-insights synchronization core
//!
//! The remote store owns the truth; the set held here is a per-identity
//! cache. Local membership changes ONLY after the remote call confirms, so
//! a failed call leaves the view exactly where it was (no speculative
//! update, no rollback).
//!
//! Every in-flight operation carries the epoch current when it was issued.
//! Signing out or switching accounts bumps the epoch, so completions that
//! arrive afterwards are discarded instead of being applied to another
//! identity's cache. The check happens at application time, not issuance
//! time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::models::InsightPost;
use crate::shared::errors::AppError;
use crate::shared::notifications::Notices;

/// End state requested from the remote store. Expressing toggles as a
/// desired state keeps the remote operation idempotent and makes rapid
/// overlapping toggles resolve to last-event-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkDesiredState {
    Present,
    Absent,
}

/// Remote bookmark store interface.
pub trait BookmarkStore {
    async fn fetch_bookmark_ids(&self, user_id: &str) -> Result<HashSet<String>, AppError>;

    async fn set_bookmark(
        &self,
        user_id: &str,
        item_id: &str,
        desired: BookmarkDesiredState,
    ) -> Result<(), AppError>;
}

/// Observable lifecycle of the per-identity saved set. `NotLoaded`,
/// `Loaded` with an empty set, and `Failed` are three distinct states the
/// view renders differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkSlot {
    NotLoaded,
    Loading,
    Loaded(HashSet<String>),
    Failed,
}

/// Issued by [`BookmarkSync::begin_load`]; redeemed at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// Issued by [`BookmarkSync::begin_toggle`]; carries the desired end state
/// captured when the user acted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTicket {
    epoch: u64,
    item_id: String,
    desired: BookmarkDesiredState,
}

impl ToggleTicket {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn desired(&self) -> BookmarkDesiredState {
        self.desired
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed,
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied(BookmarkDesiredState),
    Failed,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkSync {
    slot: BookmarkSlot,
    epoch: u64,
}

impl Default for BookmarkSync {
    fn default() -> Self {
        BookmarkSync::new()
    }
}

impl BookmarkSync {
    pub fn new() -> Self {
        BookmarkSync {
            slot: BookmarkSlot::NotLoaded,
            epoch: 0,
        }
    }

    pub fn slot(&self) -> &BookmarkSlot {
        &self.slot
    }

    pub fn is_saved(&self, item_id: &str) -> bool {
        matches!(&self.slot, BookmarkSlot::Loaded(ids) if ids.contains(item_id))
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.slot = BookmarkSlot::Loading;
        LoadTicket { epoch: self.epoch }
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<HashSet<String>, AppError>,
    ) -> LoadOutcome {
        if ticket.epoch != self.epoch {
            return LoadOutcome::Discarded;
        }
        match result {
            Ok(ids) => {
                let count = ids.len();
                self.slot = BookmarkSlot::Loaded(ids);
                LoadOutcome::Loaded(count)
            }
            Err(_) => {
                self.slot = BookmarkSlot::Failed;
                LoadOutcome::Failed
            }
        }
    }

    /// Start a toggle for `item_id`. Only legal once the set is loaded; the
    /// desired end state is the flip of current membership.
    pub fn begin_toggle(&self, item_id: &str) -> Option<ToggleTicket> {
        let BookmarkSlot::Loaded(ids) = &self.slot else {
            return None;
        };
        let desired = if ids.contains(item_id) {
            BookmarkDesiredState::Absent
        } else {
            BookmarkDesiredState::Present
        };
        Some(ToggleTicket {
            epoch: self.epoch,
            item_id: item_id.to_string(),
            desired,
        })
    }

    pub fn complete_toggle(
        &mut self,
        ticket: ToggleTicket,
        result: Result<(), AppError>,
    ) -> ToggleOutcome {
        if ticket.epoch != self.epoch {
            return ToggleOutcome::Discarded;
        }
        if result.is_err() {
            return ToggleOutcome::Failed;
        }
        if let BookmarkSlot::Loaded(ids) = &mut self.slot {
            match ticket.desired {
                BookmarkDesiredState::Present => {
                    ids.insert(ticket.item_id);
                }
                BookmarkDesiredState::Absent => {
                    ids.remove(&ticket.item_id);
                }
            }
        }
        ToggleOutcome::Applied(ticket.desired)
    }

    /// The signed-in user changed (including sign-out). Invalidates the
    /// cache and every in-flight ticket.
    pub fn reset_for_identity_change(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.slot = BookmarkSlot::NotLoaded;
    }
}

/// Project the catalog down to the saved items, preserving catalog order.
pub fn derive_saved_view(catalog: &[InsightPost], saved: &HashSet<String>) -> Vec<InsightPost> {
    catalog
        .iter()
        .filter(|post| saved.contains(&post.id))
        .cloned()
        .collect()
}

/// Toast mapping for load completions.
pub fn notify_load_outcome(notices: &mut Notices, outcome: &LoadOutcome) {
    if let LoadOutcome::Failed = outcome {
        notices.push_failure("Failed to load saved insights");
    }
}

/// Toast mapping for toggle completions.
pub fn notify_toggle_outcome(notices: &mut Notices, outcome: &ToggleOutcome) {
    match outcome {
        ToggleOutcome::Applied(BookmarkDesiredState::Present) => {
            notices.push_success("Saved to bookmarks");
        }
        ToggleOutcome::Applied(BookmarkDesiredState::Absent) => {
            notices.push_success("Removed from bookmarks");
        }
        ToggleOutcome::Failed => {
            notices.push_failure("Failed to update bookmark");
        }
        ToggleOutcome::Discarded => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::generate_insight_posts;
    use crate::shared::notifications::NoticeKind;

    fn loaded_sync(ids: &[&str]) -> BookmarkSync {
        let mut sync = BookmarkSync::new();
        let ticket = sync.begin_load();
        let set: HashSet<String> = ids.iter().map(|s| s.to_string()).collect();
        sync.complete_load(ticket, Ok(set));
        sync
    }

    fn remote_down() -> AppError {
        AppError::RemoteUnavailable("connection refused".to_string())
    }

    #[test]
    fn test_empty_remote_set_is_loaded_not_notloaded() {
        let mut sync = BookmarkSync::new();
        assert_eq!(*sync.slot(), BookmarkSlot::NotLoaded);

        let ticket = sync.begin_load();
        assert_eq!(*sync.slot(), BookmarkSlot::Loading);

        let outcome = sync.complete_load(ticket, Ok(HashSet::new()));
        assert_eq!(outcome, LoadOutcome::Loaded(0));
        assert_eq!(*sync.slot(), BookmarkSlot::Loaded(HashSet::new()));

        let catalog = generate_insight_posts();
        if let BookmarkSlot::Loaded(ids) = sync.slot() {
            assert!(derive_saved_view(&catalog, ids).is_empty());
        }
    }

    #[test]
    fn test_load_failure_marks_slot_failed() {
        let mut sync = BookmarkSync::new();
        let ticket = sync.begin_load();
        let outcome = sync.complete_load(ticket, Err(remote_down()));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(*sync.slot(), BookmarkSlot::Failed);
    }

    #[test]
    fn test_load_completion_after_sign_out_is_discarded() {
        let mut sync = BookmarkSync::new();
        let ticket = sync.begin_load();

        // User signs out while the fetch is in flight.
        sync.reset_for_identity_change();

        let ids: HashSet<String> = ["post-3".to_string()].into_iter().collect();
        let outcome = sync.complete_load(ticket, Ok(ids));
        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(*sync.slot(), BookmarkSlot::NotLoaded);
    }

    #[test]
    fn test_toggle_round_trip_restores_the_set() {
        let mut sync = loaded_sync(&["post-3", "post-7"]);
        let before = sync.slot().clone();

        let ticket = sync.begin_toggle("post-5").unwrap();
        assert_eq!(ticket.desired(), BookmarkDesiredState::Present);
        sync.complete_toggle(ticket, Ok(()));
        assert!(sync.is_saved("post-5"));

        let ticket = sync.begin_toggle("post-5").unwrap();
        assert_eq!(ticket.desired(), BookmarkDesiredState::Absent);
        sync.complete_toggle(ticket, Ok(()));

        assert_eq!(*sync.slot(), before);
    }

    #[test]
    fn test_toggle_failure_leaves_local_state_untouched() {
        let mut sync = loaded_sync(&["post-3", "post-7"]);
        let before = sync.slot().clone();

        let ticket = sync.begin_toggle("post-5").unwrap();
        let outcome = sync.complete_toggle(ticket, Err(remote_down()));
        assert_eq!(outcome, ToggleOutcome::Failed);
        assert_eq!(*sync.slot(), before);
    }

    #[test]
    fn test_remove_failure_emits_exactly_one_failure_notice() {
        let mut sync = loaded_sync(&["post-3", "post-7"]);

        let ticket = sync.begin_toggle("post-3").unwrap();
        assert_eq!(ticket.desired(), BookmarkDesiredState::Absent);
        let outcome = sync.complete_toggle(ticket, Err(remote_down()));

        let mut notices = Notices::new();
        notify_toggle_outcome(&mut notices, &outcome);
        assert_eq!(notices.len(), 1);
        let notice = notices.iter().next().unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);

        // Local set still holds both original ids.
        assert!(sync.is_saved("post-3"));
        assert!(sync.is_saved("post-7"));
    }

    #[test]
    fn test_toggle_completion_after_sign_out_is_discarded() {
        let mut sync = loaded_sync(&["post-3"]);
        let ticket = sync.begin_toggle("post-3").unwrap();

        sync.reset_for_identity_change();

        let outcome = sync.complete_toggle(ticket, Ok(()));
        assert_eq!(outcome, ToggleOutcome::Discarded);
        assert_eq!(*sync.slot(), BookmarkSlot::NotLoaded);

        let mut notices = Notices::new();
        notify_toggle_outcome(&mut notices, &outcome);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_toggle_rejected_until_loaded() {
        let mut sync = BookmarkSync::new();
        assert!(sync.begin_toggle("post-1").is_none());

        sync.begin_load();
        assert!(sync.begin_toggle("post-1").is_none());
    }

    #[test]
    fn test_overlapping_toggles_resolve_to_last_event_wins() {
        let mut sync = loaded_sync(&["post-3"]);

        // Both toggles are issued before either completes; both capture the
        // same desired state, so applying them in either order converges.
        let first = sync.begin_toggle("post-3").unwrap();
        let second = sync.begin_toggle("post-3").unwrap();
        assert_eq!(first.desired(), BookmarkDesiredState::Absent);
        assert_eq!(second.desired(), BookmarkDesiredState::Absent);

        sync.complete_toggle(first, Ok(()));
        sync.complete_toggle(second, Ok(()));
        assert!(!sync.is_saved("post-3"));
    }

    #[test]
    fn test_toggle_outside_catalog_is_durable_but_invisible() {
        let mut sync = loaded_sync(&[]);
        let ticket = sync.begin_toggle("retired-post").unwrap();
        sync.complete_toggle(ticket, Ok(()));
        assert!(sync.is_saved("retired-post"));

        let catalog = generate_insight_posts();
        if let BookmarkSlot::Loaded(ids) = sync.slot() {
            assert!(derive_saved_view(&catalog, ids).is_empty());
        }
    }

    #[test]
    fn test_derive_preserves_catalog_order() {
        let catalog = generate_insight_posts();
        let saved: HashSet<String> = ["post-7".to_string(), "post-3".to_string()]
            .into_iter()
            .collect();

        let view = derive_saved_view(&catalog, &saved);
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["post-3", "post-7"]);
    }

    #[test]
    fn test_load_failure_emits_exactly_one_failure_notice() {
        let mut notices = Notices::new();
        notify_load_outcome(&mut notices, &LoadOutcome::Failed);
        assert_eq!(notices.len(), 1);

        notify_load_outcome(&mut notices, &LoadOutcome::Loaded(2));
        notify_load_outcome(&mut notices, &LoadOutcome::Discarded);
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_toggle_success_notices_match_direction() {
        let mut notices = Notices::new();
        notify_toggle_outcome(
            &mut notices,
            &ToggleOutcome::Applied(BookmarkDesiredState::Present),
        );
        notify_toggle_outcome(
            &mut notices,
            &ToggleOutcome::Applied(BookmarkDesiredState::Absent),
        );

        let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Saved to bookmarks", "Removed from bookmarks"]);
    }
}
