//! Bookmark store HTTP handlers
//!
//! The remote bookmark store consumed by the client. Toggles arrive as a
//! desired end state, which keeps retries and overlapping requests
//! idempotent.

use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};

use crate::infrastructure::bookmarks_repo::{is_valid_user_id, BookmarkRepo};
use crate::shared::services::{BookmarkIdsResponse, SetBookmarkRequest, SetBookmarkResponse};

/// Shared state for bookmark handlers.
#[derive(Clone)]
pub struct BookmarksState {
    pub repo: Arc<BookmarkRepo>,
}

impl BookmarksState {
    pub fn new() -> anyhow::Result<Self> {
        let repo = BookmarkRepo::open(&crate::config::get().data_dir)?;
        Ok(BookmarksState {
            repo: Arc::new(repo),
        })
    }
}

/// GET /api/bookmarks/{user_id}
pub async fn get_bookmarks_handler(
    Extension(state): Extension<BookmarksState>,
    Path(user_id): Path<String>,
) -> (StatusCode, Json<BookmarkIdsResponse>) {
    if !is_valid_user_id(&user_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(BookmarkIdsResponse { ids: vec![] }),
        );
    }

    match state.repo.ids_for(&user_id) {
        Ok(ids) => {
            let mut ids: Vec<String> = ids.into_iter().collect();
            ids.sort();
            (StatusCode::OK, Json(BookmarkIdsResponse { ids }))
        }
        Err(e) => {
            tracing::error!("Failed to read bookmarks for {user_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BookmarkIdsResponse { ids: vec![] }),
            )
        }
    }
}

/// PUT /api/bookmarks/{user_id}/{item_id}
pub async fn set_bookmark_handler(
    Extension(state): Extension<BookmarksState>,
    Path((user_id, item_id)): Path<(String, String)>,
    Json(request): Json<SetBookmarkRequest>,
) -> (StatusCode, Json<SetBookmarkResponse>) {
    if !is_valid_user_id(&user_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(SetBookmarkResponse { saved: false }),
        );
    }

    match state.repo.set(&user_id, &item_id, request.state) {
        Ok(saved) => (StatusCode::OK, Json(SetBookmarkResponse { saved })),
        Err(e) => {
            tracing::error!("Failed to update bookmark {item_id} for {user_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SetBookmarkResponse { saved: false }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bookmarks::BookmarkDesiredState;

    fn temp_state() -> (std::path::PathBuf, BookmarksState) {
        let dir = std::env::temp_dir().join(format!("cryptohub-handler-{}", uuid::Uuid::new_v4()));
        let repo = BookmarkRepo::open(&dir).unwrap();
        (
            dir,
            BookmarksState {
                repo: Arc::new(repo),
            },
        )
    }

    #[tokio::test]
    async fn test_get_returns_sorted_ids() {
        let (dir, state) = temp_state();
        state.repo.set("u1", "post-7", BookmarkDesiredState::Present).unwrap();
        state.repo.set("u1", "post-3", BookmarkDesiredState::Present).unwrap();

        let (status, Json(body)) =
            get_bookmarks_handler(Extension(state), Path("u1".to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.ids, vec!["post-3".to_string(), "post-7".to_string()]);

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_put_drives_membership_to_desired_state() {
        let (dir, state) = temp_state();

        let (status, Json(body)) = set_bookmark_handler(
            Extension(state.clone()),
            Path(("u1".to_string(), "post-5".to_string())),
            Json(SetBookmarkRequest {
                state: BookmarkDesiredState::Present,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.saved);

        let (_, Json(body)) = set_bookmark_handler(
            Extension(state.clone()),
            Path(("u1".to_string(), "post-5".to_string())),
            Json(SetBookmarkRequest {
                state: BookmarkDesiredState::Absent,
            }),
        )
        .await;
        assert!(!body.saved);

        let (_, Json(body)) =
            get_bookmarks_handler(Extension(state), Path("u1".to_string())).await;
        assert!(body.ids.is_empty());

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_invalid_user_id_is_rejected() {
        let (dir, state) = temp_state();

        let (status, _) =
            get_bookmarks_handler(Extension(state.clone()), Path("../etc".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = set_bookmark_handler(
            Extension(state),
            Path(("bad/id".to_string(), "post-1".to_string())),
            Json(SetBookmarkRequest {
                state: BookmarkDesiredState::Present,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        std::fs::remove_dir_all(dir).ok();
    }
}
