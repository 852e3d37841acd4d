//! HTTP client for the remote bookmark store
//!
//! Thin wrapper over the `/api/bookmarks` endpoints. The request/response
//! types here are shared with the server handlers so both sides agree on
//! the wire shape.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::shared::bookmarks::{BookmarkDesiredState, BookmarkStore};
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkIdsResponse {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBookmarkRequest {
    pub state: BookmarkDesiredState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBookmarkResponse {
    pub saved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RemoteBookmarks;

impl RemoteBookmarks {
    pub fn new() -> Self {
        RemoteBookmarks
    }
}

#[cfg(target_arch = "wasm32")]
impl BookmarkStore for RemoteBookmarks {
    async fn fetch_bookmark_ids(&self, user_id: &str) -> Result<HashSet<String>, AppError> {
        use crate::shared::constants::BOOKMARK_API_BASE;
        use reqwasm::http::Request;

        let url = format!("{}/{}", BOOKMARK_API_BASE, user_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::RemoteUnavailable(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::RemoteUnavailable(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let data: BookmarkIdsResponse = response
            .json()
            .await
            .map_err(|e| AppError::RemoteUnavailable(e.to_string()))?;
        Ok(data.ids.into_iter().collect())
    }

    async fn set_bookmark(
        &self,
        user_id: &str,
        item_id: &str,
        desired: BookmarkDesiredState,
    ) -> Result<(), AppError> {
        use crate::shared::constants::BOOKMARK_API_BASE;
        use reqwasm::http::Request;

        let url = format!("{}/{}/{}", BOOKMARK_API_BASE, user_id, item_id);
        let body = serde_json::to_string(&SetBookmarkRequest { state: desired })
            .map_err(|e| AppError::RemoteUnavailable(e.to_string()))?;

        let response = Request::put(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::RemoteUnavailable(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::RemoteUnavailable(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        Ok(())
    }
}

// Server-side rendering never runs the effects that reach this client;
// these stubs only satisfy the compiler on the native target.
#[cfg(not(target_arch = "wasm32"))]
impl BookmarkStore for RemoteBookmarks {
    async fn fetch_bookmark_ids(&self, user_id: &str) -> Result<HashSet<String>, AppError> {
        tracing::warn!(user_id, "Bookmark client invoked during server rendering");
        Ok(HashSet::new())
    }

    async fn set_bookmark(
        &self,
        user_id: &str,
        _item_id: &str,
        _desired: BookmarkDesiredState,
    ) -> Result<(), AppError> {
        tracing::warn!(user_id, "Bookmark client invoked during server rendering");
        Err(AppError::RemoteUnavailable(
            "bookmark client is not available during server rendering".to_string(),
        ))
    }
}
