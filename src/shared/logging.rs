//! Structured logging for the server-side persistence layer
//!
//! Provides consistent, contextual logging for bookmark and session
//! operations. Uses structured fields so log queries can filter by
//! operation and user.

/// Operations tracked by the persistence layer.
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    BookmarkFetch,
    BookmarkWrite,
    SessionRead,
    SessionClear,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::BookmarkFetch => "bookmark_fetch",
            LogOperation::BookmarkWrite => "bookmark_write",
            LogOperation::SessionRead => "session_read",
            LogOperation::SessionClear => "session_clear",
        }
    }
}

/// Log a successful bookmark fetch from disk.
pub fn log_bookmark_fetch(user_id: &str, count: usize) {
    tracing::debug!(
        operation = LogOperation::BookmarkFetch.as_str(),
        user_id = user_id,
        bookmark_count = count,
        "Loaded bookmarks from store"
    );
}

/// Log a bookmark fetch failure.
pub fn log_bookmark_fetch_error(user_id: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::BookmarkFetch.as_str(),
        user_id = user_id,
        error = error,
        "Failed to load bookmarks"
    );
}

/// Log a bookmark write (add or remove).
pub fn log_bookmark_write(user_id: &str, item_id: &str, saved: bool) {
    tracing::info!(
        operation = LogOperation::BookmarkWrite.as_str(),
        user_id = user_id,
        item_id = item_id,
        saved = saved,
        "Bookmark updated"
    );
}

/// Log a bookmark write failure.
pub fn log_bookmark_write_error(user_id: &str, item_id: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::BookmarkWrite.as_str(),
        user_id = user_id,
        item_id = item_id,
        error = error,
        "Failed to update bookmark"
    );
}

/// Log a session lookup.
pub fn log_session_read(present: bool) {
    tracing::debug!(
        operation = LogOperation::SessionRead.as_str(),
        identity_present = present,
        "Resolved current identity"
    );
}

/// Log a sign-out failure.
pub fn log_session_clear_error(error: &str) {
    tracing::error!(
        operation = LogOperation::SessionClear.as_str(),
        error = error,
        "Failed to clear session"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::BookmarkFetch.as_str(), "bookmark_fetch");
        assert_eq!(LogOperation::BookmarkWrite.as_str(), "bookmark_write");
        assert_eq!(LogOperation::SessionRead.as_str(), "session_read");
        assert_eq!(LogOperation::SessionClear.as_str(), "session_clear");
    }
}
