//! Bookmark synchronizer hook
//!
//! Drives the sans-io sync machine against the remote store client. Results
//! are applied through epoch-stamped tickets, so a completion that lands
//! after a sign-out is discarded instead of written into another identity's
//! cache. Local state changes only after the remote call confirms.

use dioxus::prelude::*;

use crate::shared::bookmarks::{
    notify_load_outcome, notify_toggle_outcome, BookmarkSlot, BookmarkStore, BookmarkSync,
};
use crate::shared::notifications::Notices;
use crate::shared::services::RemoteBookmarks;

use super::use_session::{use_session, Session};

#[derive(Clone, Copy, PartialEq)]
pub struct Bookmarks {
    sync: Signal<BookmarkSync>,
    notices: Signal<Notices>,
    session: Session,
}

impl Bookmarks {
    pub fn slot(&self) -> BookmarkSlot {
        self.sync.read().slot().clone()
    }

    pub fn is_saved(&self, item_id: &str) -> bool {
        self.sync.read().is_saved(item_id)
    }

    /// Whether toggle buttons should render at all.
    pub fn ready(&self) -> bool {
        matches!(self.slot(), BookmarkSlot::Loaded(_))
    }

    /// Fetch the saved set for the signed-in user. Requires an identity;
    /// callers go through the session gate first.
    pub fn reload(&mut self) {
        let Some(identity) = self.session.current() else {
            tracing::warn!("Bookmark load requested without a signed-in identity");
            return;
        };

        let ticket = self.sync.write().begin_load();
        let mut sync = self.sync;
        let mut notices = self.notices;
        spawn(async move {
            let store = RemoteBookmarks::new();
            let result = store.fetch_bookmark_ids(&identity.id).await;
            if let Err(e) = &result {
                tracing::error!("Failed to fetch bookmarks: {e}");
            }
            let outcome = sync.write().complete_load(ticket, result);
            notify_load_outcome(&mut notices.write(), &outcome);
        });
    }

    /// Flip membership of `item_id` in the remote store, then mirror it
    /// locally on success.
    pub fn toggle(&mut self, item_id: &str) {
        let Some(identity) = self.session.current() else {
            tracing::warn!("Bookmark toggle requested without a signed-in identity");
            return;
        };
        let Some(ticket) = self.sync.read().begin_toggle(item_id) else {
            tracing::debug!(item_id, "Bookmark toggle ignored while the saved set is not loaded");
            return;
        };

        let mut sync = self.sync;
        let mut notices = self.notices;
        spawn(async move {
            let store = RemoteBookmarks::new();
            let result = store
                .set_bookmark(&identity.id, ticket.item_id(), ticket.desired())
                .await;
            if let Err(e) = &result {
                tracing::error!("Failed to update bookmark: {e}");
            }
            let outcome = sync.write().complete_toggle(ticket, result);
            notify_toggle_outcome(&mut notices.write(), &outcome);
        });
    }
}

/// Mount-time provider; call once from the app shell, after the session
/// provider.
pub fn use_bookmarks_provider(notices: Signal<Notices>) -> Bookmarks {
    let session = use_session();
    let sync = use_signal(BookmarkSync::new);
    let mut bookmarks = Bookmarks {
        sync,
        notices,
        session,
    };

    // Invalidate the cache and refetch whenever the signed-in user changes.
    // The epoch bump inside reset_for_identity_change discards whatever was
    // still in flight for the previous identity.
    let mut last_user = use_signal(|| None::<String>);
    use_effect(move || {
        let current = session.identity.read().as_ref().map(|i| i.id.clone());
        if *last_user.peek() != current {
            last_user.set(current.clone());
            bookmarks.sync.write().reset_for_identity_change();
            if current.is_some() {
                bookmarks.reload();
            }
        }
    });

    use_context_provider(|| bookmarks)
}

pub fn use_bookmarks() -> Bookmarks {
    use_context()
}
