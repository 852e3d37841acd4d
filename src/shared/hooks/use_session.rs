//! Session hook
//!
//! Resolves the current identity from the identity provider once on mount
//! and exposes it app-wide. Bookmark operations gate on `has_identity`
//! before touching the remote store.

use dioxus::prelude::*;

use crate::domain::models::{has_identity, Identity};
use crate::server_fns::get_current_identity;

#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    pub identity: Signal<Option<Identity>>,
    /// False until the first identity lookup settles, so views can tell
    /// "signed out" apart from "still resolving".
    pub resolved: Signal<bool>,
}

impl Session {
    pub fn has_identity(&self) -> bool {
        has_identity(self.identity.read().as_ref())
    }

    pub fn current(&self) -> Option<Identity> {
        self.identity.read().clone()
    }
}

/// Mount-time provider; call once from the app shell.
pub fn use_session_provider() -> Session {
    let mut identity = use_signal(|| None::<Identity>);
    let mut resolved = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match get_current_identity().await {
                Ok(current) => identity.set(current),
                Err(e) => tracing::error!("Failed to resolve identity: {e:?}"),
            }
            resolved.set(true);
        });
    });

    use_context_provider(|| Session { identity, resolved })
}

pub fn use_session() -> Session {
    use_context()
}
