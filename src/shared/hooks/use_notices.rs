//! Notice queue hook
//!
//! The queue lives in a context-provided signal so the navbar, the bookmark
//! synchronizer and the toast viewport all see the same notices.

use dioxus::prelude::*;

use crate::shared::notifications::Notices;

/// Mount-time provider; call once from the app shell.
pub fn use_notices_provider() -> Signal<Notices> {
    let notices = use_signal(Notices::new);
    use_context_provider(|| notices)
}

pub fn use_notices() -> Signal<Notices> {
    use_context()
}
