// Custom Dioxus hooks

pub mod use_bookmarks;
pub mod use_notices;
pub mod use_overlays;
pub mod use_scroll;
pub mod use_session;
pub mod use_viewport;

// WASM-only: scoped document/window listener guards
#[cfg(target_arch = "wasm32")]
pub mod listeners;

pub use use_bookmarks::{use_bookmarks, use_bookmarks_provider, Bookmarks};
pub use use_notices::{use_notices, use_notices_provider};
pub use use_overlays::{use_overlays, OverlayController, OVERLAY_REGION_SELECTOR};
pub use use_scroll::use_scrolled;
pub use use_session::{use_session, use_session_provider, Session};
pub use use_viewport::use_viewport_mode;
