// Shared constants
// Breakpoints, thresholds and API paths used on both client and server

/// Widths strictly greater than this are the "wide" (pointer/hover) layout.
pub const WIDE_BREAKPOINT_PX: f64 = 1024.0;

/// Vertical scroll offset past which the navbar switches to its scrolled chrome.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Maximum number of notices kept on screen; older ones are dropped first.
pub const MAX_NOTICES: usize = 4;

/// Seconds a toast stays visible before auto-dismissing.
pub const NOTICE_DISMISS_SECS: u32 = 4;

/// Base path of the bookmark store HTTP API.
pub const BOOKMARK_API_BASE: &str = "/api/bookmarks";
