// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod identity;
pub mod menu;
pub mod post;

pub use identity::{has_identity, AuthProvider, Identity};
pub use menu::{group_items, nav_menu, NavEntry, NavLink};
pub use post::{InsightPost, DEFAULT_BADGE_COLOR};
