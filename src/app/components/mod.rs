pub mod bookmark_button;
pub mod common;
pub mod insight_card;
pub mod toasts;

pub use bookmark_button::BookmarkButton;
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use insight_card::InsightCard;
pub use toasts::Toasts;
