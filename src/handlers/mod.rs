/// Remote bookmark store endpoints
pub mod bookmarks;

pub use bookmarks::{get_bookmarks_handler, set_bookmark_handler, BookmarksState};
