pub mod bookmark_api;

pub use bookmark_api::{
    BookmarkIdsResponse, RemoteBookmarks, SetBookmarkRequest, SetBookmarkResponse,
};
