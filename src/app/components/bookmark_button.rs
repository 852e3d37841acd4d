use dioxus::prelude::*;

use crate::shared::hooks::use_bookmarks;

/// Bookmark toggle icon. Only rendered for signed-in users with a loaded
/// saved set; the synchronizer updates local state after the remote store
/// confirms, so the icon flips when the toggle lands, not before.
#[component]
pub fn BookmarkButton(post_id: String) -> Element {
    let mut bookmarks = use_bookmarks();
    let saved = bookmarks.is_saved(&post_id);

    let (class, title) = if saved {
        ("c-bookmark-btn c-bookmark-btn--saved", "Remove from saved")
    } else {
        ("c-bookmark-btn", "Save for later")
    };

    rsx! {
        button {
            class: "{class}",
            title: "{title}",
            aria_label: "{title}",
            onclick: move |evt| {
                evt.stop_propagation();
                bookmarks.toggle(&post_id);
            },
            "🔖"
        }
    }
}
