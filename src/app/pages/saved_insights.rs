use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, InsightCard, LoadingText};
use crate::app::pages::routes::Route;
use crate::domain::catalog::generate_insight_posts;
use crate::shared::bookmarks::{derive_saved_view, BookmarkSlot};
use crate::shared::hooks::{use_bookmarks, use_session};

/// Saved-insights page. Loading, empty and failed are three different
/// screens; removal goes through the synchronizer, so a card only leaves
/// the grid after the remote store confirmed.
#[component]
pub fn SavedInsights() -> Element {
    let session = use_session();
    let mut bookmarks = use_bookmarks();
    let nav = use_navigator();

    // Identity still resolving: don't flash the sign-in prompt.
    if !*session.resolved.read() {
        return rsx! {
            LoadingText { message: "Loading saved insights..." }
        };
    }

    if !session.has_identity() {
        return rsx! {
            div { class: "c-page c-page--centered",
                h2 { class: "c-page__title", "Please log in to view saved insights" }
                Link { to: Route::Login {}, class: "c-btn c-btn--primary", "Login" }
            }
        };
    }

    let slot = bookmarks.slot();

    rsx! {
        div { class: "c-page",
            header { class: "c-page__header",
                button {
                    class: "c-breadcrumb",
                    onclick: move |_| {
                        nav.go_back();
                    },
                    "← Back"
                }
                h1 { class: "c-page__title", "🔖 Saved Insights" }
            }

            match slot {
                BookmarkSlot::NotLoaded | BookmarkSlot::Loading => rsx! {
                    LoadingText { message: "Loading saved insights..." }
                },
                BookmarkSlot::Failed => rsx! {
                    ErrorMessage { message: "Failed to load saved insights.",
                        button {
                            class: "c-btn c-btn--secondary",
                            onclick: move |_| bookmarks.reload(),
                            "Try Again"
                        }
                    }
                },
                BookmarkSlot::Loaded(ids) => {
                    let catalog = generate_insight_posts();
                    let saved = derive_saved_view(&catalog, &ids);
                    let count = saved.len();
                    let plural = if count == 1 { "" } else { "s" };

                    rsx! {
                        p { class: "c-page__description",
                            "You have {count} saved article{plural}"
                        }
                        if saved.is_empty() {
                            EmptyState {
                                icon: "🔖",
                                title: "No saved insights yet",
                                description: "Bookmark articles to read them later",
                                Link { to: Route::Insights {}, class: "c-btn c-btn--primary", "Browse Insights" }
                            }
                        } else {
                            div { class: "c-insight-grid",
                                for post in saved {
                                    InsightCard { key: "{post.id}", post: post.clone(), show_bookmark: true }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
