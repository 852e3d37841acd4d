use dioxus::prelude::*;

use crate::app::components::InsightCard;
use crate::app::pages::routes::Route;
use crate::domain::catalog::generate_insight_posts;
use crate::shared::hooks::{use_bookmarks, use_session};

/// Insights catalog. Bookmark toggles appear once the signed-in user's
/// saved set has loaded; anonymous visitors just read.
#[component]
pub fn Insights() -> Element {
    let session = use_session();
    let bookmarks = use_bookmarks();

    let posts = generate_insight_posts();
    let show_bookmarks = session.has_identity() && bookmarks.ready();

    rsx! {
        div { class: "c-page",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "Insights" }
                p { class: "c-page__description",
                    "Research and analysis from the CryptoHub editorial desk."
                }
            }
            div { class: "c-insight-grid",
                for post in posts {
                    InsightCard {
                        key: "{post.id}",
                        post: post.clone(),
                        show_bookmark: show_bookmarks,
                    }
                }
            }
        }
    }
}

/// Single article page. Content delivery is out of scope; this renders the
/// catalog entry itself.
#[component]
pub fn InsightDetail(post_id: String) -> Element {
    let posts = generate_insight_posts();
    let post = posts.into_iter().find(|p| p.id == post_id);

    match post {
        Some(post) => rsx! {
            article { class: "c-page c-article",
                Link { to: Route::Insights {}, class: "c-breadcrumb", "← All Insights" }
                span {
                    class: "c-article__badge",
                    style: "background: {post.badge_color_or_default()}",
                    "{post.category}"
                }
                h1 { class: "c-page__title", "{post.title}" }
                p { class: "c-article__meta",
                    "{post.published_label()} • {post.read_time_label()}"
                }
                img { class: "c-article__image", src: "{post.image}", alt: "{post.title}" }
                p { class: "c-article__excerpt", "{post.excerpt}" }
            }
        },
        None => rsx! {
            div { class: "c-page",
                h1 { class: "c-page__title", "Article not found" }
                p { class: "c-page__description", "The insight \"{post_id}\" does not exist." }
                Link { to: Route::Insights {}, class: "c-breadcrumb", "← All Insights" }
            }
        },
    }
}
