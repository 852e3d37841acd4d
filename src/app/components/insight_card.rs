use dioxus::prelude::*;

use crate::app::components::BookmarkButton;
use crate::app::pages::routes::Route;
use crate::domain::models::InsightPost;

/// Insight card used on the insights grid and the saved-insights page.
/// Activating the card opens the article; the bookmark button is overlaid
/// and stops propagation so it never triggers navigation.
#[component]
pub fn InsightCard(post: InsightPost, #[props(default = false)] show_bookmark: bool) -> Element {
    let nav = use_navigator();
    let post_id = post.id.clone();
    let badge_color = post.badge_color_or_default().to_string();

    rsx! {
        article {
            class: "c-insight-card",
            onclick: move |_| {
                nav.push(Route::InsightDetail {
                    post_id: post_id.clone(),
                });
            },
            div { class: "c-insight-card__media",
                img { class: "c-insight-card__image", src: "{post.image}", alt: "{post.title}" }
                span {
                    class: "c-insight-card__badge",
                    style: "background: {badge_color}",
                    "{post.category}"
                }
                if show_bookmark {
                    div { class: "c-insight-card__bookmark",
                        BookmarkButton { post_id: post.id.clone() }
                    }
                }
            }
            div { class: "c-insight-card__body",
                div { class: "c-insight-card__meta",
                    span { "{post.published_label()}" }
                    span { "•" }
                    span { "{post.read_time_label()}" }
                }
                h3 { class: "c-insight-card__title", "{post.title}" }
                p { class: "c-insight-card__excerpt", "{post.excerpt}" }
                span { class: "c-insight-card__cta", "Read Article →" }
            }
        }
    }
}
