use dioxus::prelude::*;

use crate::app::pages::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "c-page c-page--hero",
            h1 { class: "c-page__title", "Track the market. Keep the insights that matter." }
            p { class: "c-page__description",
                "CryptoHub brings prices, research and your reading list into one place."
            }
            div { class: "c-page__actions",
                Link { to: Route::Insights {}, class: "c-btn c-btn--primary", "Browse Insights" }
                Link { to: Route::Pricing {}, class: "c-btn c-btn--secondary", "See Pricing" }
            }
        }
    }
}
