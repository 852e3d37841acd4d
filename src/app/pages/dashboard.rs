use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::shared::hooks::use_session;

/// Dashboard shell. Summary cards and portfolio data live in their own
/// subsystem; this page exists so the navbar can suppress its menu region
/// on the dashboard route.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    rsx! {
        div { class: "c-page",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "Dashboard" }
                if let Some(identity) = session.current() {
                    p { class: "c-page__description", "Welcome back, {identity.label()}" }
                }
            }
            div { class: "c-dashboard-grid",
                section { class: "c-dashboard-card",
                    h3 { "Portfolio" }
                    p { class: "c-dashboard-card__hint", "Connect an exchange to see balances." }
                }
                section { class: "c-dashboard-card",
                    h3 { "Watchlist" }
                    p { class: "c-dashboard-card__hint", "No assets tracked yet." }
                }
                section { class: "c-dashboard-card",
                    h3 { "Reading List" }
                    Link { to: Route::SavedInsights {}, class: "c-btn c-btn--secondary",
                        "Open Saved Insights"
                    }
                }
            }
        }
    }
}
