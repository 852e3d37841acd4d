use dioxus::prelude::*;

use crate::app::components::Toasts;
use crate::app::layouts::Navbar;
use crate::app::pages::dashboard::Dashboard;
use crate::app::pages::home::Home;
use crate::app::pages::insights::{InsightDetail, Insights};
use crate::app::pages::placeholder::{
    About, ChangePassword, Contact, Contributors, Faq, Features, Leaderboard, Login, NewListings,
    Pricing, Signup,
};
use crate::app::pages::saved_insights::SavedInsights;
use crate::shared::hooks::{use_bookmarks_provider, use_notices_provider, use_session_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    // Insights catalog and article pages
    #[route("/insights")]
    Insights {},
    #[route("/insights/:post_id")]
    InsightDetail { post_id: String },

    // Saved-insights surface (signed-in only)
    #[route("/saved-insights")]
    SavedInsights {},

    // Dashboard suppresses the primary nav region
    #[route("/dashboard")]
    Dashboard {},

    // Marketing / static pages
    #[route("/pricing")]
    Pricing {},
    #[route("/features")]
    Features {},
    #[route("/new-listings")]
    NewListings {},
    #[route("/about")]
    About {},
    #[route("/contributors")]
    Contributors {},
    #[route("/contactus")]
    Contact {},
    #[route("/faq")]
    Faq {},
    #[route("/leaderboard")]
    Leaderboard {},

    // Auth surfaces (the protocol itself lives elsewhere)
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/change-password")]
    ChangePassword {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("CryptoHub insight hub initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    // Providers in dependency order: notices feed the synchronizer, the
    // synchronizer gates on the session.
    let notices = use_notices_provider();
    let _session = use_session_provider();
    let _bookmarks = use_bookmarks_provider(notices);

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-app",
            Navbar {}
            main { class: "c-app__main",
                Outlet::<Route> {}
            }
            Toasts {}
        }
    }
}
