//! Static page stubs
//!
//! Marketing and auth page content is produced elsewhere; these stubs keep
//! every navigation target resolvable.

use dioxus::prelude::*;

#[component]
fn StaticPage(title: String, description: String) -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__description", "{description}" }
        }
    }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { StaticPage { title: "Pricing", description: "Plans for every kind of trader." } }
}

#[component]
pub fn Features() -> Element {
    rsx! { StaticPage { title: "Features", description: "Everything CryptoHub can do for you." } }
}

#[component]
pub fn NewListings() -> Element {
    rsx! { StaticPage { title: "New Listings", description: "Recently listed assets across major exchanges." } }
}

#[component]
pub fn About() -> Element {
    rsx! { StaticPage { title: "About", description: "Who we are and why we built CryptoHub." } }
}

#[component]
pub fn Contributors() -> Element {
    rsx! { StaticPage { title: "Contributors", description: "The people behind the project." } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { StaticPage { title: "Contact Us", description: "Questions, feedback, partnerships." } }
}

#[component]
pub fn Faq() -> Element {
    rsx! { StaticPage { title: "FAQ", description: "Frequently asked questions." } }
}

#[component]
pub fn Leaderboard() -> Element {
    rsx! { StaticPage { title: "Leaderboard", description: "Top traders this season." } }
}

#[component]
pub fn Login() -> Element {
    rsx! { StaticPage { title: "Login", description: "Sign in to sync your saved insights." } }
}

#[component]
pub fn Signup() -> Element {
    rsx! { StaticPage { title: "Get Started", description: "Create your CryptoHub account." } }
}

#[component]
pub fn ChangePassword() -> Element {
    rsx! { StaticPage { title: "Change Password", description: "Update the password on your account." } }
}
