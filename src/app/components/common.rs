use dioxus::prelude::*;

// Reusable loading indicator (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable error affordance (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String, children: Element) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "⚠️" }
            p { class: "c-error__text", "{message}" }
            {children}
        }
    }
}

// Reusable empty state with an action slot (BEM: c-empty)
#[component]
pub fn EmptyState(icon: String, title: String, description: String, children: Element) -> Element {
    rsx! {
        div { class: "c-empty",
            div { class: "c-empty__icon", "{icon}" }
            h3 { class: "c-empty__title", "{title}" }
            p { class: "c-empty__description", "{description}" }
            {children}
        }
    }
}
