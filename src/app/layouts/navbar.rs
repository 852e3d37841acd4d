//! Global navbar
//!
//! One component drives every navigation overlay from the declarative menu
//! description: the desktop menu with hover dropdowns, the narrow-mode
//! slide-menu and dropdown sheet, and the profile menu. The overlay
//! machine guarantees the dropdowns and the mobile menu never show
//! together; the profile menu is independent.

use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::domain::models::{group_items, nav_menu, Identity, NavEntry, NavLink};
use crate::server_fns::sign_out;
use crate::shared::hooks::{
    use_notices, use_overlays, use_scrolled, use_session, use_viewport_mode, OverlayController,
};
use crate::shared::viewport::ViewportMode;

#[component]
pub fn Navbar() -> Element {
    let mode = use_viewport_mode();
    let scrolled = use_scrolled();
    let mut overlays = use_overlays(mode);
    let session = use_session();
    let route: Route = use_route();

    // The dashboard renders its own navigation; the menu region stays empty there.
    let on_dashboard = matches!(route, Route::Dashboard {});
    let current_path = route.to_string();
    let identity = session.current();
    let entries = nav_menu(identity.is_some());

    let snapshot = overlays.snapshot();
    let open_dropdown: Option<String> = snapshot.open_dropdown().map(str::to_string);
    let mobile_open = snapshot.mobile_menu_open();
    let narrow = *mode.read() == ViewportMode::Narrow;

    let nav_class = if *scrolled.read() {
        "c-navbar c-navbar--scrolled"
    } else {
        "c-navbar"
    };
    let toggle_class = if mobile_open {
        "c-navbar__toggle c-navbar__toggle--open"
    } else {
        "c-navbar__toggle"
    };

    rsx! {
        nav { class: "{nav_class}",
            div { class: "c-navbar__inner",
                // LEFT - logo
                Link {
                    to: Route::Home {},
                    class: "c-navbar__logo",
                    onclick: move |_| overlays.dismiss_all(),
                    img { src: "/assets/crypto-logo.png", alt: "CryptoHub" }
                    span { "CryptoHub" }
                }

                // CENTER - menu (desktop layout; hidden by CSS when narrow)
                if !on_dashboard {
                    ul { class: "c-navbar__menu", "data-overlay-region": "nav",
                        for entry in entries.clone() {
                            DesktopMenuItem {
                                entry,
                                overlays,
                                current_path: current_path.clone(),
                                open_dropdown: open_dropdown.clone(),
                            }
                        }
                    }
                }

                // RIGHT - session actions and mobile toggle
                div { class: "c-navbar__actions",
                    if let Some(identity) = identity.clone() {
                        ProfileMenu { identity, overlays }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "c-navbar__btn c-navbar__btn--login",
                            "Login"
                        }
                        Link {
                            to: Route::Signup {},
                            class: "c-navbar__btn c-navbar__btn--signup",
                            "Get Started"
                        }
                    }

                    if !on_dashboard {
                        button {
                            class: "{toggle_class}",
                            "data-overlay-region": "nav",
                            aria_label: "Toggle navigation",
                            onclick: move |_| overlays.toggle_mobile_menu(),
                            if mobile_open { "✕" } else { "☰" }
                        }
                    }
                }
            }

            // Narrow-mode surfaces share the primary region: the machine
            // opens at most one of them at a time.
            if narrow && !on_dashboard {
                if mobile_open {
                    MobileMenu {
                        entries: entries.clone(),
                        overlays,
                        current_path: current_path.clone(),
                    }
                }
                if let Some(label) = open_dropdown.clone() {
                    DropdownSheet { entries, overlays, label }
                }
            }
        }
    }
}

/// Desktop menu entry: a plain link or a hover-driven dropdown group.
#[component]
fn DesktopMenuItem(
    entry: NavEntry,
    overlays: OverlayController,
    current_path: String,
    open_dropdown: Option<String>,
) -> Element {
    let mut overlays = overlays;

    match entry {
        NavEntry::Link(link) => {
            let link_class = if current_path == link.path {
                "c-navbar__link c-navbar__link--active"
            } else {
                "c-navbar__link"
            };
            rsx! {
                li { class: "c-navbar__item",
                    Link {
                        to: link.path,
                        class: "{link_class}",
                        onclick: move |_| overlays.dismiss_all(),
                        "{link.label}"
                    }
                }
            }
        }
        NavEntry::Group { label, items } => {
            let open = open_dropdown.as_deref() == Some(label);
            let trigger_class = if open {
                "c-navbar__link c-navbar__link--trigger c-navbar__link--active"
            } else {
                "c-navbar__link c-navbar__link--trigger"
            };
            rsx! {
                li {
                    class: "c-navbar__item c-navbar__item--group",
                    onmouseenter: move |_| overlays.hover_enter_dropdown(label),
                    onmouseleave: move |_| overlays.hover_leave_dropdown(label),
                    span {
                        class: "{trigger_class}",
                        role: "button",
                        tabindex: "0",
                        onclick: move |_| overlays.activate_dropdown(label),
                        "{label}"
                    }
                    if open {
                        ul { class: "c-navbar__dropdown",
                            for item in items {
                                DropdownLink { item, overlays }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DropdownLink(item: NavLink, overlays: OverlayController) -> Element {
    let mut overlays = overlays;
    rsx! {
        li {
            Link {
                to: item.path,
                class: "c-navbar__dropdown-link",
                onclick: move |_| overlays.dismiss_all(),
                "{item.label}"
            }
        }
    }
}

/// Narrow-mode slide-menu. Group entries hand the primary region over to
/// the dropdown sheet.
#[component]
fn MobileMenu(entries: Vec<NavEntry>, overlays: OverlayController, current_path: String) -> Element {
    rsx! {
        div { class: "c-navbar__mobile", "data-overlay-region": "nav",
            ul { class: "c-navbar__mobile-list",
                for entry in entries {
                    MobileMenuItem { entry, overlays, current_path: current_path.clone() }
                }
            }
        }
    }
}

#[component]
fn MobileMenuItem(entry: NavEntry, overlays: OverlayController, current_path: String) -> Element {
    let mut overlays = overlays;

    match entry {
        NavEntry::Link(link) => {
            let link_class = if current_path == link.path {
                "c-navbar__link c-navbar__link--active"
            } else {
                "c-navbar__link"
            };
            rsx! {
                li { class: "c-navbar__mobile-item",
                    Link {
                        to: link.path,
                        class: "{link_class}",
                        onclick: move |_| overlays.dismiss_all(),
                        "{link.label}"
                    }
                }
            }
        }
        NavEntry::Group { label, .. } => rsx! {
            li { class: "c-navbar__mobile-item",
                button {
                    class: "c-navbar__link c-navbar__link--trigger",
                    onclick: move |_| overlays.activate_dropdown(label),
                    "{label}"
                }
            }
        },
    }
}

/// Narrow-mode dropdown sheet for one group, opened from the slide-menu.
#[component]
fn DropdownSheet(entries: Vec<NavEntry>, overlays: OverlayController, label: String) -> Element {
    let items: Vec<NavLink> = group_items(&entries, &label)
        .map(|items| items.to_vec())
        .unwrap_or_default();

    rsx! {
        div { class: "c-navbar__sheet", "data-overlay-region": "nav",
            div { class: "c-navbar__sheet-title", "{label}" }
            ul {
                for item in items {
                    DropdownLink { item, overlays }
                }
            }
        }
    }
}

/// Profile button + menu. Independent of the primary nav region.
#[component]
fn ProfileMenu(identity: Identity, overlays: OverlayController) -> Element {
    let mut overlays = overlays;
    let session = use_session();
    let notices = use_notices();
    let nav = use_navigator();

    let open = overlays.snapshot().profile_open();

    rsx! {
        div { class: "c-navbar__profile", "data-overlay-region": "profile",
            button {
                class: "c-navbar__profile-btn",
                aria_label: "User profile menu",
                onclick: move |_| overlays.toggle_profile_menu(),
                if let Some(photo) = identity.photo_url.clone() {
                    img { class: "c-navbar__profile-photo", src: "{photo}", alt: "{identity.label()}" }
                } else {
                    span { class: "c-navbar__profile-glyph", "👤" }
                }
            }

            if open {
                div { class: "c-navbar__profile-menu",
                    div { class: "c-navbar__profile-email", "{identity.email}" }
                    div { class: "c-navbar__profile-divider" }

                    if identity.is_password_provider() {
                        Link {
                            to: Route::ChangePassword {},
                            class: "c-navbar__profile-item",
                            onclick: move |_| overlays.dismiss_all(),
                            "Change Password"
                        }
                    }
                    Link {
                        to: Route::SavedInsights {},
                        class: "c-navbar__profile-item",
                        onclick: move |_| overlays.dismiss_all(),
                        "Saved Insights"
                    }
                    button {
                        class: "c-navbar__profile-item c-navbar__profile-item--signout",
                        onclick: move |_| {
                            overlays.dismiss_all();
                            let session = session;
                            let mut notices = notices;
                            spawn(async move {
                                match sign_out().await {
                                    Ok(_) => {
                                        let mut identity = session.identity;
                                        identity.set(None);
                                        nav.push(Route::Home {});
                                    }
                                    Err(e) => {
                                        tracing::error!("Sign out failed: {e:?}");
                                        notices.write().push_failure("Sign out failed");
                                    }
                                }
                            });
                        },
                        "Sign Out"
                    }
                }
            }
        }
    }
}
