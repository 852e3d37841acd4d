//! Overlay coordinator hook
//!
//! Wraps the pure overlay machine in a signal and owns the document-level
//! dismissal listeners (outside click, Escape). The listeners are scoped
//! subscriptions released when the hosting component unmounts.

use dioxus::prelude::*;

use crate::shared::overlay::OverlayState;
use crate::shared::viewport::ViewportMode;

/// Clicks inside elements matching this selector never dismiss overlays;
/// everything else counts as outside.
pub const OVERLAY_REGION_SELECTOR: &str = "[data-overlay-region]";

#[derive(Clone, Copy, PartialEq)]
pub struct OverlayController {
    state: Signal<OverlayState>,
}

impl OverlayController {
    pub fn snapshot(&self) -> OverlayState {
        self.state.read().clone()
    }

    pub fn hover_enter_dropdown(&mut self, label: &str) {
        if self.state.peek().open_dropdown() != Some(label) {
            self.state.write().hover_enter_dropdown(label);
        }
    }

    pub fn hover_leave_dropdown(&mut self, label: &str) {
        if self.state.peek().open_dropdown() == Some(label) {
            self.state.write().hover_leave_dropdown(label);
        }
    }

    pub fn activate_dropdown(&mut self, label: &str) {
        self.state.write().activate_dropdown(label);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.write().toggle_mobile_menu();
    }

    pub fn toggle_profile_menu(&mut self) {
        self.state.write().toggle_profile_menu();
    }

    pub fn dismiss_all(&mut self) {
        // Dismissing a closed state is a no-op; skip the signal write so
        // stray outside clicks don't rerender the navbar.
        if self.state.peek().any_open() {
            self.state.write().dismiss_all();
        }
    }

    pub fn set_mode(&mut self, mode: ViewportMode) {
        if self.state.peek().mode() != mode {
            self.state.write().set_mode(mode);
        }
    }
}

pub fn use_overlays(mode: Signal<ViewportMode>) -> OverlayController {
    let state = use_signal(|| OverlayState::new(*mode.peek()));
    let mut controller = OverlayController { state };

    // Follow the breakpoint oracle; the machine resets its primary region
    // on actual flips and ignores repeats.
    use_effect(move || {
        let next = *mode.read();
        controller.set_mode(next);
    });

    #[cfg(target_arch = "wasm32")]
    use_hook(move || std::rc::Rc::new(dismissal_listeners(controller)));

    controller
}

#[cfg(target_arch = "wasm32")]
fn dismissal_listeners(controller: OverlayController) -> Vec<super::listeners::DomListener> {
    use super::listeners::DomListener;
    use wasm_bindgen::JsCast;

    let mut guards = Vec::new();

    let mut on_click = controller;
    if let Some(guard) = DomListener::on_document("click", move |event| {
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(OVERLAY_REGION_SELECTOR).ok().flatten())
            .is_some();
        if !inside {
            on_click.dismiss_all();
        }
    }) {
        guards.push(guard);
    }

    let mut on_key = controller;
    if let Some(guard) = DomListener::on_document("keydown", move |event| {
        let is_escape = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .map(|key| key.key() == "Escape")
            .unwrap_or(false);
        if is_escape {
            on_key.dismiss_all();
        }
    }) {
        guards.push(guard);
    }

    guards
}
