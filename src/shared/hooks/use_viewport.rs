//! Viewport mode hook
//!
//! Re-evaluates the breakpoint on every resize event but only writes the
//! signal when the computed mode actually changed, so same-mode resizes
//! produce no transitions downstream.

use dioxus::prelude::*;

use crate::shared::viewport::ViewportMode;

pub fn use_viewport_mode() -> Signal<ViewportMode> {
    let mode = use_signal(initial_viewport_mode);

    #[cfg(target_arch = "wasm32")]
    {
        use super::listeners::DomListener;

        let mut mode = mode;
        use_hook(move || {
            std::rc::Rc::new(DomListener::on_window("resize", move |_| {
                let next = current_window_mode();
                if *mode.peek() != next {
                    mode.set(next);
                }
            }))
        });
    }

    mode
}

fn initial_viewport_mode() -> ViewportMode {
    #[cfg(target_arch = "wasm32")]
    {
        current_window_mode()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Server rendering has no viewport; hydration corrects this.
        ViewportMode::Wide
    }
}

#[cfg(target_arch = "wasm32")]
fn current_window_mode() -> ViewportMode {
    use crate::shared::viewport::mode_for_width;

    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(mode_for_width)
        .unwrap_or(ViewportMode::Wide)
}
