//! Scroll position hook
//!
//! Binary past-threshold signal for the navbar chrome. Purely
//! presentational; nothing else consumes it.

use dioxus::prelude::*;

use crate::shared::constants::SCROLL_THRESHOLD_PX;

pub fn past_scroll_threshold(y: f64) -> bool {
    y > SCROLL_THRESHOLD_PX
}

pub fn use_scrolled() -> Signal<bool> {
    let scrolled = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        use super::listeners::DomListener;

        let mut scrolled = scrolled;
        use_hook(move || {
            std::rc::Rc::new(DomListener::on_window("scroll", move |_| {
                let next = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .map(past_scroll_threshold)
                    .unwrap_or(false);
                if *scrolled.peek() != next {
                    scrolled.set(next);
                }
            }))
        });
    }

    scrolled
}
