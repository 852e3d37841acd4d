//! Scoped DOM event subscriptions
//!
//! Document and window listeners are process-wide from the browser's point
//! of view, so each one is owned by a guard and removed again when the
//! guard drops. A coordinator that unmounts mid-session can therefore never
//! leave callbacks behind, and a registration that fails partway leaves no
//! partial state (guards are built one at a time).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!(event, ?err, "Failed to register DOM listener");
            return None;
        }
        Some(DomListener {
            target,
            event,
            callback,
        })
    }

    pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::new(document.into(), event, handler)
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::new(window.into(), event, handler)
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
