use dioxus::prelude::*;

use crate::shared::hooks::use_notices;
use crate::shared::notifications::{Notice, NoticeKind};

/// Toast viewport. Renders the shared notice queue; each toast dismisses
/// itself after a few seconds or on click.
#[component]
pub fn Toasts() -> Element {
    let notices = use_notices();
    let items: Vec<Notice> = notices.read().iter().cloned().collect();

    rsx! {
        div { class: "c-toasts",
            for notice in items {
                Toast { key: "{notice.id}", notice: notice.clone() }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice) -> Element {
    let mut notices = use_notices();

    let class = match notice.kind {
        NoticeKind::Success => "c-toast c-toast--success",
        NoticeKind::Failure => "c-toast c-toast--failure",
    };
    let glyph = match notice.kind {
        NoticeKind::Success => "✓",
        NoticeKind::Failure => "✕",
    };
    let id = notice.id;

    // Auto-dismiss; the timer only exists in the browser.
    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        spawn(async move {
            use crate::shared::constants::NOTICE_DISMISS_SECS;
            gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_SECS * 1000).await;
            notices.write().dismiss(id);
        });
    });

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| notices.write().dismiss(id),
            span { class: "c-toast__glyph", "{glyph}" }
            span { class: "c-toast__message", "{notice.message}" }
        }
    }
}
