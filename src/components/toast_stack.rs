//! Toast Stack
//!
//! Renders the screen's toast queue above the bottom edge. Each toast removes
//! itself after a few seconds or when tapped.

use std::time::Duration;

use dioxus::prelude::*;
use profiledesk_core::Toast;

use crate::context::use_screen;

const TOAST_TTL: Duration = Duration::from_secs(3);

#[component]
pub fn ToastStack() -> Element {
    let screen = use_screen();
    let toasts = screen.read().toasts().toasts().to_vec();

    rsx! {
        div { class: "toast-stack", role: "status",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut screen = use_screen();
    let id = toast.id;

    // Timer is owned by this component and dropped with it
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            screen.write().dismiss_toast(id);
        })
    });

    rsx! {
        div {
            class: "toast {toast.kind.class()}",
            onclick: move |_| screen.write().dismiss_toast(id),
            "{toast.message}"
        }
    }
}
