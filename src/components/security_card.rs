//! Security Card
//!
//! Device-lock switch gated by platform verification, app PIN change, and
//! the storage cleanup action.

use dioxus::prelude::*;
use profiledesk_ui::{Button, ButtonVariant, TextField, Toggle};

use crate::context::{use_screen, use_verifier};

#[component]
pub fn SecurityCard() -> Element {
    let mut screen = use_screen();
    let verifier = use_verifier();

    let state = screen.read();
    let strings = state.strings();
    let Some(user) = state.user() else {
        return rsx! {};
    };
    let lock_on = user.biometric_enabled;
    let has_pin = user.has_pin();
    let pending = state.is_lock_pending();
    let pin_draft = state.pin_draft().to_string();
    drop(state);

    let pin_label = if has_pin {
        format!("{} (set)", strings.app_pin)
    } else {
        strings.app_pin.to_string()
    };

    // The switch only flips after the verifier says yes
    let toggle_lock = move |_: ()| {
        let request = screen.write().begin_lock_toggle();
        if let Some(request) = request {
            let verifier = verifier.clone();
            spawn(async move {
                let verified = verifier.verify(request.change).await;
                screen.write().finish_lock_toggle(request, verified);
            });
        }
    };

    rsx! {
        section { class: "card",
            h3 { class: "card-title", "{strings.security}" }

            div { class: "setting-row",
                div {
                    p { "{strings.device_lock}" }
                    p { class: "setting-hint",
                        if pending {
                            "Waiting for verification..."
                        } else if lock_on {
                            "Unlock is required when the app opens"
                        } else {
                            "Anyone with this device can open the app"
                        }
                    }
                }
                Toggle {
                    on: lock_on,
                    pending,
                    label: strings.device_lock.to_string(),
                    ontoggle: toggle_lock,
                }
            }

            div { class: "inline-form",
                TextField {
                    id: "app-pin".to_string(),
                    label: pin_label,
                    value: pin_draft,
                    input_type: "password".to_string(),
                    placeholder: "4 to 10 digits".to_string(),
                    numeric: true,
                    maxlength: 10usize,
                    oninput: move |v: String| screen.write().set_pin_draft(&v),
                }
                Button {
                    onclick: move |_| {
                        screen.write().change_pin();
                    },
                    if has_pin { "Change PIN" } else { "Set PIN" }
                }
            }

            div { class: "setting-row",
                p { class: "setting-hint", "Removes cached activity. Your profile is kept." }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        screen.write().run_cleanup();
                    },
                    "{strings.cleanup}"
                }
            }
        }
    }
}
