//! Delete confirmation for a saved address

use dioxus::prelude::*;
use profiledesk_ui::{Button, ButtonVariant, Modal};

use crate::context::use_screen;

#[component]
pub fn ConfirmDeleteModal() -> Element {
    let mut screen = use_screen();

    let state = screen.read();
    let strings = state.strings();
    let Some(address) = state.pending_delete().cloned() else {
        return rsx! {};
    };
    drop(state);

    rsx! {
        Modal {
            title: "Delete address?".to_string(),
            on_close: move |_| screen.write().cancel_delete(),
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| screen.write().cancel_delete(),
                    "{strings.cancel}"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        screen.write().confirm_delete();
                    },
                    "Delete"
                }
            },

            p { class: "address-label", "{address.label.icon()} {address.label}" }
            p { class: "address-text", "{address.summary()}" }
            p { class: "setting-hint", "This address will be removed from your account." }
        }
    }
}
