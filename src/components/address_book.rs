//! Saved Addresses Card
//!
//! Lists addresses in the order they were added, each with edit and delete
//! actions. Delete only asks; the confirmation modal does the rest.

use dioxus::prelude::*;
use profiledesk_core::Address;
use profiledesk_ui::{Button, ButtonVariant, IconButton};

use crate::context::use_screen;

#[component]
pub fn AddressBook() -> Element {
    let mut screen = use_screen();

    let state = screen.read();
    let strings = state.strings();
    let addresses = state.user().map(|u| u.addresses.clone()).unwrap_or_default();
    drop(state);

    rsx! {
        section { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "{strings.addresses}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| screen.write().open_add_address(),
                    "+ {strings.add_address}"
                }
            }

            if addresses.is_empty() {
                p { class: "empty-state", "No saved addresses yet" }
            } else {
                div { class: "address-list",
                    for address in addresses {
                        AddressCard { key: "{address.id}", address }
                    }
                }
            }
        }
    }
}

/// One saved address with edit/delete icons
#[component]
pub fn AddressCard(address: Address) -> Element {
    let mut screen = use_screen();
    let edit_id = address.id.clone();
    let delete_id = address.id.clone();

    rsx! {
        div { class: "address-card",
            span { class: "address-icon", "{address.label.icon()}" }
            div { class: "address-body",
                p { class: "address-label", "{address.label}" }
                p { class: "address-text", "{address.summary()}" }
            }
            div { class: "address-actions",
                IconButton {
                    aria_label: "Edit address".to_string(),
                    onclick: move |_| {
                        screen.write().open_edit_address(&edit_id);
                    },
                    "\u{270E}"
                }
                IconButton {
                    aria_label: "Delete address".to_string(),
                    class: "danger".to_string(),
                    onclick: move |_| screen.write().request_delete(&delete_id),
                    "\u{1F5D1}"
                }
            }
        }
    }
}
