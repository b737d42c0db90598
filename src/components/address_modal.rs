//! Address Form Modal
//!
//! Blank when adding, pre-filled when editing. Label chips on top, then the
//! four required text fields. Submit keeps the modal open on invalid input.

use dioxus::prelude::*;
use profiledesk_core::{AddressField, AddressLabel};
use profiledesk_ui::{Button, ButtonVariant, Modal, TextField};

use crate::context::use_screen;

#[component]
pub fn AddressFormModal() -> Element {
    let mut screen = use_screen();

    let state = screen.read();
    let strings = state.strings();
    let Some(modal) = state.address_modal().cloned() else {
        return rsx! {};
    };
    drop(state);

    let title = modal.title().to_string();
    let draft = modal.draft;

    rsx! {
        Modal {
            title,
            on_close: move |_| screen.write().close_address_modal(),
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| screen.write().close_address_modal(),
                    "{strings.cancel}"
                }
                Button {
                    onclick: move |_| {
                        screen.write().submit_address();
                    },
                    "{strings.save}"
                }
            },

            div { class: "label-picker",
                for label in AddressLabel::ALL {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: if label == draft.label { "label-option selected" } else { "label-option" },
                        onclick: move |_| screen.write().set_address_label(label),
                        "{label.icon()} {label}"
                    }
                }
            }

            for field in AddressField::ALL {
                TextField {
                    key: "{field.label()}",
                    id: format!("address-{}", field.label().to_lowercase().replace(' ', "-")),
                    label: field.label().to_string(),
                    placeholder: field.placeholder().to_string(),
                    value: draft.get(field).to_string(),
                    required: true,
                    numeric: field == AddressField::Pincode,
                    maxlength: (field == AddressField::Pincode).then_some(6usize),
                    oninput: move |v: String| screen.write().set_address_field(field, &v),
                }
            }
        }
    }
}
