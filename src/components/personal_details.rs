//! Personal Details Card
//!
//! Read-only name and phone rows with an Edit action. In edit mode the rows
//! become inputs bound to the screen's drafts; Save validates and dispatches.

use dioxus::prelude::*;
use profiledesk_ui::{Button, ButtonVariant, DetailRow, TextField};

use crate::context::use_screen;

#[component]
pub fn PersonalDetailsCard() -> Element {
    let mut screen = use_screen();

    let state = screen.read();
    let strings = state.strings();
    let Some(user) = state.user() else {
        return rsx! {};
    };
    let name = user.name.clone();
    let phone = user.phone.clone();
    let editing = state.is_editing();
    let draft_name = state.draft_name().to_string();
    let draft_phone = state.draft_phone().to_string();
    drop(state);

    rsx! {
        section { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "{strings.personal_details}" }
                if !editing {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| screen.write().start_edit(),
                        "{strings.edit}"
                    }
                }
            }

            if editing {
                TextField {
                    id: "profile-name".to_string(),
                    label: strings.name.to_string(),
                    value: draft_name,
                    required: true,
                    oninput: move |v: String| screen.write().set_draft_name(&v),
                }
                TextField {
                    id: "profile-phone".to_string(),
                    label: strings.phone.to_string(),
                    value: draft_phone,
                    input_type: "tel".to_string(),
                    placeholder: "10-digit mobile number".to_string(),
                    numeric: true,
                    maxlength: 10usize,
                    required: true,
                    oninput: move |v: String| screen.write().set_draft_phone(&v),
                }
                div { class: "button-row",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| screen.write().cancel_edit(),
                        "{strings.cancel}"
                    }
                    Button {
                        onclick: move |_| {
                            screen.write().save_profile();
                        },
                        "{strings.save}"
                    }
                }
            } else {
                DetailRow { label: strings.name.to_string(), value: name }
                DetailRow { label: strings.phone.to_string(), value: phone }
            }
        }
    }
}
