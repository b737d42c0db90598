//! Modal Shell Component
//!
//! Overlay plus bottom sheet. Clicking the overlay closes; clicks inside the
//! sheet are stopped from reaching it.

use dioxus::prelude::*;

use crate::components::IconButton;

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
    /// Buttons rendered in the footer
    #[props(default)]
    pub actions: Option<Element>,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         title: "Delete address?".to_string(),
///         on_close: move |_| screen.write().cancel_delete(),
///         actions: rsx! { Button { variant: ButtonVariant::Danger, "Delete" } },
///         p { "This cannot be undone." }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "modal-sheet",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    IconButton {
                        onclick: move |_| props.on_close.call(()),
                        aria_label: "Close".to_string(),
                        class: "close-btn".to_string(),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(actions) = props.actions.clone() {
                    div { class: "modal-actions", {actions} }
                }
            }
        }
    }
}
