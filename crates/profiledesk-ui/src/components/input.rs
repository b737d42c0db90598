//! Input Field Components
//!
//! Labelled text inputs. Numeric fields use `inputmode="numeric"` so mobile
//! keyboards open on the digit pad; sanitising is left to the caller.

use dioxus::prelude::*;

use crate::components::class_list;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Current value
    pub value: String,
    /// Called with the raw text on every keystroke
    pub oninput: EventHandler<String>,
    /// Label text above the input
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, tel, password)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Open the numeric keypad on touch devices
    #[props(default = false)]
    pub numeric: bool,
    #[props(default)]
    pub maxlength: Option<usize>,
    /// Marks the label with an asterisk
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Used for label association
    pub id: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         id: "profile-phone".to_string(),
///         label: "Phone".to_string(),
///         value: screen.read().draft_phone().to_string(),
///         input_type: "tel".to_string(),
///         numeric: true,
///         maxlength: 10,
///         oninput: move |s: String| screen.write().set_draft_phone(&s),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let input_class = class_list("input-field", props.class.as_deref());
    let inputmode = if props.numeric { "numeric" } else { "text" };
    let maxlength = props.maxlength.map(|n| n.to_string()).unwrap_or_default();

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "input-required", " *" }
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                inputmode: "{inputmode}",
                maxlength: "{maxlength}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Read-only label/value row used outside edit mode
#[component]
pub fn DetailRow(label: String, value: String) -> Element {
    let shown = if value.is_empty() { "Not set".to_string() } else { value };

    rsx! {
        div { class: "detail-row",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", "{shown}" }
        }
    }
}
