//! Toggle Switch Component

use dioxus::prelude::*;

/// CSS class for a switch in the given state
pub fn toggle_class(on: bool, pending: bool) -> &'static str {
    match (on, pending) {
        (_, true) => "toggle pending",
        (true, false) => "toggle on",
        (false, false) => "toggle",
    }
}

/// Properties for the Toggle component
#[derive(Clone, PartialEq, Props)]
pub struct ToggleProps {
    /// Current state
    pub on: bool,
    /// Called when the user asks to flip; the owner decides the new state
    pub ontoggle: EventHandler<()>,
    /// Accessible label
    pub label: String,
    /// Waiting on an async check; input is ignored
    #[props(default = false)]
    pub pending: bool,
}

/// iOS-style switch
///
/// The switch never changes itself; it only reports the request, so a
/// failed verification leaves it where it was.
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let class = toggle_class(props.on, props.pending);
    let pending = props.pending;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "switch",
            "aria-checked": "{props.on}",
            "aria-label": "{props.label}",
            disabled: pending,
            onclick: move |_| {
                if !pending {
                    props.ontoggle.call(());
                }
            },
            span { class: "toggle-knob" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_classes() {
        assert_eq!(toggle_class(false, false), "toggle");
        assert_eq!(toggle_class(true, false), "toggle on");
        assert_eq!(toggle_class(true, true), "toggle pending");
        assert_eq!(toggle_class(false, true), "toggle pending");
    }
}
