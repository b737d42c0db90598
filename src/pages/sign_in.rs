//! Sign-in Page
//!
//! Shown on first launch and after logout. Entering a name resumes that
//! account or creates a new one.

use dioxus::prelude::*;
use profiledesk_ui::{Button, TextField};

use crate::app::Route;
use crate::context::use_screen;

#[component]
pub fn SignIn() -> Element {
    let mut screen = use_screen();
    let nav = use_navigator();
    let mut name = use_signal(String::new);

    let mut submit = move || {
        if screen.write().sign_in(&name()) {
            name.set(String::new());
            nav.replace(Route::Profile {});
        }
    };

    rsx! {
        div { class: "sign-in-page",
            header { class: "page-header",
                div {
                    h1 { class: "page-title", "Welcome" }
                    p { class: "page-subtitle", "Sign in to manage your profile" }
                }
            }
            section { class: "card",
                TextField {
                    id: "sign-in-name".to_string(),
                    label: "Your name".to_string(),
                    value: name(),
                    required: true,
                    oninput: move |v: String| name.set(v),
                }
                Button {
                    disabled: name().trim().is_empty(),
                    onclick: move |_| submit(),
                    "Continue"
                }
            }
        }
    }
}
