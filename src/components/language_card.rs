//! Language Card
//!
//! One chip per supported language. Selecting a chip applies immediately.

use dioxus::prelude::*;
use profiledesk_core::Language;

use crate::context::use_screen;

#[component]
pub fn LanguageCard() -> Element {
    let mut screen = use_screen();

    let state = screen.read();
    let strings = state.strings();
    let current = state.user().map(|u| u.language).unwrap_or_default();
    drop(state);

    rsx! {
        section { class: "card",
            h3 { class: "card-title", "{strings.language}" }
            div { class: "language-grid",
                for lang in Language::ALL {
                    button {
                        key: "{lang.code()}",
                        class: if lang == current { "language-chip selected" } else { "language-chip" },
                        r#type: "button",
                        lang: "{lang.code()}",
                        onclick: move |_| {
                            screen.write().select_language(lang);
                        },
                        "{lang.native_name()}"
                    }
                }
            }
        }
    }
}
