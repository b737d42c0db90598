//! Profile Page
//!
//! Single scrolling column of cards: personal details, language, security
//! and saved addresses, with logout at the bottom. Modals for the address
//! form and delete confirmation render on top when open.

use dioxus::prelude::*;
use profiledesk_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{
    AddressBook, AddressFormModal, ConfirmDeleteModal, LanguageCard, PersonalDetailsCard,
    SecurityCard,
};
use crate::context::use_screen;

/// Up to two initials for the avatar circle
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Profile page
#[component]
pub fn Profile() -> Element {
    let mut screen = use_screen();
    let nav = use_navigator();

    // Leave the page once the session ends
    use_effect(move || {
        if screen.read().is_signed_out() {
            nav.replace(Route::SignIn {});
        }
    });

    let state = screen.read();
    let strings = state.strings();
    let Some(user) = state.user() else {
        return rsx! {};
    };
    let name = user.name.clone();
    let avatar = initials(&name);
    let address_count = strings.address_count(user.addresses.len());
    drop(state);

    rsx! {
        div { class: "profile-page",
            header { class: "page-header",
                div { class: "avatar-initials", "{avatar}" }
                div {
                    h1 { class: "page-title", "{strings.profile}" }
                    p { class: "page-subtitle", "{name} · {address_count}" }
                }
            }

            PersonalDetailsCard {}
            LanguageCard {}
            SecurityCard {}
            AddressBook {}

            Button {
                variant: ButtonVariant::Danger,
                class: "logout-btn".to_string(),
                onclick: move |_| {
                    screen.write().logout();
                },
                "{strings.logout}"
            }

            AddressFormModal {}
            ConfirmDeleteModal {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Asha Rao"), "AR");
        assert_eq!(initials("asha"), "A");
        assert_eq!(initials("Asha Devi Rao"), "AD");
        assert_eq!(initials("   "), "");
    }
}
