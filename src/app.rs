use dioxus::prelude::*;
use profiledesk_core::ProfileScreen;

use crate::components::ToastStack;
use crate::context::{get_store, get_verifier};
use crate::pages::{Profile, SignIn};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Profile screen (redirects to sign-in when no session)
/// - `/sign-in` - Name entry after logout or on first launch
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Profile {},
    #[route("/sign-in")]
    SignIn {},
}

/// Root application component.
///
/// Provides global styles, screen context, toasts and routing.
#[component]
pub fn App() -> Element {
    let Some(store) = get_store() else {
        tracing::error!("Profile store was not opened before launch");
        return rsx! {
            style { {GLOBAL_STYLES} }
            div { class: "error-state",
                p { "Profile storage is unavailable" }
            }
        };
    };

    let screen = use_signal(move || ProfileScreen::new(store));
    use_context_provider(|| screen);
    use_context_provider(get_verifier);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "phone-frame",
            Router::<Route> {}
            ToastStack {}
        }
    }
}
