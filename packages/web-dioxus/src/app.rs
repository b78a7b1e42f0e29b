//! Root component: global styles, auth context, router.

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        document::Title { "Fieldstone Admin" }

        // Session state must be available before any route renders
        AuthProvider {
            Router::<Route> {}
        }
    }
}
