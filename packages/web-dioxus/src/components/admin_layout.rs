//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::{AdminNav, LoadingSpinner, ToastHost};
use crate::auth::use_auth;
use crate::routes::Route;
use crate::state::ToastState;

/// Admin layout component that provides navigation and auth protection
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    // Toast stack shared by every admin page
    use_context_provider(ToastState::new);

    if *auth.loading.read() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        };
    }

    // Admin-only area
    if !auth.is_authenticated() || !auth.is_admin() {
        return rsx! {
            Redirect { to: Route::AdminLogin {} }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            // Navigation
            AdminNav {}

            // Main content
            main {
                class: "p-6",
                Outlet::<Route> {}
            }

            // Notification toasts (floating)
            ToastHost {}
        }
    }
}
