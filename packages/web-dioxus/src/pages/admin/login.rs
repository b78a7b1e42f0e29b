//! Admin login page

use dioxus::prelude::*;

use crate::auth::{login, use_auth};
use crate::routes::Route;

/// Admin login page
#[component]
pub fn AdminLogin() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() && auth.is_admin() {
        return rsx! {
            Redirect { to: Route::AdminDashboard {} }
        };
    }

    let handle_login = move |_| {
        let id = email().trim().to_string();
        let pw = password().to_string();

        if id.is_empty() || pw.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match login(id, pw).await {
                Ok(Some(_token)) => {
                    // Refresh auth state and redirect
                    auth.refresh().await;
                    navigator.push(Route::AdminDashboard {});
                }
                Ok(None) => error.set(Some("Invalid email or password".to_string())),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Admin Login" }
                    p { class: "text-gray-600 text-sm", "Fieldstone" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_login,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "admin@example.com",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-700 text-white py-2 px-4 rounded-md hover:bg-indigo-800 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
