//! Top navigation bar for the admin area.

use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::routes::Route;

#[component]
pub fn AdminNav() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        spawn(async move {
            if logout().await.is_ok() {
                auth.clear();
                navigator.push(Route::AdminLogin {});
            }
        });
    };

    rsx! {
        nav {
            class: "bg-slate-900 text-slate-100 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-8",
                    Link {
                        to: Route::AdminDashboard {},
                        class: "text-lg font-semibold tracking-tight text-white",
                        "Fieldstone Admin"
                    }
                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::AdminDashboard {}, label: "Dashboard" }
                        NavLink { to: Route::AdminDiscovery {}, label: "Discovery" }
                        NavLink { to: Route::AdminClients {}, label: "Clients" }
                        NavLink { to: Route::AdminLeads {}, label: "Leads" }
                        NavLink { to: Route::AdminCategories {}, label: "Categories" }
                        NavLink { to: Route::AdminContracts {}, label: "Contracts" }
                    }
                }

                div {
                    class: "flex items-center gap-3",
                    if let Some(user) = auth.user.read().as_ref() {
                        span { class: "text-sm text-slate-400", "{user.email}" }
                    }
                    button {
                        class: "text-sm text-slate-300 hover:text-white px-3 py-1.5 rounded hover:bg-slate-800",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let current = use_route::<Route>();
    let active = current == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if active {
                "px-3 py-2 rounded-md text-sm font-medium bg-slate-700 text-white"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-slate-300 hover:bg-slate-800 hover:text-white"
            },
            "{props.label}"
        }
    }
}
