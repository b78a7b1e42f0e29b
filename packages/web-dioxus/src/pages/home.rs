//! Root redirect

use dioxus::prelude::*;

use crate::routes::Route;

/// Everything lives under /admin; the root just forwards there
#[component]
pub fn Home() -> Element {
    rsx! {
        Redirect { to: Route::AdminDashboard {} }
    }
}
