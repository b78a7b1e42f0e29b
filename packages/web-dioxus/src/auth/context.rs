//! Session-backed auth state shared through context.

use dioxus::prelude::*;

use super::server_fns::get_current_user;
use crate::types::AuthUser;

/// App-wide authentication state. Copyable so event handlers can capture it
/// without cloning.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: Signal<Option<AuthUser>>,
    /// True until the first session lookup completes. Gates let the loading
    /// screen render instead of flashing the login redirect.
    pub loading: Signal<bool>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.read().as_ref().is_some_and(|u| u.is_admin)
    }

    /// Re-fetch the session user from the server.
    pub async fn refresh(&self) {
        let mut user = self.user;
        let mut loading = self.loading;
        match get_current_user().await {
            Ok(current) => user.set(current),
            Err(_) => user.set(None),
        }
        loading.set(false);
    }

    /// Drop the local auth state after logout.
    pub fn clear(&self) {
        let mut user = self.user;
        user.set(None);
    }
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth = use_context_provider(|| AuthContext {
        user: Signal::new(None),
        loading: Signal::new(true),
    });

    // Resolve the session once on mount
    use_future(move || async move {
        auth.refresh().await;
    });

    children
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
