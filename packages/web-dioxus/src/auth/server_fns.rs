//! Auth server functions: login against the API, session bookkeeping.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::graphql::LOGIN;
use crate::types::AuthUser;

#[cfg(feature = "server")]
const SESSION_USER_KEY: &str = "auth_user";

/// Log in with email and password. On success the API returns a JWT; the
/// decoded identity is stored in the server session.
#[server]
pub async fn login(email: String, password: String) -> Result<Option<String>, ServerFnError> {
    let client = crate::graphql::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        email: String,
        password: String,
    }

    #[derive(Deserialize)]
    struct Response {
        login: Option<String>,
    }

    let result: Response = client
        .mutate(LOGIN, Some(Variables { email, password }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(ref token) = result.login {
        if let Ok(user) = decode_jwt_to_user(token) {
            set_session_user(&user).await?;
        }
    }

    Ok(result.login)
}

/// The authenticated user for the current session, if any.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    let session = session().await?;
    session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("session read failed: {e}")))
}

/// Flush the session.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let session = session().await?;
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("session flush failed: {e}")))?;
    Ok(())
}

// ============================================================================
// Server-only helpers
// ============================================================================

#[cfg(feature = "server")]
async fn session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("session unavailable: {e}")))
}

#[cfg(feature = "server")]
async fn set_session_user(user: &AuthUser) -> Result<(), ServerFnError> {
    let session = session().await?;
    session
        .insert(SESSION_USER_KEY, user)
        .await
        .map_err(|e| ServerFnError::new(format!("session write failed: {e}")))?;
    Ok(())
}

// The API signs the token; this side only needs the claims. Signature
// verification stays with the API that issued it.
#[cfg(feature = "server")]
fn decode_jwt_to_user(token: &str) -> Result<AuthUser, ServerFnError> {
    use base64::Engine;

    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ServerFnError::new("malformed JWT"))?;

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ServerFnError::new(format!("JWT payload decode failed: {e}")))?;

    #[derive(Deserialize)]
    struct JwtClaims {
        member_id: uuid::Uuid,
        email: String,
        is_admin: bool,
    }

    let claims: JwtClaims = serde_json::from_slice(&bytes)
        .map_err(|e| ServerFnError::new(format!("JWT claims parse failed: {e}")))?;

    Ok(AuthUser {
        member_id: claims.member_id,
        email: claims.email,
        is_admin: claims.is_admin,
    })
}
