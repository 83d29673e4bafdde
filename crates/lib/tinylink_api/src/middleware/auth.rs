//! Identity middleware — session resolution and the authentication gate.
//!
//! `resolve_identity` runs on every request and attaches the caller's
//! identity (or anonymous) exactly once; downstream logic reuses that value
//! and never re-resolves. `require_auth` guards the owner-scoped routes.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use tinylink_core::models::auth::User;

use crate::AppState;
use crate::error::AppError;
use crate::services::auth::verify_session_token;
use crate::services::cookies::SESSION_COOKIE;

/// Identity attached to every request: the session's user, or anonymous.
#[derive(Debug, Clone)]
pub struct Identity(pub Option<User>);

/// Attached by [`require_auth`] once the caller is known to be signed in.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Pull the session token from the cookie, falling back to
/// `Authorization: Bearer`.
fn session_token(jar: &CookieJar, request: &Request) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && !cookie.value().is_empty()
    {
        return Some(cookie.value().to_string());
    }
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string())
}

/// Axum middleware: resolves the caller's identity from the session token
/// and injects [`Identity`] into request extensions.
///
/// A missing, tampered, or expired token degrades to anonymous — this
/// middleware never rejects a request.
pub async fn resolve_identity(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let user = session_token(&jar, &request)
        .and_then(|token| verify_session_token(&token, state.config.session_secret.as_bytes()))
        .and_then(|claims| state.directory.get(&claims.sub));

    request.extensions_mut().insert(Identity(user));

    next.run(request).await
}

/// Axum middleware: rejects anonymous callers and injects
/// [`AuthenticatedUser`] for the owner-scoped handlers.
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<Identity>()
        .and_then(|identity| identity.0.clone())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".into()))?;

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}
