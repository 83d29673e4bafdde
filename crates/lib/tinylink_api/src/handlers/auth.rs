//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{LoginRequest, LogoutResponse, RegisterRequest, SessionResponse, UserResponse};
use crate::services::{auth, cookies};

/// `POST /auth/register` — create an account and start a session for it.
pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    let outcome = auth::register(
        &state.directory,
        &body.email,
        &body.password,
        state.config.session_secret.as_bytes(),
    )?;
    Ok((
        jar.add(cookies::session_cookie(&outcome.token)),
        Json(outcome.response),
    ))
}

/// `POST /auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    let outcome = auth::login(
        &state.directory,
        &body.email,
        &body.password,
        state.config.session_secret.as_bytes(),
    )?;
    Ok((
        jar.add(cookies::session_cookie(&outcome.token)),
        Json(outcome.response),
    ))
}

/// `POST /auth/logout` — clear the session cookie.
pub async fn logout_handler(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    (
        jar.add(cookies::clear_session_cookie()),
        Json(auth::logout()),
    )
}

/// `GET /auth/me` — the current caller. Requires authentication.
pub async fn me_handler(
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> Json<UserResponse> {
    Json(UserResponse::from(user.0))
}
