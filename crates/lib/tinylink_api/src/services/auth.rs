//! Authentication service — login/register/logout flows over the user
//! directory and session manager.

use tracing::{debug, info};

use tinylink_core::auth::directory::UserDirectory;
use tinylink_core::auth::session::{SESSION_TTL_SECS, issue_session_token};
use tinylink_core::models::auth::User;

use crate::error::{AppError, AppResult};
use crate::models::{LogoutResponse, SessionResponse, UserResponse};

// Re-exported for the middleware and server wiring.
pub use tinylink_core::auth::session::{resolve_session_secret, verify_session_token};

/// A signed session token plus the response body to send with it.
pub struct SessionOutcome {
    pub token: String,
    pub response: SessionResponse,
}

fn start_session(user: User, secret: &[u8]) -> AppResult<SessionOutcome> {
    let token = issue_session_token(&user.id, secret)?;
    Ok(SessionOutcome {
        response: SessionResponse {
            token: token.clone(),
            expires_in: SESSION_TTL_SECS,
            user: UserResponse::from(user),
        },
        token,
    })
}

/// Authenticate with email + password.
pub fn login(
    directory: &UserDirectory,
    email: &str,
    password: &str,
    secret: &[u8],
) -> AppResult<SessionOutcome> {
    let user = directory.verify_credentials(email, password).map_err(|e| {
        // The variant distinguishes unknown email from wrong password; the
        // response a client sees does not.
        debug!(error = %e, "login rejected");
        AppError::from(e)
    })?;
    info!(user_id = %user.id, "login");
    start_session(user, secret)
}

/// Register a new account and start a session for it.
pub fn register(
    directory: &UserDirectory,
    email: &str,
    password: &str,
    secret: &[u8],
) -> AppResult<SessionOutcome> {
    let user = directory.register(email, password)?;
    info!(user_id = %user.id, "registered");
    start_session(user, secret)
}

/// End the session. Sessions live client-side, so this only tells the
/// caller to discard the cookie.
pub fn logout() -> LogoutResponse {
    LogoutResponse { success: true }
}
