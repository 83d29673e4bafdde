//! Session token management.
//!
//! Sessions are not stored server-side: a signed HS256 token held by the
//! client is the whole session. Tokens are tamper-evident but not
//! confidential — they carry the user id in the clear.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::warn;

use super::AuthError;
use crate::models::auth::SessionClaims;

/// Session lifetime: 24 hours.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Secret used when `SESSION_SECRET` is unset. Anyone holding this string
/// can forge sessions; set `SESSION_SECRET` for anything beyond local
/// development.
pub const DEV_SESSION_SECRET: &str = "tinylink-dev-secret-change-in-production";

/// Generate a signed session token (HS256, 24 h expiry).
pub fn issue_session_token(user_id: &str, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(SESSION_TTL_SECS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Token(format!("session encode: {e}")))
}

/// Verify a session token, returning the claims on success.
///
/// Missing, malformed, tampered, and expired tokens all come back as
/// `None` — the caller degrades to an anonymous identity, never an error.
pub fn verify_session_token(token: &str, secret: &[u8]) -> Option<SessionClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<SessionClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

/// Resolve the session signing secret: `SESSION_SECRET` env var, else the
/// built-in development default.
pub fn resolve_session_secret() -> String {
    if let Ok(secret) = std::env::var("SESSION_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    warn!("SESSION_SECRET not set, using the built-in development secret");
    DEV_SESSION_SECRET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-secret";

    #[test]
    fn issued_token_round_trips() {
        let token = issue_session_token("user-1", SECRET).unwrap();
        let claims = verify_session_token(&token, SECRET).expect("token should verify");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
    }

    #[test]
    fn tampered_token_resolves_to_none() {
        let mut token = issue_session_token("user-1", SECRET).unwrap();
        token.push('x');
        assert!(verify_session_token(&token, SECRET).is_none());
    }

    #[test]
    fn token_signed_with_another_key_resolves_to_none() {
        let token = issue_session_token("user-1", b"some-other-secret").unwrap();
        assert!(verify_session_token(&token, SECRET).is_none());
    }

    #[test]
    fn expired_token_resolves_to_none() {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "user-1".into(),
            iat: now - 2 * SESSION_TTL_SECS,
            exp: now - SESSION_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(verify_session_token(&token, SECRET).is_none());
    }

    #[test]
    fn garbage_token_resolves_to_none() {
        assert!(verify_session_token("not-a-token", SECRET).is_none());
        assert!(verify_session_token("", SECRET).is_none());
    }
}
