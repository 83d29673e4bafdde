//! Request and response bodies for the HTTP API.
//!
//! Wire names are camelCase; these are distinct from the domain models in
//! `tinylink_core::models`.

use serde::{Deserialize, Serialize};
use tinylink_core::models::auth::User;
use tinylink_core::models::links::ShortLink;

/// `POST /auth/register` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    // Absent fields behave like empty ones: both are missing input.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /auth/login` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public user shape returned by the auth endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Successful login/registration payload.
///
/// The token is also set as the session cookie; it is echoed here for
/// clients that prefer the `Authorization: Bearer` transport.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// `POST /auth/logout` payload.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// `POST /api/links` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub target_url: String,
}

/// `PATCH /api/links/{code}` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub target_url: String,
}

/// Link shape returned by the owner-scoped API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub created_at: String,
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            created_at: link.created_at.to_rfc3339(),
        }
    }
}

/// `GET /api/links` payload.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
}

/// Error body shared by all failure responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /healthz` payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
