//! Owner-scoped link management handlers.
//!
//! Every handler here sits behind `require_auth`; the registry and policy
//! enforce ownership of the specific link on top of that.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use tinylink_core::links::policy::{self, LinkAction};

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateLinkRequest, LinkListResponse, LinkResponse, UpdateLinkRequest};

/// `GET /api/links` — the caller's links, oldest first.
pub async fn list_links_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<LinkListResponse>> {
    let links = state
        .registry
        .list_by_owner(&user.0.id)
        .into_iter()
        .map(LinkResponse::from)
        .collect();
    Ok(Json(LinkListResponse { links }))
}

/// `POST /api/links` — shorten a URL.
pub async fn create_link_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreateLinkRequest>,
) -> AppResult<(StatusCode, Json<LinkResponse>)> {
    let link = state.registry.create(&body.target_url, &user.0)?;
    Ok((StatusCode::CREATED, Json(LinkResponse::from(link))))
}

/// `GET /api/links/{code}` — link detail. Owner only.
pub async fn get_link_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(code): Path<String>,
) -> AppResult<Json<LinkResponse>> {
    let link = state.registry.get(&code)?;
    policy::authorize(Some(&user.0), &link, LinkAction::Read)?;
    Ok(Json(LinkResponse::from(link)))
}

/// `PATCH /api/links/{code}` — point the link at a new target. Owner only.
pub async fn update_link_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(code): Path<String>,
    Json(body): Json<UpdateLinkRequest>,
) -> AppResult<Json<LinkResponse>> {
    let link = state
        .registry
        .update_target(&code, &user.0, &body.target_url)?;
    Ok(Json(LinkResponse::from(link)))
}

/// `DELETE /api/links/{code}` — remove the link. Owner only.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.registry.delete(&code, &user.0)?;
    Ok(StatusCode::NO_CONTENT)
}
