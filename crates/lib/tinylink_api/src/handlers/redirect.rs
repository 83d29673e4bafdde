//! Public redirect handler.

use axum::extract::{Path, State};
use axum::response::Redirect;

use crate::AppState;
use crate::error::AppResult;

/// `GET /u/{code}` — follow a short link. No identity required.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Redirect> {
    let target = state.registry.resolve(&code)?;
    Ok(Redirect::temporary(&target))
}
