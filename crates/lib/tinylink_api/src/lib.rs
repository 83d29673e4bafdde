//! # tinylink_api
//!
//! HTTP API library for Tinylink.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tinylink_core::auth::directory::UserDirectory;
use tinylink_core::links::registry::LinkRegistry;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, health, links, redirect};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory user directory.
    pub directory: Arc<UserDirectory>,
    /// In-memory link registry.
    pub registry: Arc<LinkRegistry>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Fresh state with empty stores.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            directory: Arc::new(UserDirectory::new()),
            registry: Arc::new(LinkRegistry::new()),
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// Identity is resolved once per request by the outer middleware; the
/// protected sub-router additionally rejects anonymous callers.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/healthz", get(health::health_handler))
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/u/{code}", get(redirect::redirect_handler));

    // Protected routes (require an authenticated session)
    let protected = Router::new()
        .route("/auth/me", get(auth::me_handler))
        .route(
            "/api/links",
            get(links::list_links_handler).post(links::create_link_handler),
        )
        .route(
            "/api/links/{code}",
            get(links::get_link_handler)
                .patch(links::update_link_handler)
                .delete(links::delete_link_handler),
        )
        .layer(axum::middleware::from_fn(middleware::auth::require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::resolve_identity,
        ))
        .layer(cors)
        .with_state(state)
}
