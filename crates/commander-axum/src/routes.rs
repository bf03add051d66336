//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the repository held in `AppState`.

use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::require_bearer_for_writes;
use crate::bootstrap::{AppContext, AuthConfig, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the API routes without the `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` but WITHOUT `.with_state()`
/// applied; the caller applies state after layering.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/commands",
            get(handlers::commands::list).post(handlers::commands::create),
        )
        .route(
            "/commands/{id}",
            get(handlers::commands::get)
                .put(handlers::commands::update)
                .patch(handlers::commands::patch)
                .delete(handlers::commands::remove),
        )
}

/// Create the application router.
///
/// `/health` is unprefixed and open. API routes nest under `/api` with CORS
/// applied; when auth is enabled, mutating methods require a Bearer token
/// before any handler runs.
pub fn create_router(ctx: AppContext, cors: &CorsConfig, auth: &AuthConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    let api = match auth {
        AuthConfig::Disabled => api_routes(),
        AuthConfig::Token(token) => {
            // Pre-format "Bearer <token>" once; the middleware compares
            // against it without per-request allocation.
            let expected: Arc<str> = Arc::from(format!("Bearer {token}"));
            api_routes().route_layer(middleware::from_fn(move |req: Request, next: Next| {
                let expected = expected.clone();
                async move { require_bearer_for_writes(expected, req, next).await }
            }))
        }
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api.layer(build_cors_layer(cors)))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
