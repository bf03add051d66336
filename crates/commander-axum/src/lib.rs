//! Axum web server adapter for commander.
//!
//! Exposes the command store as an HTTP resource API: DTOs, projection
//! functions, patch application, validation, handlers, routes, bearer-token
//! auth, and the composition root live here.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary entry point
use clap as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings for test infrastructure
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod patch;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AppContext, AuthConfig, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
