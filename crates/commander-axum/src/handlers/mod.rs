//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin: validate route/body, call the repository, project
//! through the DTO layer, produce the response. No cross-request state.

pub mod commands;
