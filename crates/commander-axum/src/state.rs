//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AppContext` carrying the repository trait object
/// the handlers depend on.
pub type AppState = Arc<AppContext>;
