//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The concrete repository implementation is
//! instantiated here; everything downstream sees the port trait.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use commander_core::CommandRepository;
use commander_db::{SqliteCommandRepository, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Authorization configuration for mutating routes.
///
/// The gate is opaque: the server only ever makes a boolean allow/deny
/// decision. Where the token comes from is the operator's concern.
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No gate (development and tests).
    #[default]
    Disabled,
    /// Require `Authorization: Bearer {token}` on POST/PUT/PATCH/DELETE.
    Token(String),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub db_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Authorization configuration.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            db_path: PathBuf::from("commander.db"),
            cors: CorsConfig::default(),
            auth: AuthConfig::default(),
        }
    }

    /// Set the port to listen on.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database file path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Require a Bearer token on mutating routes.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthConfig::Token(token.into());
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the repository trait object the handlers depend on.
pub struct AppContext {
    /// Command repository as trait object.
    pub repo: Arc<dyn CommandRepository>,
}

impl AppContext {
    /// Build a context around any repository implementation.
    ///
    /// Tests pass an `InMemoryCommandRepository` here; production wiring
    /// goes through [`bootstrap`].
    pub fn with_repository(repo: Arc<dyn CommandRepository>) -> Self {
        Self { repo }
    }
}

/// Bootstrap the Axum server: open the database and wire the repository.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppContext> {
    tracing::info!(
        db_path = %config.db_path.display(),
        auth_enabled = !matches!(config.auth, AuthConfig::Disabled),
        "bootstrap resolved configuration"
    );

    let pool = setup_database(&config.db_path).await?;
    let repo: Arc<dyn CommandRepository> = Arc::new(SqliteCommandRepository::new(pool));

    Ok(AppContext::with_repository(repo))
}

/// Start the HTTP server and serve until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors, &config.auth);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("commander API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
