//! Server entry point - parses CLI arguments and starts the API.

use clap::Parser;

use commander_axum::{ServerConfig, start_server};

#[derive(Parser)]
#[command(author, version, about = "Commander HTTP resource API")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the SQLite database file.
    #[arg(long, default_value = "commander.db")]
    db: std::path::PathBuf,

    /// Bearer token required on mutating routes. Without it the API runs
    /// with the auth gate disabled (development mode).
    #[arg(long)]
    token: Option<String>,

    /// Allowed CORS origin (repeatable). Defaults to allowing all origins.
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = ServerConfig::with_defaults()
        .with_port(cli.port)
        .with_db_path(cli.db);
    if let Some(token) = cli.token {
        config = config.with_token(token);
    } else {
        tracing::warn!("no --token supplied; mutating routes are unauthenticated");
    }
    if !cli.cors_origins.is_empty() {
        config = config.with_allowed_origins(cli.cors_origins);
    }

    start_server(config).await
}
