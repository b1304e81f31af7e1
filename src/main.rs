//! Guess the Number - server entry point.

use anyhow::Result;
use clap::Parser;
use guess_server::{SessionManager, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let port = cli.resolve_port();

    info!(
        port,
        host = %cli.host,
        strict = cli.strict,
        "Starting guess-the-number server"
    );

    let sessions = SessionManager::with_auto_init(!cli.strict);
    let app = router(sessions);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", cli.host, port);
    info!("Routes: /start, /new, /guess?number=N, /status, /debug");

    axum::serve(listener, app).await?;

    Ok(())
}
