//! Command-line interface for guess_server.

use clap::Parser;

/// Guess the Number - single-session game server with a REST API
#[derive(Parser, Debug)]
#[command(name = "guess_server")]
#[command(about = "Guess-the-number game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Port to bind to. Falls back to the PORT environment variable, then 8000.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Strict mode: guessing with no active game is an error instead of
    /// silently starting one
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Resolves the port from the flag, the PORT env var, or the default.
    pub fn resolve_port(&self) -> u16 {
        self.port
            .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(8000)
    }
}
