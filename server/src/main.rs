//! D'Agri Talk API Server
//!
//! Serves the knowledge-sharing and marketplace HTTP API over SQLite.
//!
//! Usage:
//!   dagri-server --port 5000
//!
//! The signing key for bearer tokens is read from (or generated at) the
//! `--token-key` path; the database file is created on first run.

use anyhow::{Context, Result};
use clap::Parser;
use dagri_auth::TokenSigner;
use dagri_server::{build_router, config::load_or_generate_seed, AppState};
use dagri_store::Database;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dagri-server")]
#[command(about = "D'Agri Talk knowledge-sharing and marketplace API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "DAGRI_PORT")]
    port: u16,

    /// SQLite database path (":memory:" for a throwaway instance)
    #[arg(long, default_value = "dagri-talk.db", env = "DAGRI_DATABASE")]
    database: String,

    /// Path to the token signing key file
    #[arg(long, default_value = "dagri-signing.key", env = "DAGRI_TOKEN_KEY_FILE")]
    token_key: PathBuf,

    /// Bearer-token lifetime in seconds
    #[arg(long, default_value = "86400", env = "DAGRI_TOKEN_TTL_SECS")]
    token_ttl_secs: i64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("D'Agri Talk server starting...");

    let db = if args.database == ":memory:" {
        Database::open_in_memory()
    } else {
        Database::open(&args.database)
    }
    .with_context(|| format!("Failed to open database {}", args.database))?;
    info!("Database ready at {}", args.database);

    let seed = load_or_generate_seed(&args.token_key)?;
    let signer = TokenSigner::from_seed(&seed, args.token_ttl_secs);

    let state = AppState::new(db, signer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .with_context(|| format!("Failed to bind port {}", args.port))?;
    info!("API listening on port {}", args.port);

    axum::serve(listener, app).await.context("HTTP server failed")
}
