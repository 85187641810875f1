//! Shared state and HTTP API for the D'Agri Talk server.
//!
//! The router wires three resource groups (auth, knowledge, market) plus a
//! health probe onto explicit repository handles. All state a handler needs
//! travels through [`AppState`]; nothing is process-global.

pub mod config;
mod error;
mod extract;
mod routes;

pub use error::ApiError;
pub use extract::{AuthUser, Body};

use axum::routing::{get, post};
use axum::Router;
use dagri_auth::{TokenSigner, TokenVerifier};
use dagri_store::{Database, KnowledgeStore, MarketStore, UserStore};
use std::sync::Arc;

/// Everything the request handlers need.
pub struct AppState {
    pub db: Database,
    pub users: UserStore,
    pub knowledge: KnowledgeStore,
    pub market: MarketStore,
    pub signer: TokenSigner,
    pub verifier: TokenVerifier,
}

impl AppState {
    /// Builds the state from a database handle and a token signer.
    pub fn new(db: Database, signer: TokenSigner) -> Arc<Self> {
        let verifier = signer.verifier();
        Arc::new(Self {
            users: UserStore::new(db.clone()),
            knowledge: KnowledgeStore::new(db.clone()),
            market: MarketStore::new(db.clone()),
            db,
            signer,
            verifier,
        })
    }
}

/// Build the HTTP API router with the given application state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/profile", get(routes::auth::profile))
        .route(
            "/api/knowledge/",
            get(routes::knowledge::list).post(routes::knowledge::create),
        )
        .route("/api/knowledge/{id}", get(routes::knowledge::get_entry))
        .route(
            "/api/market/",
            get(routes::market::list).post(routes::market::create),
        )
        .route("/api/health", get(routes::health::health))
        .with_state(state)
}
