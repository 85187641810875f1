//! SQLite storage layer for D'Agri Talk.
//!
//! Every repository operation goes through an explicit [`Database`] handle —
//! there is no process-wide session singleton. The handle is cheap to clone
//! and shares one connection behind a mutex; each operation takes the lock
//! for a single statement sequence.
//!
//! Timestamps are stored as fixed-precision RFC 3339 strings so that string
//! comparison and chronological comparison agree.

mod error;
mod knowledge;
mod market;
mod users;

pub use error::{StoreError, StoreResult};
pub use knowledge::KnowledgeStore;
pub use market::MarketStore;
pub use users::UserStore;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to the backing SQLite database.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) a database at the given path.
    pub fn open(path: &str) -> StoreResult<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Opens an in-memory database (for testing and ad-hoc runs).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                user_type TEXT NOT NULL DEFAULT 'farmer',
                location TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS knowledge_entries (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                language TEXT NOT NULL DEFAULT 'English',
                crop_type TEXT NOT NULL DEFAULT '',
                season TEXT NOT NULL DEFAULT '',
                region TEXT NOT NULL DEFAULT '',
                author_id TEXT NOT NULL REFERENCES users(id),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS market_listings (
                id TEXT PRIMARY KEY,
                crop_name TEXT NOT NULL,
                quantity REAL NOT NULL,
                unit TEXT NOT NULL,
                price_per_unit REAL NOT NULL,
                location TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                farmer_id TEXT NOT NULL REFERENCES users(id),
                is_available INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_knowledge_created
                ON knowledge_entries(created_at DESC);
            CREATE INDEX IF NOT EXISTS idx_market_available
                ON market_listings(is_available);
            ",
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs a trivial round trip, for the health endpoint.
    pub fn health_check(&self) -> StoreResult<()> {
        let conn = self.lock();
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}

/// Encodes a timestamp for storage. Fixed microsecond precision keeps the
/// string ordering chronological.
pub(crate) fn encode_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decodes a stored timestamp.
pub(crate) fn decode_ts(s: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("bad timestamp {s:?}: {e}")))
}
