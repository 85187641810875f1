//! Domain records and their creation inputs.
//!
//! The records serialize to the JSON shapes the HTTP API returns. Denormalized
//! author/farmer usernames are filled in by the store at read time so clients
//! never need a second lookup.

use crate::{EntryId, ListingId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password hash never leaves the process: it is skipped during
/// serialization so a `User` can be returned from login/profile routes as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub user_type: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a user. The password arrives already hashed;
/// hashing lives in dagri-auth, not the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
    pub location: String,
}

/// A knowledge-sharing entry authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub language: String,
    pub crop_type: String,
    pub season: String,
    pub region: String,
    pub author_id: UserId,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a knowledge entry.
#[derive(Debug, Clone)]
pub struct NewKnowledgeEntry {
    pub title: String,
    pub content: String,
    pub language: String,
    pub crop_type: String,
    pub season: String,
    pub region: String,
    pub author_id: UserId,
}

impl NewKnowledgeEntry {
    /// Default language applied when a request omits it.
    pub const DEFAULT_LANGUAGE: &'static str = "English";
}

/// A marketplace record describing produce for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketListing {
    pub id: ListingId,
    pub crop_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub location: String,
    pub description: String,
    pub farmer_id: UserId,
    pub farmer_username: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a market listing. Listings start out available.
#[derive(Debug, Clone)]
pub struct NewMarketListing {
    pub crop_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub location: String,
    pub description: String,
    pub farmer_id: UserId,
}
