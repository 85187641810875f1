//! Core type definitions for D'Agri Talk.
//!
//! This crate defines the fundamental types shared by the stores and the
//! HTTP layer:
//! - User, knowledge-entry and market-listing identifiers (UUID v7)
//! - The domain records themselves and their creation inputs
//!
//! Anything HTTP-specific (request schemas, error-to-status mapping) belongs
//! in the server crate, not here.

mod ids;
mod records;

pub use ids::{EntryId, ListingId, UserId};
pub use records::{
    KnowledgeEntry, MarketListing, NewKnowledgeEntry, NewMarketListing, NewUser, User,
};
