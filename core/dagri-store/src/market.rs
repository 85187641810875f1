//! Market-listing repository.

use crate::error::{StoreError, StoreResult};
use crate::{decode_ts, encode_ts, Database};
use chrono::Utc;
use dagri_types::{ListingId, MarketListing, NewMarketListing, UserId};
use rusqlite::{params, OptionalExtension, Row};

const SELECT_LISTING: &str = "
    SELECT m.id, m.crop_name, m.quantity, m.unit, m.price_per_unit, m.location,
           m.description, m.farmer_id, u.username, m.is_available, m.created_at
    FROM market_listings m
    JOIN users u ON u.id = m.farmer_id";

/// Repository for produce listings.
pub struct MarketStore {
    db: Database,
}

impl MarketStore {
    /// Creates a store over the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts a new listing, available by default, and returns it with the
    /// farmer username filled in.
    ///
    /// Returns [`StoreError::Conflict`] when `farmer_id` does not reference
    /// an existing user.
    pub fn create(&self, new: NewMarketListing) -> StoreResult<MarketListing> {
        let id = ListingId::new();
        let now = Utc::now();

        {
            let conn = self.db.lock();
            conn.execute(
                "INSERT INTO market_listings
                     (id, crop_name, quantity, unit, price_per_unit, location,
                      description, farmer_id, is_available, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9)",
                params![
                    id.to_string(),
                    new.crop_name,
                    new.quantity,
                    new.unit,
                    new.price_per_unit,
                    new.location,
                    new.description,
                    new.farmer_id.to_string(),
                    encode_ts(now),
                ],
            )?;
        }

        self.get(&id)?
            .ok_or_else(|| StoreError::NotFound(format!("listing {id} vanished after insert")))
    }

    /// Returns listings that are currently available.
    pub fn list_available(&self) -> StoreResult<Vec<MarketListing>> {
        let conn = self.db.lock();
        let sql = format!("{SELECT_LISTING} WHERE m.is_available = 1");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], raw_listing)?;

        let mut listings = Vec::new();
        for row in rows {
            listings.push(decode_listing(row?)?);
        }
        Ok(listings)
    }

    /// Looks up one listing by id.
    pub fn get(&self, id: &ListingId) -> StoreResult<Option<MarketListing>> {
        let conn = self.db.lock();
        let sql = format!("{SELECT_LISTING} WHERE m.id = ?1");
        let row = conn
            .query_row(&sql, params![id.to_string()], raw_listing)
            .optional()?;
        row.map(decode_listing).transpose()
    }

    /// Flips a listing's availability (a farmer marking produce sold).
    ///
    /// Returns [`StoreError::NotFound`] when the listing does not exist.
    pub fn set_availability(&self, id: &ListingId, available: bool) -> StoreResult<()> {
        let conn = self.db.lock();
        let changed = conn.execute(
            "UPDATE market_listings SET is_available = ?2 WHERE id = ?1",
            params![id.to_string(), available],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(format!("listing {id}")));
        }
        Ok(())
    }
}

type RawListing = (
    String,
    String,
    f64,
    String,
    f64,
    String,
    String,
    String,
    String,
    bool,
    String,
);

fn raw_listing(row: &Row<'_>) -> rusqlite::Result<RawListing> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
        row.get(9)?,
        row.get(10)?,
    ))
}

fn decode_listing(raw: RawListing) -> StoreResult<MarketListing> {
    let (id, crop_name, quantity, unit, price_per_unit, location, description, farmer_id, farmer_username, is_available, created_at) =
        raw;
    let id: ListingId = id
        .parse()
        .map_err(|e| StoreError::InvalidData(format!("bad listing id: {e}")))?;
    let farmer_id: UserId = farmer_id
        .parse()
        .map_err(|e| StoreError::InvalidData(format!("bad farmer id: {e}")))?;
    Ok(MarketListing {
        id,
        crop_name,
        quantity,
        unit,
        price_per_unit,
        location,
        description,
        farmer_id,
        farmer_username,
        is_available,
        created_at: decode_ts(&created_at)?,
    })
}
