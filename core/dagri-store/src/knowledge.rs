//! Knowledge-entry repository.

use crate::error::{StoreError, StoreResult};
use crate::{decode_ts, encode_ts, Database};
use chrono::Utc;
use dagri_types::{EntryId, KnowledgeEntry, NewKnowledgeEntry, UserId};
use rusqlite::{params, OptionalExtension, Row};

const SELECT_ENTRY: &str = "
    SELECT k.id, k.title, k.content, k.language, k.crop_type, k.season, k.region,
           k.author_id, u.username, k.created_at, k.updated_at
    FROM knowledge_entries k
    JOIN users u ON u.id = k.author_id";

/// Repository for knowledge-sharing entries.
pub struct KnowledgeStore {
    db: Database,
}

impl KnowledgeStore {
    /// Creates a store over the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts a new entry and returns it with the author username filled in.
    ///
    /// Returns [`StoreError::Conflict`] when `author_id` does not reference
    /// an existing user (foreign-key violation).
    pub fn create(&self, new: NewKnowledgeEntry) -> StoreResult<KnowledgeEntry> {
        let id = EntryId::new();
        let now = Utc::now();

        {
            let conn = self.db.lock();
            conn.execute(
                "INSERT INTO knowledge_entries
                     (id, title, content, language, crop_type, season, region,
                      author_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    id.to_string(),
                    new.title,
                    new.content,
                    new.language,
                    new.crop_type,
                    new.season,
                    new.region,
                    new.author_id.to_string(),
                    encode_ts(now),
                    encode_ts(now),
                ],
            )?;
        }

        self.get(&id)?
            .ok_or_else(|| StoreError::NotFound(format!("entry {id} vanished after insert")))
    }

    /// Returns all entries, newest first.
    pub fn list(&self) -> StoreResult<Vec<KnowledgeEntry>> {
        let conn = self.db.lock();
        let sql = format!("{SELECT_ENTRY} ORDER BY k.created_at DESC, k.id DESC");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], raw_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(decode_entry(row?)?);
        }
        Ok(entries)
    }

    /// Looks up one entry by id.
    pub fn get(&self, id: &EntryId) -> StoreResult<Option<KnowledgeEntry>> {
        let conn = self.db.lock();
        let sql = format!("{SELECT_ENTRY} WHERE k.id = ?1");
        let row = conn
            .query_row(&sql, params![id.to_string()], raw_entry)
            .optional()?;
        row.map(decode_entry).transpose()
    }
}

type RawEntry = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

fn raw_entry(row: &Row<'_>) -> rusqlite::Result<RawEntry> {
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

fn decode_entry(raw: RawEntry) -> StoreResult<KnowledgeEntry> {
    let (id, title, content, language, crop_type, season, region, author_id, author_username, created_at, updated_at) =
        raw;
    let id: EntryId = id
        .parse()
        .map_err(|e| StoreError::InvalidData(format!("bad entry id: {e}")))?;
    let author_id: UserId = author_id
        .parse()
        .map_err(|e| StoreError::InvalidData(format!("bad author id: {e}")))?;
    Ok(KnowledgeEntry {
        id,
        title,
        content,
        language,
        crop_type,
        season,
        region,
        author_id,
        author_username,
        created_at: decode_ts(&created_at)?,
        updated_at: decode_ts(&updated_at)?,
    })
}
