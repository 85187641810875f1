//! User repository.

use crate::error::{StoreError, StoreResult};
use crate::{decode_ts, encode_ts, Database};
use chrono::Utc;
use dagri_types::{NewUser, User, UserId};
use rusqlite::{params, OptionalExtension};

/// Repository for registered users.
pub struct UserStore {
    db: Database,
}

impl UserStore {
    /// Creates a store over the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Returns [`StoreError::Conflict`] when the username or email is already
    /// taken. Callers that want distinct messages should pre-check with
    /// [`find_by_username`](Self::find_by_username) /
    /// [`find_by_email`](Self::find_by_email); the UNIQUE constraints remain
    /// the backstop.
    pub fn create(&self, new: NewUser) -> StoreResult<User> {
        let user = User {
            id: UserId::new(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            user_type: new.user_type,
            location: new.location,
            created_at: Utc::now(),
        };

        let conn = self.db.lock();
        conn.execute(
            "INSERT INTO users (id, username, email, password_hash, user_type, location, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                user.id.to_string(),
                user.username,
                user.email,
                user.password_hash,
                user.user_type,
                user.location,
                encode_ts(user.created_at),
            ],
        )?;
        Ok(user)
    }

    /// Looks up a user by username.
    pub fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.find_by("username", username)
    }

    /// Looks up a user by email.
    pub fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.find_by("email", email)
    }

    /// Looks up a user by id.
    pub fn get(&self, id: &UserId) -> StoreResult<Option<User>> {
        self.find_by("id", &id.to_string())
    }

    fn find_by(&self, column: &str, value: &str) -> StoreResult<Option<User>> {
        let conn = self.db.lock();
        let sql = format!(
            "SELECT id, username, email, password_hash, user_type, location, created_at
             FROM users WHERE {column} = ?1"
        );
        let row = conn
            .query_row(&sql, params![value], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })
            .optional()?;

        match row {
            None => Ok(None),
            Some((id, username, email, password_hash, user_type, location, created_at)) => {
                let id: UserId = id
                    .parse()
                    .map_err(|e| StoreError::InvalidData(format!("bad user id: {e}")))?;
                Ok(Some(User {
                    id,
                    username,
                    email,
                    password_hash,
                    user_type,
                    location,
                    created_at: decode_ts(&created_at)?,
                }))
            }
        }
    }
}
