//! Password hashing and verification.
//!
//! Uses Argon2id with the crate's default parameters (OWASP-recommended) and
//! a random per-password salt. Hashes are stored as PHC strings, so the salt
//! and parameters travel with the hash and can be re-tuned without a
//! migration.

use crate::error::{AuthError, AuthResult};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes a plaintext password into a PHC string.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC string.
///
/// Returns `Ok(false)` on a mismatch; an `Err` only when the stored hash
/// itself cannot be parsed.
pub fn verify_password(password: &str, stored: &str) -> AuthResult<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
