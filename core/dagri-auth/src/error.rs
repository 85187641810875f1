//! Error types for credential handling.

use thiserror::Error;

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while hashing credentials or handling tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token is structurally malformed (wrong part count, bad base64).
    #[error("invalid token format: {0}")]
    InvalidTokenFormat(String),

    /// Ed25519 signature verification failed.
    #[error("token signature invalid")]
    InvalidSignature,

    /// Claims JSON is malformed or missing required fields.
    #[error("invalid token payload: {0}")]
    InvalidPayload(String),

    /// Token expiry is in the past.
    #[error("token expired")]
    TokenExpired,

    /// Password hashing or hash parsing failed.
    #[error("password hash error: {0}")]
    Hash(String),

    /// Signing or verifying key material is invalid.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
