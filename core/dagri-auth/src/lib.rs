//! Credential verification for D'Agri Talk.
//!
//! Two concerns live here, both free of any HTTP or storage knowledge:
//! - Password hashing and verification (Argon2id, PHC strings)
//! - Bearer-token issue and verification (Ed25519 over base64url payloads)
//!
//! The server crate wires these to routes; the store never sees a plaintext
//! password or a raw token.

mod error;
mod password;
mod token;

pub use error::{AuthError, AuthResult};
pub use password::{hash_password, verify_password};
pub use token::{TokenClaims, TokenSigner, TokenVerifier, DEFAULT_TOKEN_TTL_SECS};
