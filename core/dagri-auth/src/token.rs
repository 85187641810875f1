//! Bearer-token issue and verification.
//!
//! Tokens use the format: `base64url(payload).base64url(signature)`
//!
//! The payload is a JSON object containing:
//! - `sub`: the user id, always string-encoded
//! - `iat`: issued-at timestamp (seconds since epoch)
//! - `exp`: expiry timestamp (seconds since epoch)
//!
//! The signature covers `payload_b64.as_bytes()` (the base64url-encoded
//! payload string, not the decoded JSON), so verification never touches
//! unauthenticated JSON.

use crate::error::{AuthError, AuthResult};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use dagri_types::UserId;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// The decoded token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// String-encoded user id.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiry timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenClaims {
    /// Parses the subject claim back into a [`UserId`].
    pub fn subject(&self) -> AuthResult<UserId> {
        self.sub
            .parse()
            .map_err(|e| AuthError::InvalidPayload(format!("invalid subject claim: {e}")))
    }
}

/// Issues signed bearer tokens.
pub struct TokenSigner {
    signing_key: SigningKey,
    ttl_secs: i64,
}

impl TokenSigner {
    /// Creates a signer from a 32-byte Ed25519 seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; 32], ttl_secs: i64) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
            ttl_secs,
        }
    }

    /// Returns a verifier for tokens issued by this signer.
    #[must_use]
    pub fn verifier(&self) -> TokenVerifier {
        TokenVerifier {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// Issues a token whose subject claim is the given user id.
    pub fn issue(&self, user_id: &UserId) -> AuthResult<String> {
        let iat = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };
        let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signature = self.signing_key.sign(payload_b64.as_bytes());
        let sig_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());
        Ok(format!("{payload_b64}.{sig_b64}"))
    }
}

/// Verifies bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    verifying_key: VerifyingKey,
}

impl TokenVerifier {
    /// Creates a verifier from raw public-key bytes.
    pub fn from_bytes(pub_key_bytes: &[u8; 32]) -> AuthResult<Self> {
        let verifying_key = VerifyingKey::from_bytes(pub_key_bytes)
            .map_err(|_| AuthError::InvalidKey("invalid public key".to_string()))?;
        Ok(Self { verifying_key })
    }

    /// Verifies a token string and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is invalid, the signature does not
    /// verify, the payload is malformed, or the token has expired.
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let token = token.trim();

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(AuthError::InvalidTokenFormat(
                "token must have exactly two parts separated by a dot".to_string(),
            ));
        }

        let payload_b64 = parts[0];
        let signature_b64 = parts[1];

        let sig_bytes = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|e| AuthError::InvalidTokenFormat(format!("invalid signature base64: {e}")))?;

        let signature = Signature::from_slice(&sig_bytes)
            .map_err(|_| AuthError::InvalidTokenFormat("invalid signature length".to_string()))?;

        // Verify before decoding the payload JSON.
        self.verifying_key
            .verify(payload_b64.as_bytes(), &signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        let payload_json = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|e| AuthError::InvalidTokenFormat(format!("invalid payload base64: {e}")))?;

        let claims: TokenClaims = serde_json::from_slice(&payload_json)
            .map_err(|e| AuthError::InvalidPayload(format!("invalid claims JSON: {e}")))?;

        if claims.exp <= chrono::Utc::now().timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}
