//! Request extractors: JSON bodies and bearer authentication.

use crate::{ApiError, AppState};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::Json;
use dagri_types::UserId;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// JSON request body that rejects with the API's own 400 shape instead of
/// axum's default rejection, so malformed input never reaches a handler.
pub struct Body<T>(pub T);

impl<S, T> FromRequest<S> for Body<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::Validation("Invalid or missing JSON body".to_string()))?;
        Ok(Self(value))
    }
}

/// The authenticated caller, resolved from the `Authorization: Bearer` header.
///
/// Verifies the token signature and expiry, then parses the subject claim
/// back into a [`UserId`]. Any failure is a 401; whether the user still
/// exists is the handler's concern.
pub struct AuthUser(pub UserId);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Auth("Missing authorization header".to_string()))?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Auth("Authorization header must be a bearer token".to_string())
        })?;

        let claims = state.verifier.verify(token)?;
        Ok(Self(claims.subject()?))
    }
}
