//! Market-listing routes.

use super::{or_default, required};
use crate::{ApiError, AppState, AuthUser, Body};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dagri_store::StoreError;
use dagri_types::{MarketListing, NewMarketListing};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    crop_name: Option<String>,
    quantity: Option<Value>,
    unit: Option<String>,
    price_per_unit: Option<Value>,
    location: Option<String>,
    description: Option<String>,
}

/// Accepts a JSON number or a numeric string, the coercion the original API
/// applied to quantity and price fields.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `GET /api/market/` — listings that are currently available.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MarketListing>>, ApiError> {
    Ok(Json(state.market.list_available()?))
}

/// `POST /api/market/`
pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(farmer_id): AuthUser,
    Body(req): Body<CreateListingRequest>,
) -> Result<(StatusCode, Json<MarketListing>), ApiError> {
    let (Some(crop_name), Some(unit), Some(location)) = (
        required(&req.crop_name),
        required(&req.unit),
        required(&req.location),
    ) else {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    };
    let (Some(quantity_raw), Some(price_raw)) = (&req.quantity, &req.price_per_unit) else {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    };

    let (Some(quantity), Some(price_per_unit)) = (numeric(quantity_raw), numeric(price_raw))
    else {
        return Err(ApiError::Validation(
            "quantity and price_per_unit must be numeric".to_string(),
        ));
    };

    let listing = state
        .market
        .create(NewMarketListing {
            crop_name: crop_name.to_string(),
            quantity,
            unit: unit.to_string(),
            price_per_unit,
            location: location.to_string(),
            description: or_default(req.description, ""),
            farmer_id,
        })
        .map_err(|e| match e {
            StoreError::Conflict(_) => ApiError::Conflict("Invalid farmer reference".to_string()),
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(listing)))
}
