//! Knowledge-entry routes.

use super::{or_default, required};
use crate::{ApiError, AppState, AuthUser, Body};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dagri_store::StoreError;
use dagri_types::{EntryId, KnowledgeEntry, NewKnowledgeEntry};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    title: Option<String>,
    content: Option<String>,
    language: Option<String>,
    crop_type: Option<String>,
    season: Option<String>,
    region: Option<String>,
}

/// `GET /api/knowledge/` — all entries, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<KnowledgeEntry>>, ApiError> {
    Ok(Json(state.knowledge.list()?))
}

/// `POST /api/knowledge/`
pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(author_id): AuthUser,
    Body(req): Body<CreateEntryRequest>,
) -> Result<(StatusCode, Json<KnowledgeEntry>), ApiError> {
    let (Some(title), Some(content)) = (required(&req.title), required(&req.content)) else {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    };

    let entry = state
        .knowledge
        .create(NewKnowledgeEntry {
            title: title.to_string(),
            content: content.to_string(),
            language: or_default(req.language, NewKnowledgeEntry::DEFAULT_LANGUAGE),
            crop_type: or_default(req.crop_type, ""),
            season: or_default(req.season, ""),
            region: or_default(req.region, ""),
            author_id,
        })
        .map_err(|e| match e {
            StoreError::Conflict(_) => ApiError::Conflict("Invalid author reference".to_string()),
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /api/knowledge/{id}` — a single entry; unknown and malformed ids
/// both read as absent.
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<KnowledgeEntry>, ApiError> {
    let not_found = || ApiError::NotFound("Knowledge entry not found".to_string());
    let id: EntryId = id.parse().map_err(|_| not_found())?;
    let entry = state.knowledge.get(&id)?.ok_or_else(not_found)?;
    Ok(Json(entry))
}
