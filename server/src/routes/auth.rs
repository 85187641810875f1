//! Registration, login and profile routes.

use super::{or_default, required};
use crate::{ApiError, AppState, AuthUser, Body};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dagri_types::{NewUser, User};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    user_type: Option<String>,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(serde::Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    Body(req): Body<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        required(&req.username),
        required(&req.email),
        required(&req.password),
    ) else {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    };

    if state.users.find_by_username(username)?.is_some() {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }
    if state.users.find_by_email(email)?.is_some() {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let password_hash = dagri_auth::hash_password(password)?;
    let user = state.users.create(NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash,
        user_type: or_default(req.user_type, "farmer"),
        location: or_default(req.location, ""),
    })?;
    info!("registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Body(req): Body<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(username), Some(password)) = (required(&req.username), required(&req.password))
    else {
        return Err(ApiError::Validation(
            "Missing username or password".to_string(),
        ));
    };

    let user = state.users.find_by_username(username)?;
    let Some(user) = user else {
        return Err(ApiError::Auth("Invalid credentials".to_string()));
    };
    if !dagri_auth::verify_password(password, &user.password_hash)? {
        return Err(ApiError::Auth("Invalid credentials".to_string()));
    }

    let access_token = state.signer.issue(&user.id)?;
    Ok(Json(LoginResponse { access_token, user }))
}

/// `GET /api/auth/profile`
pub async fn profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .get(&user_id)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}
