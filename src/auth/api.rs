//! Authentication API Endpoints
//! Mission: Admin registration and login

use crate::auth::{
    jwt::JwtHandler,
    models::{LoginRequest, LoginResponse, RegisterRequest},
    password,
    user_store::{CreateUserError, UserStore},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(user_store: Arc<UserStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            user_store,
            jwt_handler,
        }
    }
}

/// Register endpoint - POST /register
pub async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>, AuthApiError> {
    let username = payload
        .username
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(AuthApiError::MissingFields)?;
    let plaintext = payload
        .password
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(AuthApiError::MissingFields)?;

    let password_hash =
        password::hash_password(plaintext).map_err(|_| AuthApiError::InternalError)?;

    match state.user_store.create_user(username, &password_hash) {
        Ok(_) => Ok(Json(json!({ "msg": "Admin registered successfully" }))),
        Err(CreateUserError::DuplicateUsername) => Err(AuthApiError::DuplicateUsername),
        Err(CreateUserError::Storage(e)) => {
            warn!("Registration storage failure: {e}");
            Err(AuthApiError::InternalError)
        }
    }
}

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    let username = payload.username.as_deref().unwrap_or_default();
    let plaintext = payload.password.as_deref().unwrap_or_default();

    info!("🔐 Login attempt: {}", username);

    // Unknown username and wrong password answer identically so the
    // response does not leak which usernames exist.
    let user = state
        .user_store
        .get_user_by_username(username)
        .map_err(|_| AuthApiError::InternalError)?
        .ok_or(AuthApiError::InvalidCredentials)?;

    if !password::verify_password(plaintext, &user.password_hash) {
        warn!("❌ Failed login attempt: {}", username);
        return Err(AuthApiError::InvalidCredentials);
    }

    let token = state
        .jwt_handler
        .issue(&user)
        .map_err(|_| AuthApiError::InternalError)?;

    info!("✅ Login successful: {}", user.username);

    Ok(Json(LoginResponse { token }))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    MissingFields,
    DuplicateUsername,
    InvalidCredentials,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::MissingFields => (StatusCode::BAD_REQUEST, "All fields required"),
            AuthApiError::DuplicateUsername => {
                (StatusCode::BAD_REQUEST, "Username already exists")
            }
            AuthApiError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
            AuthApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_api_error_responses() {
        let missing = AuthApiError::MissingFields.into_response();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let duplicate = AuthApiError::DuplicateUsername.into_response();
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

        let invalid = AuthApiError::InvalidCredentials.into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let internal = AuthApiError::InternalError.into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
