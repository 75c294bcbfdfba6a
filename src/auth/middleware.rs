//! Authentication Middleware
//! Mission: Gate mutating endpoints behind JWT validation

use crate::auth::jwt::JwtHandler;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Auth middleware that validates bearer tokens.
///
/// Expects `Authorization: Bearer <token>`. On success the verified claims
/// are attached to request extensions for downstream handlers.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or(AuthError::MissingToken)?;

    let claims = jwt_handler
        .verify(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Auth error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Access denied"),
            AuthError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token"),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Claims;
    use axum::{body::Body, http::Request as HttpRequest};

    #[test]
    fn test_auth_error_responses() {
        let missing = AuthError::MissingToken.into_response();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let invalid = AuthError::InvalidToken.into_response();
        assert_eq!(invalid.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_claims_attach_to_request_extensions() {
        let mut req = HttpRequest::new(Body::empty());
        assert!(req.extensions().get::<Claims>().is_none());

        let claims = Claims {
            sub: 1,
            username: "admin".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_007_200,
        };
        req.extensions_mut().insert(claims);

        let extracted = req.extensions().get::<Claims>();
        assert_eq!(extracted.unwrap().username, "admin");
    }
}
