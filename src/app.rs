//! Application Assembly
//! Mission: Configuration and router construction

use crate::{
    auth::{api as auth_api, auth_middleware, AuthState},
    employees::{api as employee_api, EmployeeState},
    middleware::request_logging,
};
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use std::env;
use tower_http::cors::CorsLayer;

/// Runtime configuration, environment-supplied with defaults
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(7000);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| "supersecret".to_string());

        let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "employees.db".to_string());

        Self {
            port,
            jwt_secret,
            db_path,
        }
    }
}

/// Health check endpoint - GET /
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "message": "Employee Management System API is running" }))
}

/// Assemble the full application router.
///
/// Mutating employee routes sit behind the bearer-token gate; reads and the
/// auth endpoints are public.
pub fn build_router(auth_state: AuthState, employee_state: EmployeeState) -> Router {
    let jwt_handler = auth_state.jwt_handler.clone();

    let auth_router = Router::new()
        .route("/register", post(auth_api::register))
        .route("/login", post(auth_api::login))
        .with_state(auth_state);

    let protected_routes = Router::new()
        .route("/employees", post(employee_api::create_employee))
        .route("/employees/:id", put(employee_api::update_employee))
        .route("/employees/:id", delete(employee_api::delete_employee))
        .route_layer(middleware::from_fn_with_state(jwt_handler, auth_middleware))
        .with_state(employee_state.clone());

    let public_routes = Router::new()
        .route("/", get(health_check))
        .route("/employees", get(employee_api::list_employees))
        .with_state(employee_state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(auth_router)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // Only assert defaults for variables the test environment leaves unset.
        let config = Config::from_env();
        if env::var("PORT").is_err() {
            assert_eq!(config.port, 7000);
        }
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(config.jwt_secret, "supersecret");
        }
        if env::var("DATABASE_PATH").is_err() {
            assert_eq!(config.db_path, "employees.db");
        }
    }
}
