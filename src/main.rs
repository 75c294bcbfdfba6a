//! Employee Records Service
//! Mission: Admin-authenticated CRUD over employee records

use anyhow::{Context, Result};
use dotenv::dotenv;
use emprecs_backend::{
    app::{build_router, Config},
    auth::{AuthState, JwtHandler, UserStore},
    employees::{EmployeeState, EmployeeStore},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let config = Config::from_env();

    let user_store = Arc::new(UserStore::new(&config.db_path)?);
    let employee_store = Arc::new(EmployeeStore::new(&config.db_path)?);
    let jwt_handler = Arc::new(JwtHandler::new(config.jwt_secret.clone()));

    info!("🔐 Stores initialized at: {}", config.db_path);

    let auth_state = AuthState::new(user_store, jwt_handler);
    let employee_state = EmployeeState {
        store: employee_store,
    };

    let app = build_router(auth_state, employee_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emprecs_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
