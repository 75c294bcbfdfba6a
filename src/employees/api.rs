//! Employee API Endpoints
//! Mission: CRUD over employee records

use crate::employees::{
    models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
    store::EmployeeStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Shared employee state
#[derive(Clone)]
pub struct EmployeeState {
    pub store: Arc<EmployeeStore>,
}

/// List all employees - GET /employees (no auth)
pub async fn list_employees(
    State(state): State<EmployeeState>,
) -> Result<Json<Vec<Employee>>, EmployeeApiError> {
    let employees = state.store.list().map_err(EmployeeApiError::Storage)?;
    Ok(Json(employees))
}

/// Add an employee - POST /employees (admin only)
pub async fn create_employee(
    State(state): State<EmployeeState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<Json<serde_json::Value>, EmployeeApiError> {
    let name = payload
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(EmployeeApiError::MissingFields)?;
    let role = payload
        .role
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(EmployeeApiError::MissingFields)?;
    let salary = payload
        .salary
        .filter(|s| *s != 0.0)
        .ok_or(EmployeeApiError::MissingFields)?;

    state
        .store
        .create(name, role, salary)
        .map_err(EmployeeApiError::Insert)?;

    Ok(Json(json!({ "msg": "Employee created" })))
}

/// Update an employee - PUT /employees/:id (admin only)
///
/// Full replacement of name/role/salary. An unknown id is a no-op that
/// still reports success.
pub async fn update_employee(
    State(state): State<EmployeeState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<serde_json::Value>, EmployeeApiError> {
    state
        .store
        .update(id, &payload.name, &payload.role, payload.salary)
        .map_err(EmployeeApiError::Storage)?;

    Ok(Json(json!({ "msg": "Employee updated" })))
}

/// Delete an employee - DELETE /employees/:id (admin only)
pub async fn delete_employee(
    State(state): State<EmployeeState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, EmployeeApiError> {
    state.store.delete(id).map_err(EmployeeApiError::Storage)?;

    Ok(Json(json!({ "msg": "Employee deleted" })))
}

/// Employee API errors
#[derive(Debug)]
pub enum EmployeeApiError {
    MissingFields,
    Insert(anyhow::Error),
    Storage(anyhow::Error),
}

impl IntoResponse for EmployeeApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            EmployeeApiError::MissingFields => {
                (StatusCode::BAD_REQUEST, "All fields required".to_string())
            }
            EmployeeApiError::Insert(err) => {
                warn!("Employee insert failed: {err}");
                (StatusCode::BAD_REQUEST, format!("Insert failed: {err}"))
            }
            EmployeeApiError::Storage(err) => {
                warn!("Employee storage failure: {err}");
                (StatusCode::BAD_REQUEST, format!("Storage error: {err}"))
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
