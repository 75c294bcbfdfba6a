//! Employee Models
//! Mission: Define the employee record and its request payloads

use serde::{Deserialize, Serialize};

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

/// Create request body. Fields are optional so presence checks can answer
/// with the service's own 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub salary: Option<f64>,
}

/// Update request body - full replacement of the three mutable fields
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: String,
    pub role: String,
    pub salary: f64,
}
