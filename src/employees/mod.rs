//! Employees Module
//! Mission: Employee records and their CRUD surface

pub mod api;
pub mod models;
pub mod store;

pub use api::EmployeeState;
pub use store::EmployeeStore;
