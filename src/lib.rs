//! Employee Records Backend Library
//!
//! Exposes the auth, employee, and app-assembly modules for use by the
//! `emprecs` binary and the integration tests.

pub mod app;
pub mod auth;
pub mod employees;
pub mod middleware;
