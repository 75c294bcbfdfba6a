//! Authentication Module
//! Mission: Admin credentials, bearer tokens, and the authorization gate

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod user_store;

pub use api::AuthState;
pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
pub use user_store::UserStore;
