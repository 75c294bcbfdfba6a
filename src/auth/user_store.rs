//! Admin Credential Storage
//! Mission: Persist administrator identities with SQLite

use crate::auth::models::User;
use anyhow::Result;
use rusqlite::{params, Connection};
use tracing::info;

/// Credential store with SQLite backend
pub struct UserStore {
    db_path: String,
}

/// Failure modes for registration
#[derive(Debug)]
pub enum CreateUserError {
    /// Username collides with an existing identity (UNIQUE constraint)
    DuplicateUsername,
    Storage(anyhow::Error),
}

impl std::fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateUserError::DuplicateUsername => write!(f, "Username already exists"),
            CreateUserError::Storage(e) => write!(f, "Storage error: {e}"),
        }
    }
}

impl std::error::Error for CreateUserError {}

impl From<rusqlite::Error> for CreateUserError {
    fn from(err: rusqlite::Error) -> Self {
        // Duplicates are enforced by the UNIQUE constraint, not a pre-check,
        // so concurrent registrations cannot race past each other.
        if let rusqlite::Error::SqliteFailure(e, _) = &err {
            if e.code == rusqlite::ErrorCode::ConstraintViolation {
                return CreateUserError::DuplicateUsername;
            }
        }
        CreateUserError::Storage(err.into())
    }
}

impl UserStore {
    /// Create a new credential store and initialize the schema
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Insert a new admin identity. The password must already be hashed.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<User, CreateUserError> {
        let conn = Connection::open(&self.db_path)
            .map_err(|e| CreateUserError::Storage(e.into()))?;

        conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;

        let user = User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };

        info!("✅ Registered admin: {} (id {})", user.username, user.id);

        Ok(user)
    }

    /// Get an identity by username
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt =
            conn.prepare("SELECT id, username, password_hash FROM users WHERE username = ?1")?;

        let user_result = stmt.query_row(params![username], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                password_hash: row.get(2)?,
            })
        });

        match user_result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (UserStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = UserStore::new(db_path).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_create_and_retrieve_user() {
        let (store, _temp) = create_test_store();

        let created = store.create_user("admin", "hash-a").unwrap();
        assert_eq!(created.username, "admin");
        assert!(created.id > 0);

        let fetched = store.get_user_by_username("admin").unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.password_hash, "hash-a");
    }

    #[test]
    fn test_unknown_user_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.get_user_by_username("nobody").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (store, _temp) = create_test_store();

        store.create_user("admin", "hash-a").unwrap();
        let err = store.create_user("admin", "hash-b").unwrap_err();
        assert!(matches!(err, CreateUserError::DuplicateUsername));

        // Original identity untouched
        let user = store.get_user_by_username("admin").unwrap().unwrap();
        assert_eq!(user.password_hash, "hash-a");
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let (store, _temp) = create_test_store();

        let a = store.create_user("alice", "h1").unwrap();
        let b = store.create_user("bob", "h2").unwrap();
        assert!(b.id > a.id);
    }
}
