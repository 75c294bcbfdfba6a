//! Password Hashing
//! Mission: Salted one-way hashing of admin passwords

use anyhow::{Context, Result};

/// bcrypt work factor. Matches the deployed credential database.
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with a random salt.
///
/// Two calls with the same plaintext produce different hashes.
pub fn hash_password(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, BCRYPT_COST).context("Failed to hash password")
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns false on mismatch or on a malformed hash; never errors for
/// user-supplied input.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}
