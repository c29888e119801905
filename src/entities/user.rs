//! User entity - credential record with password hashing helpers

use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    /// Checks a candidate password against the stored bcrypt hash.
    ///
    /// `Ok(false)` means the password does not match; `Err` only when the
    /// stored hash itself is malformed, which callers must treat as a server
    /// fault rather than a failed login.
    pub fn verify_password(&self, candidate: &str) -> Result<bool, BcryptError> {
        verify(candidate, &self.password)
    }

    /// Hash a password using bcrypt with default cost
    pub fn hash_password(password: &str) -> Result<String, BcryptError> {
        hash(password, DEFAULT_COST)
    }
}
