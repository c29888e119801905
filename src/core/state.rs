//! Application state shared by every route and middleware.

use crate::core::auth::TokenKeys;
use crate::repositories::{ItemRepository, UserRepository};
use sqlx::SqlitePool;

pub struct AppState {
    /// Repository holding the credential records
    pub users: UserRepository,

    /// Repository holding the catalog items
    pub items: ItemRepository,

    /// Signing material for issuing and verifying access tokens
    pub token_keys: TokenKeys,
}

impl AppState {
    /// Builds the state from a shared connection pool and the token keys
    /// derived from the startup configuration.
    pub fn new(pool: SqlitePool, token_keys: TokenKeys) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            items: ItemRepository::new(pool),
            token_keys,
        }
    }
}
