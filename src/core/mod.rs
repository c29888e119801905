//! Core module - infrastructure components of the application:
//! - Tokens and the authentication middleware
//! - Configuration
//! - Error handling
//! - Application state

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports to simplify imports
pub use auth::{Claims, TokenKeys, authentication_middleware};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
