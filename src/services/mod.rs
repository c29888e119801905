//! Services module - HTTP handlers, one sub-module per functional area.

pub mod auth;
pub mod item;

// Re-exports to simplify imports
pub use auth::{login_user, register_user};
pub use item::{create_item, delete_item, get_item, list_items, update_item};

use crate::core::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
