//! Stockroom server library - exposes the main modules for the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export the main types to simplify imports
pub use crate::core::{AppError, AppState, auth, config};
pub use crate::services::root;

use axum::{Router, middleware, routing::get, routing::post};
use std::sync::Arc;

/// Builds the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/api/items", configure_item_routes(state.clone()))
        .with_state(state)
}

/// Configures the authentication routes (register, login) - the only
/// routes reachable without a token
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}

/// Configures the catalog routes, all behind the bearer-token gate
fn configure_item_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
