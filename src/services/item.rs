//! Item services - CRUD handlers for the catalog.
//!
//! Every route here sits behind the authentication middleware: handlers read
//! the already-verified [`Claims`] from request extensions and never check
//! the token themselves.

use crate::core::{AppError, AppState, Claims};
use crate::dtos::{CreateItemDTO, ItemDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state, claims))]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ItemDTO>>, AppError> {
    debug!(subject = %claims.sub, "Listing items");
    let items = state.items.find_all().await?;

    Ok(Json(items.into_iter().map(ItemDTO::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemDTO>, AppError> {
    let item = state
        .items
        .read(&item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;

    Ok(Json(ItemDTO::from(item)))
}

#[instrument(skip(state, claims, body))]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<CreateItemDTO>,
) -> Result<(StatusCode, Json<ItemDTO>), AppError> {
    body.validate()?;

    let created = state.items.create(&body).await?;

    info!(item_id = created.item_id, subject = %claims.sub, "Item created");
    Ok((StatusCode::CREATED, Json(ItemDTO::from(created))))
}

#[instrument(skip(state, claims, body))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<CreateItemDTO>,
) -> Result<Json<ItemDTO>, AppError> {
    body.validate()?;

    if state.items.read(&item_id).await?.is_none() {
        return Err(AppError::not_found("Item not found"));
    }

    let updated = state.items.update(&item_id, &body).await?;

    info!(item_id, subject = %claims.sub, "Item updated");
    Ok(Json(ItemDTO::from(updated)))
}

#[instrument(skip(state, claims))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, AppError> {
    if state.items.read(&item_id).await?.is_none() {
        return Err(AppError::not_found("Item not found"));
    }

    state.items.delete(&item_id).await?;

    info!(item_id, subject = %claims.sub, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
