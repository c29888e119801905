//! Auth services - registration and login handlers

use crate::core::{AppError, AppState};
use crate::dtos::{CreateUserDTO, TokenDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Login body (username and password only).
#[derive(serde::Deserialize)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>,
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    body.validate()?;

    if state.users.find_by_username(&body.username).await?.is_some() {
        return Err(AppError::bad_request("Username already registered"));
    }

    let password_hash = User::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let record = CreateUserDTO {
        username: body.username,
        password: password_hash,
    };

    let created = match state.users.create(&record).await {
        Ok(user) => user,
        // two registrations can both pass the lookup above; the UNIQUE index
        // picks the single winner and the loser lands here
        Err(err) if is_unique_violation(&err) => {
            warn!("Registration lost a uniqueness race");
            return Err(AppError::bad_request("Username already registered"));
        }
        Err(err) => return Err(err.into()),
    };

    info!(user_id = created.user_id, "User registered");
    Ok((StatusCode::CREATED, Json(UserDTO::from(created))))
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<Json<TokenDTO>, AppError> {
    // unknown usernames and wrong passwords share one rejection so the
    // response never reveals which identities exist
    let user = match state.users.find_by_username(&body.username).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown username");
            return Err(AppError::unauthorized("Invalid username or password"));
        }
    };

    let password_matches = user
        .verify_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Stored credential is unreadable"))?;

    if !password_matches {
        warn!("Login attempt with wrong password");
        return Err(AppError::unauthorized("Invalid username or password"));
    }

    let token = state
        .token_keys
        .issue(&user.username)
        .map_err(|_| AppError::internal_server_error("Failed to issue token"))?;

    info!(user_id = user.user_id, "User logged in");
    Ok(Json(TokenDTO::bearer(token)))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
