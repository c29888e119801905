//! User DTOs - Data Transfer Objects for registration, login and tokens

use crate::entities::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public view of a credential record. The password hash never crosses the
/// API boundary.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.user_id,
            username: value.username,
        }
    }
}

/// DTO for creating a new user (without user_id).
///
/// The password bounds match bcrypt's 72-byte input limit.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 72, message = "Password must be between 8 and 72 characters"))]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDTO {
    pub access_token: String,
    pub token_type: String,
}

impl TokenDTO {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
