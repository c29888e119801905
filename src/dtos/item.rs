//! Item DTOs - Data Transfer Objects for the catalog endpoints

use crate::entities::Item;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct ItemDTO {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<Item> for ItemDTO {
    fn from(value: Item) -> Self {
        Self {
            id: value.item_id,
            name: value.name,
            description: value.description,
            price: value.price,
        }
    }
}

/// DTO for creating an item (without item_id). PUT uses the same shape:
/// updates replace every field.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateItemDTO {
    #[validate(length(min = 1, max = 128, message = "Name must be between 1 and 128 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}
