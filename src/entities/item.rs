//! Item entity - a catalog entry persisted in the items table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
