//! ItemRepository - persistence for catalog items

use super::{Create, Delete, Read, Update};
use crate::dtos::CreateItemDTO;
use crate::entities::Item;
use sqlx::{Error, SqlitePool};

pub struct ItemRepository {
    connection_pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(connection_pool: SqlitePool) -> ItemRepository {
        Self { connection_pool }
    }

    /// List the whole catalog in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Item>, Error> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT item_id, name, description, price FROM items ORDER BY item_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(items)
    }
}

impl Create<Item, CreateItemDTO> for ItemRepository {
    async fn create(&self, data: &CreateItemDTO) -> Result<Item, Error> {
        let result = sqlx::query("INSERT INTO items (name, description, price) VALUES (?, ?, ?)")
            .bind(&data.name)
            .bind(&data.description)
            .bind(data.price)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        Ok(Item {
            item_id: new_id,
            name: data.name.clone(),
            description: data.description.clone(),
            price: data.price,
        })
    }
}

impl Read<Item, i64> for ItemRepository {
    async fn read(&self, id: &i64) -> Result<Option<Item>, Error> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT item_id, name, description, price FROM items WHERE item_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(item)
    }
}

impl Update<Item, CreateItemDTO, i64> for ItemRepository {
    /// Full-field replacement; partial updates are not part of the API.
    async fn update(&self, id: &i64, data: &CreateItemDTO) -> Result<Item, Error> {
        let result =
            sqlx::query("UPDATE items SET name = ?, description = ?, price = ? WHERE item_id = ?")
                .bind(&data.name)
                .bind(&data.description)
                .bind(data.price)
                .bind(id)
                .execute(&self.connection_pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Item {
            item_id: *id,
            name: data.name.clone(),
            description: data.description.clone(),
            price: data.price,
        })
    }
}

impl Delete<i64> for ItemRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM items WHERE item_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
