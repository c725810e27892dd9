use crate::entities::{found_items, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundItem {
    pub id: i64,
    pub finder_name: String,
    pub item_desc: String,
    pub found_location: String,
}

impl From<found_items::Model> for FoundItem {
    fn from(m: found_items::Model) -> Self {
        Self {
            id: m.id,
            finder_name: m.finder_name.unwrap_or_default(),
            item_desc: m.item_desc.unwrap_or_default(),
            found_location: m.found_location.unwrap_or_default(),
        }
    }
}

pub struct FoundItemRepository {
    conn: DatabaseConnection,
}

impl FoundItemRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(
        &self,
        finder_name: &str,
        item_desc: &str,
        found_location: &str,
    ) -> Result<FoundItem> {
        let active_model = found_items::ActiveModel {
            finder_name: Set(Some(finder_name.to_string())),
            item_desc: Set(Some(item_desc.to_string())),
            found_location: Set(Some(found_location.to_string())),
            ..Default::default()
        };

        let model = FoundItems::insert(active_model)
            .exec_with_returning(&self.conn)
            .await
            .context("Failed to insert found item")?;

        info!("Found item {} reported by {}", model.id, finder_name);
        Ok(FoundItem::from(model))
    }

    pub async fn list_all(&self) -> Result<Vec<FoundItem>> {
        let rows = FoundItems::find()
            .order_by_asc(found_items::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list found items")?;

        Ok(rows.into_iter().map(FoundItem::from).collect())
    }

    pub async fn remove(&self, id: i64) -> Result<bool> {
        let result = FoundItems::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete found item")?;

        Ok(result.rows_affected > 0)
    }
}
