use crate::constants::LOST_STATUS;
use crate::entities::{lost_items, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LostItem {
    pub id: i64,
    pub owner_name: String,
    pub item_desc: String,
    pub last_seen_location: String,
    pub status: String,
}

impl From<lost_items::Model> for LostItem {
    fn from(m: lost_items::Model) -> Self {
        Self {
            id: m.id,
            owner_name: m.owner_name.unwrap_or_default(),
            item_desc: m.item_desc.unwrap_or_default(),
            last_seen_location: m.last_seen_location.unwrap_or_default(),
            status: m.status.unwrap_or_else(|| LOST_STATUS.to_string()),
        }
    }
}

pub struct LostItemRepository {
    conn: DatabaseConnection,
}

impl LostItemRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(
        &self,
        owner_name: &str,
        item_desc: &str,
        last_seen_location: &str,
    ) -> Result<LostItem> {
        let active_model = lost_items::ActiveModel {
            owner_name: Set(Some(owner_name.to_string())),
            item_desc: Set(Some(item_desc.to_string())),
            last_seen_location: Set(Some(last_seen_location.to_string())),
            status: Set(Some(LOST_STATUS.to_string())),
            ..Default::default()
        };

        let model = LostItems::insert(active_model)
            .exec_with_returning(&self.conn)
            .await
            .context("Failed to insert lost item")?;

        info!("Lost item {} reported by {}", model.id, owner_name);
        Ok(LostItem::from(model))
    }

    pub async fn list_all(&self) -> Result<Vec<LostItem>> {
        let rows = LostItems::find()
            .order_by_asc(lost_items::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list lost items")?;

        Ok(rows.into_iter().map(LostItem::from).collect())
    }

    /// Returns `false` when no row had that id.
    pub async fn remove(&self, id: i64) -> Result<bool> {
        let result = LostItems::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete lost item")?;

        Ok(result.rows_affected > 0)
    }
}
