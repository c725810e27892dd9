//! Domain service for lost and found reports.

use thiserror::Error;

use crate::db::{FoundItem, LostItem};

/// Errors specific to report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for ReportError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for filing, listing and removing reports.
///
/// Report fields are free text and are stored exactly as submitted, empty ones included.
#[async_trait::async_trait]
pub trait ReportService: Send + Sync {
    async fn report_lost(
        &self,
        owner_name: &str,
        item_desc: &str,
        last_seen_location: &str,
    ) -> Result<LostItem, ReportError>;

    async fn report_found(
        &self,
        finder_name: &str,
        item_desc: &str,
        found_location: &str,
    ) -> Result<FoundItem, ReportError>;

    async fn lost_items(&self) -> Result<Vec<LostItem>, ReportError>;

    async fn found_items(&self) -> Result<Vec<FoundItem>, ReportError>;

    /// Returns `false` when no lost item had that id.
    async fn delete_lost(&self, id: i64) -> Result<bool, ReportError>;

    /// Returns `false` when no found item had that id.
    async fn delete_found(&self, id: i64) -> Result<bool, ReportError>;
}
