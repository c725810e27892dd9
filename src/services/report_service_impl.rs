//! `SeaORM` implementation of the `ReportService` trait.

use crate::db::{FoundItem, LostItem, Store};
use crate::services::report_service::{ReportError, ReportService};
use async_trait::async_trait;

pub struct SeaOrmReportService {
    store: Store,
}

impl SeaOrmReportService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportService for SeaOrmReportService {
    async fn report_lost(
        &self,
        owner_name: &str,
        item_desc: &str,
        last_seen_location: &str,
    ) -> Result<LostItem, ReportError> {
        Ok(self
            .store
            .report_lost_item(owner_name, item_desc, last_seen_location)
            .await?)
    }

    async fn report_found(
        &self,
        finder_name: &str,
        item_desc: &str,
        found_location: &str,
    ) -> Result<FoundItem, ReportError> {
        Ok(self
            .store
            .report_found_item(finder_name, item_desc, found_location)
            .await?)
    }

    async fn lost_items(&self) -> Result<Vec<LostItem>, ReportError> {
        Ok(self.store.fetch_lost_items().await?)
    }

    async fn found_items(&self) -> Result<Vec<FoundItem>, ReportError> {
        Ok(self.store.fetch_found_items().await?)
    }

    async fn delete_lost(&self, id: i64) -> Result<bool, ReportError> {
        Ok(self.store.delete_lost_item(id).await?)
    }

    async fn delete_found(&self, id: i64) -> Result<bool, ReportError> {
        Ok(self.store.delete_found_item(id).await?)
    }
}
