use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, ReportService, SeaOrmAuthService, SeaOrmReportService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub report_service: Arc<dyn ReportService>,
}

impl SharedState {
    /// Opens the database, ensures the schema and the bootstrap admin.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::from_config(&config).await?;
        store.ensure_bootstrap_admin().await?;

        let auth_service =
            Arc::new(SeaOrmAuthService::new(store.clone())) as Arc<dyn AuthService + 'static>;
        let report_service = Arc::new(SeaOrmReportService::new(store.clone()))
            as Arc<dyn ReportService + 'static>;

        Ok(Self {
            config: Arc::new(config),
            store,
            auth_service,
            report_service,
        })
    }
}
