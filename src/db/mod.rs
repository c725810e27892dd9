use crate::config::{Config, SecurityConfig};
use crate::constants;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub mod migrator;
pub mod repositories;

pub use repositories::found_item::FoundItem;
pub use repositories::lost_item::LostItem;
pub use repositories::user::{RegisterOutcome, User};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
    security: SecurityConfig,
}

impl Store {
    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
            config.general.db_acquire_timeout_seconds,
            config.security.clone(),
        )
        .await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_seconds: u64,
        security: SecurityConfig,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(constants::db::CONNECT_TIMEOUT)
            .acquire_timeout(Duration::from_secs(acquire_timeout_seconds))
            .idle_timeout(constants::db::IDLE_TIMEOUT)
            .max_lifetime(constants::db::MAX_LIFETIME)
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & schema ensured (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn, security })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn lost_item_repo(&self) -> repositories::lost_item::LostItemRepository {
        repositories::lost_item::LostItemRepository::new(self.conn.clone())
    }

    fn found_item_repo(&self) -> repositories::found_item::FoundItemRepository {
        repositories::found_item::FoundItemRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<RegisterOutcome> {
        self.user_repo()
            .register(username, password, is_admin, &self.security)
            .await
    }

    pub async fn check_user(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.user_repo()
            .check(username, password, &self.security)
            .await
    }

    /// Make sure the configured bootstrap admin exists. An existing account with the
    /// same name is left untouched, including its admin flag.
    pub async fn ensure_bootstrap_admin(&self) -> Result<()> {
        let security = &self.security;
        if !security.bootstrap_admin {
            return Ok(());
        }

        let outcome = self
            .register_user(
                &security.bootstrap_admin_username,
                &security.bootstrap_admin_password,
                true,
            )
            .await?;

        if outcome == RegisterOutcome::Created {
            info!(
                "Created bootstrap admin account '{}'",
                security.bootstrap_admin_username
            );
        }

        if security.uses_default_admin_credential() {
            warn!(
                "Bootstrap admin uses the default admin/admin credential; set security.bootstrap_admin_password"
            );
        }

        Ok(())
    }

    // ========================================================================
    // Lost & found reports
    // ========================================================================

    pub async fn report_lost_item(
        &self,
        owner_name: &str,
        item_desc: &str,
        last_seen_location: &str,
    ) -> Result<LostItem> {
        self.lost_item_repo()
            .add(owner_name, item_desc, last_seen_location)
            .await
    }

    pub async fn report_found_item(
        &self,
        finder_name: &str,
        item_desc: &str,
        found_location: &str,
    ) -> Result<FoundItem> {
        self.found_item_repo()
            .add(finder_name, item_desc, found_location)
            .await
    }

    pub async fn fetch_lost_items(&self) -> Result<Vec<LostItem>> {
        self.lost_item_repo().list_all().await
    }

    pub async fn fetch_found_items(&self) -> Result<Vec<FoundItem>> {
        self.found_item_repo().list_all().await
    }

    pub async fn delete_lost_item(&self, id: i64) -> Result<bool> {
        self.lost_item_repo().remove(id).await
    }

    pub async fn delete_found_item(&self, id: i64) -> Result<bool> {
        self.found_item_repo().remove(id).await
    }
}
