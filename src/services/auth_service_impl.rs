//! `SeaORM` implementation of the `AuthService` trait.

use crate::db::{RegisterOutcome, Store, User};
use crate::services::auth_service::{AuthError, AuthService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmAuthService {
    store: Store,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        if username.is_empty() {
            return Err(AuthError::Validation("Username is required".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }

        let outcome = self.store.register_user(username, password, false).await?;

        if outcome == RegisterOutcome::Created {
            info!("Registered new user: {username}");
        }

        Ok(outcome)
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .store
            .check_user(username, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.is_admin {
            info!("Admin login: {}", user.username);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecurityConfig;

    async fn service() -> SeaOrmAuthService {
        let db_path = std::env::temp_dir().join(format!(
            "recoverease-auth-test-{}.db",
            uuid::Uuid::new_v4()
        ));
        let security = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        };
        let store =
            Store::with_pool_options(&format!("sqlite:{}", db_path.display()), 2, 1, 10, security)
                .await
                .unwrap();
        SeaOrmAuthService::new(store)
    }

    #[tokio::test]
    async fn register_reports_duplicates() {
        let auth = service().await;

        let first = auth.register("carol", "pw", "pw").await.unwrap();
        let second = auth.register("carol", "other", "other").await.unwrap();

        assert_eq!(first, RegisterOutcome::Created);
        assert_eq!(second, RegisterOutcome::AlreadyExists);
    }

    #[tokio::test]
    async fn register_rejects_mismatch_before_touching_store() {
        let auth = service().await;

        let err = auth.register("dave", "pw", "pW").await.unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert!(auth.store.check_user("dave", "pw").await.unwrap().is_none());
        assert!(auth.store.check_user("dave", "pW").await.unwrap().is_none());

        let err = auth.register("", "pw", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn login_returns_admin_flag() {
        let auth = service().await;
        auth.store.register_user("root", "pw", true).await.unwrap();
        auth.register("erin", "pw", "pw").await.unwrap();

        assert!(auth.login("root", "pw").await.unwrap().is_admin);
        assert!(!auth.login("erin", "pw").await.unwrap().is_admin);
        assert!(matches!(
            auth.login("erin", "nope").await.unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }

    #[test]
    fn anyhow_errors_become_database_errors() {
        let err: AuthError = anyhow::anyhow!("disk I/O error").into();
        assert!(matches!(err, AuthError::Database(_)));
    }
}
