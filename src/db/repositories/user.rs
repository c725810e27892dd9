use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};
use tokio::task;
use tracing::warn;

use crate::config::SecurityConfig;
use crate::entities::{prelude::*, users};

/// User data returned from repository (without sensitive password hash)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub is_admin: bool,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            username: model.username,
            is_admin: model.is_admin,
        }
    }
}

/// Result of a registration attempt. A duplicate username is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    AlreadyExists,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a user unless the username is taken. The existing row is never touched.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
        config: &SecurityConfig,
    ) -> Result<RegisterOutcome> {
        let password = password.to_string();
        let config = config.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .context("Password hashing task panicked")??;

        let active_model = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            is_admin: Set(is_admin),
        };

        let inserted = Users::insert(active_model)
            .on_conflict(
                OnConflict::column(users::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert user")?;

        if inserted == 0 {
            Ok(RegisterOutcome::AlreadyExists)
        } else {
            Ok(RegisterOutcome::Created)
        }
    }

    /// Look up a user by exact username and verify the password.
    /// Note: This uses `spawn_blocking` because Argon2 hashing is CPU-intensive
    /// and would block the async runtime if run directly.
    ///
    /// An unknown username still pays for one hash with the configured costs, so response
    /// time does not reveal which usernames exist.
    pub async fn check(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<Option<User>> {
        let user = Users::find_by_id(username.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user for password verification")?;

        let Some(user) = user else {
            let password = password.to_string();
            let config = config.clone();
            task::spawn_blocking(move || hash_password(&password, &config))
                .await
                .context("Password hashing task panicked")??;
            return Ok(None);
        };

        let password_hash = user.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let Ok(parsed_hash) = PasswordHash::new(&password_hash) else {
                return false;
            };

            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        })
        .await
        .context("Password verification task panicked")?;

        if !is_valid && !user.password_hash.starts_with("$argon2") {
            warn!(
                "User {} has a password that is not an argon2 hash and cannot log in",
                user.username
            );
        }

        Ok(is_valid.then(|| User::from(user)))
    }

    #[cfg(test)]
    pub async fn count_by_username(&self, username: &str) -> Result<u64> {
        use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

        Users::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.conn)
            .await
            .context("Failed to count users")
    }
}

/// Hash a password using Argon2id with the configured cost parameters.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None,
    )
    .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_password_is_salted_and_verifiable() {
        let config = SecurityConfig::default();
        let first = hash_password("s3cret", &config).unwrap();
        let second = hash_password("s3cret", &config).unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&first).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"s3cret", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"S3cret", &parsed)
                .is_err()
        );
    }

    async fn test_repo() -> UserRepository {
        let db_path = std::env::temp_dir().join(format!(
            "recoverease-user-test-{}.db",
            uuid::Uuid::new_v4()
        ));
        let store = crate::db::Store::with_pool_options(
            &format!("sqlite:{}", db_path.display()),
            2,
            1,
            10,
            SecurityConfig::default(),
        )
        .await
        .unwrap();
        UserRepository::new(store.conn)
    }

    #[tokio::test]
    async fn check_hashes_even_for_unknown_usernames() {
        let repo = test_repo().await;
        let fast = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        };
        assert!(repo.check("ghost", "pw", &fast).await.unwrap().is_none());

        // Costs that cannot hash surface as an error, proving the lookup miss still hashed.
        let broken = SecurityConfig {
            argon2_memory_cost_kib: 1,
            ..SecurityConfig::default()
        };
        assert!(repo.check("ghost", "pw", &broken).await.is_err());
    }

    #[test]
    fn hash_password_rejects_invalid_params() {
        let config = SecurityConfig {
            argon2_memory_cost_kib: 1,
            ..SecurityConfig::default()
        };
        assert!(hash_password("pw", &config).is_err());
    }
}
