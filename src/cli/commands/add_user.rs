//! Register a user from the shell, e.g. to create extra admins.

use crate::config::Config;
use crate::db::{RegisterOutcome, Store};

pub async fn cmd_add_user(
    config: &Config,
    username: &str,
    password: &str,
    admin: bool,
) -> anyhow::Result<()> {
    if username.is_empty() || password.is_empty() {
        anyhow::bail!("Username and password cannot be empty");
    }

    let store = Store::from_config(config).await?;

    match store.register_user(username, password, admin).await? {
        RegisterOutcome::Created => {
            let role = if admin { "admin" } else { "user" };
            println!("✓ Created {role} '{username}'");
        }
        RegisterOutcome::AlreadyExists => {
            println!("User '{username}' already exists; nothing changed.");
        }
    }

    Ok(())
}
