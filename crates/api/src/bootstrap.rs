//! Startup bootstrap: seed the default user accounts.
//!
//! Password hashes are salted per run, so the accounts are created at startup
//! rather than in a migration. The seed only runs when the users table is
//! empty; existing installations are never touched.

use fieldwork_core::roles::{ROLE_ADMIN, ROLE_AGENT, ROLE_VIEWER};
use fieldwork_db::models::user::CreateUser;
use fieldwork_db::repositories::UserRepo;
use fieldwork_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Default accounts created on first startup: (username, name, role, password).
const SEED_ACCOUNTS: [(&str, &str, &str, &str); 3] = [
    ("admin", "Administrator", ROLE_ADMIN, "admin123"),
    ("agent", "Field Agent", ROLE_AGENT, "agent123"),
    ("viewer", "Viewer", ROLE_VIEWER, "viewer123"),
];

/// Create the default admin/agent/viewer accounts if no users exist yet.
pub async fn ensure_seed_users(pool: &DbPool) -> AppResult<()> {
    let existing = UserRepo::count(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Users already present, skipping seed");
        return Ok(());
    }

    for (username, name, role, password) in SEED_ACCOUNTS {
        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        let input = CreateUser {
            username: username.to_string(),
            email: format!("{username}@fieldwork.local"),
            name: name.to_string(),
            role: role.to_string(),
            password_hash,
        };
        let user = UserRepo::create(pool, &input).await?;
        tracing::info!(user_id = user.id, username, role, "Seeded default account");
    }

    tracing::warn!("Default accounts created with well-known passwords; change them");
    Ok(())
}
