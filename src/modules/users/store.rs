//! Account lookup against the relational store.
//!
//! The verifier only needs one operation, lookup by email, so it is kept
//! behind the [`AccountStore`] trait. Production uses [`PgAccountStore`];
//! tests substitute an in-memory implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;
use tracing::info;

use crate::config::bootstrap::BootstrapConfig;
use crate::modules::users::model::{Account, AccountStatus, UserRole};
use crate::utils::password::hash_password;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetches the account whose email exactly matches, or `None`.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>>;
}

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    email: String,
    password: String,
    role: String,
    school_id: Option<i64>,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = anyhow::Error;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            role: UserRole::from_str(&row.role)?,
            school_id: row.school_id,
            status: AccountStatus::from_str(&row.status)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, email, password, role, school_id, status, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }
}

/// Seeds the super admin account if none exists yet.
///
/// Runs once at startup. The password from the bootstrap configuration is
/// hashed before the insert; an existing super admin is left untouched.
pub async fn ensure_super_admin(
    db: &PgPool,
    config: &BootstrapConfig,
    bcrypt_cost: u32,
) -> anyhow::Result<()> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE role = 'SUPER_ADMIN')")
            .fetch_one(db)
            .await?;

    if exists {
        info!("super admin already exists, skipping bootstrap");
        return Ok(());
    }

    let hashed = hash_password(&config.password, bcrypt_cost).map_err(|e| e.error)?;

    sqlx::query(
        "INSERT INTO users (name, email, password, role, school_id)
         VALUES ($1, $2, $3, 'SUPER_ADMIN', NULL)",
    )
    .bind(&config.name)
    .bind(&config.email)
    .bind(&hashed)
    .execute(db)
    .await?;

    info!(email = %config.email, "super admin created");
    Ok(())
}
