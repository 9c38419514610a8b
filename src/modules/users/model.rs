//! Account data models.
//!
//! Accounts are created through the admin screens (or the startup bootstrap
//! for the super admin); the authentication core only ever reads them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// System role attached to every account.
///
/// `SUPER_ADMIN` is the platform operator and carries no school binding;
/// the other three are scoped to exactly one school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Teacher,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::Teacher => "TEACHER",
            UserRole::Student => "STUDENT",
        }
    }

    /// Platform-level roles have no tenant.
    pub fn is_platform_role(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            "ADMIN" => Ok(UserRole::Admin),
            "TEACHER" => Ok(UserRole::Teacher),
            "STUDENT" => Ok(UserRole::Student),
            other => Err(anyhow::anyhow!("invalid role: {}", other)),
        }
    }
}

/// Whether the account may still be used by the admin screens.
///
/// The authentication core does not consult this flag: there is no
/// revocation list, and an already-minted token outlives deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl FromStr for AccountStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            other => Err(anyhow::anyhow!("invalid account status: {}", other)),
        }
    }
}

/// A persisted identity record.
///
/// `password` holds the bcrypt hash, never plaintext. `school_id` is the
/// tenant binding and is `None` for platform-level roles.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub school_id: Option<i64>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}
