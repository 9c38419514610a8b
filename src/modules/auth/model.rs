use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::modules::users::model::{Account, UserRole};
use crate::utils::errors::AppError;

/// Claims embedded in a session token.
///
/// Derived from the account at issuance time and immutable afterwards; the
/// role and school binding always mirror what the account held at login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Account ID (subject claim)
    pub sub: String,
    /// System role at issuance time
    pub role: UserRole,
    /// School binding; `None` for platform-level roles
    pub school_id: Option<i64>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// Login request body.
///
/// Fields default to empty strings so an absent field and an empty one take
/// the same rejection path in the verifier.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public projection of an account returned on successful login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub school_id: Option<i64>,
}

impl From<Account> for SessionUser {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
            school_id: account.school_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: SessionUser,
}

/// Claims echoed back to an authenticated caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionInfo {
    pub id: i64,
    pub role: UserRole,
    pub school_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Terminal outcome of a failed credential verification.
///
/// The `Display` strings are internal; what a client sees comes from
/// [`VerifyError::public_message`]. Note that unknown-account and
/// wrong-password stay distinguishable on the wire (distinct status and
/// message), which leaks account existence. The dashboard depends on the
/// split, so it is kept.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("email or password missing")]
    MalformedRequest,
    #[error("no account matches the email")]
    AccountNotFound,
    #[error("password mismatch")]
    WrongPassword,
    #[error("account store failure")]
    Store(#[source] anyhow::Error),
}

impl VerifyError {
    pub fn status(&self) -> StatusCode {
        match self {
            VerifyError::MalformedRequest => StatusCode::BAD_REQUEST,
            VerifyError::AccountNotFound => StatusCode::NOT_FOUND,
            VerifyError::WrongPassword => StatusCode::UNAUTHORIZED,
            VerifyError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message surfaced to the client. Store failures collapse to a generic
    /// message; detail stays in the server log.
    pub fn public_message(&self) -> &'static str {
        match self {
            VerifyError::MalformedRequest => "Email and password required",
            VerifyError::AccountNotFound => "User not found",
            VerifyError::WrongPassword => "Incorrect password",
            VerifyError::Store(_) => "Server error",
        }
    }

    pub fn into_app_error(self) -> AppError {
        AppError::new(self.status(), anyhow::anyhow!(self.public_message()))
    }
}
