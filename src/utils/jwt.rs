//! Session token minting and validation.
//!
//! Tokens are HS256-signed JWTs carrying the account's id, role, and school
//! binding plus issued-at and expiry timestamps. The signature covers the
//! whole claim payload, so any bit flip invalidates the token. Both sides of
//! the pair share the secret held in [`AuthConfig`]; nothing else in the
//! system can mint or inspect a token.

use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

use crate::config::jwt::AuthConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Why a presented token was rejected.
///
/// Callers must not forward the distinction to clients; every variant is
/// surfaced as the same unauthorized response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token signature mismatch")]
    BadSignature,
    #[error("malformed token")]
    Malformed,
}

/// Mints a session token for an authenticated account.
///
/// The claims mirror the account's role and school binding at the moment of
/// issuance; expiry is fixed at issuance time plus the configured lifetime
/// (one day by default). There is no refresh mechanism.
///
/// # Errors
///
/// Signing only fails if the secret is unusable, which is a deployment
/// defect rather than a per-request condition.
pub fn create_session_token(
    account_id: i64,
    role: UserRole,
    school_id: Option<i64>,
    config: &AuthConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    // Platform-level roles carry no tenant, whatever the row says.
    let school_id = if role.is_platform_role() {
        None
    } else {
        school_id
    };

    let claims = Claims {
        sub: account_id.to_string(),
        role,
        school_id,
        exp: (now + config.token_lifetime) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create session token: {}", e)))
}

/// Validates a session token and returns the embedded claims unchanged.
///
/// Checks run structural parse, then signature, then expiry. Expiry is
/// compared with zero leeway; there is no clock-skew tolerance and no
/// revocation list, so a token stays valid until its natural expiry.
pub fn validate_session_token(token: &str, config: &AuthConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
        _ => TokenError::Malformed,
    })
}
