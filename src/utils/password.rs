use bcrypt::{hash, verify};

use crate::utils::errors::AppError;

/// Hashes a plaintext password with bcrypt at the configured work factor.
///
/// The cost comes from [`AuthConfig`](crate::config::jwt::AuthConfig) so the
/// work factor can be raised without touching call sites.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Compares a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on a clean mismatch; errors only when the stored hash
/// is not a valid bcrypt string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
