use std::env;

/// Default session token lifetime: one day, matching the dashboard's
/// re-login cadence.
pub const DEFAULT_TOKEN_LIFETIME: i64 = 86_400;

/// Default bcrypt work factor.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret: String,
    /// Seconds from issuance to expiry.
    pub token_lifetime: i64,
    /// bcrypt work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Loads the auth configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset. A missing secret would make every
    /// login fail at request time, so it is treated as a fatal startup
    /// condition instead.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_lifetime: env::var("TOKEN_LIFETIME")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_LIFETIME),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_BCRYPT_COST),
        }
    }
}
