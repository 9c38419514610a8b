use std::env;

/// Identity of the super admin account seeded at startup.
///
/// Read once during boot; never consulted on the per-request path. The
/// password is hashed at insert time, so only the hash reaches the database.
#[derive(Clone)]
pub struct BootstrapConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl BootstrapConfig {
    /// Returns `None` when any of the `SUPER_ADMIN_*` variables is unset,
    /// in which case bootstrap is skipped.
    pub fn from_env() -> Option<Self> {
        match (
            env::var("SUPER_ADMIN_NAME"),
            env::var("SUPER_ADMIN_EMAIL"),
            env::var("SUPER_ADMIN_PASSWORD"),
        ) {
            (Ok(name), Ok(email), Ok(password)) => Some(Self {
                name,
                email,
                password,
            }),
            _ => None,
        }
    }
}
