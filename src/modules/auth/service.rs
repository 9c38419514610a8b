use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::jwt::AuthConfig;
use crate::modules::users::model::Account;
use crate::modules::users::store::AccountStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse, SessionUser, VerifyError};

/// Upper bound on the account lookup round trip. A slower store is treated
/// the same as a failed one.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

pub struct AuthService;

impl AuthService {
    /// Verifies an email/password pair against the account store.
    ///
    /// The pipeline short-circuits at the first failed step: field presence,
    /// lookup, then hash comparison. Each outcome leaves exactly one audit
    /// line; the password itself is never logged. Empty fields are rejected
    /// before any store traffic.
    pub async fn verify<S: AccountStore>(
        store: &S,
        email: &str,
        password: &str,
    ) -> Result<Account, VerifyError> {
        if email.is_empty() || password.is_empty() {
            warn!("login rejected: missing email or password");
            return Err(VerifyError::MalformedRequest);
        }

        let account = match timeout(LOOKUP_TIMEOUT, store.find_by_email(email)).await {
            Err(_) => {
                error!(email = %email, "account lookup timed out");
                return Err(VerifyError::Store(anyhow::anyhow!("account lookup timed out")));
            }
            Ok(Err(e)) => {
                error!(email = %email, error = %e, "account lookup failed");
                return Err(VerifyError::Store(e));
            }
            Ok(Ok(None)) => {
                warn!(email = %email, "login failed: user not found");
                return Err(VerifyError::AccountNotFound);
            }
            Ok(Ok(Some(account))) => account,
        };

        let is_match = verify_password(password, &account.password).map_err(|e| {
            error!(email = %email, "password verification errored");
            VerifyError::Store(e.error)
        })?;

        if !is_match {
            warn!(email = %email, "login failed: incorrect password");
            return Err(VerifyError::WrongPassword);
        }

        info!(email = %email, "login succeeded");
        Ok(account)
    }

    /// Full login flow: verify credentials, then mint a session token whose
    /// claims mirror the account's role and school binding at this moment.
    pub async fn login<S: AccountStore>(
        store: &S,
        dto: LoginRequest,
        config: &AuthConfig,
    ) -> Result<LoginResponse, AppError> {
        let account = Self::verify(store, &dto.email, &dto.password)
            .await
            .map_err(|e| e.into_app_error())?;

        let token = create_session_token(account.id, account.role, account.school_id, config)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: SessionUser::from(account),
        })
    }
}
