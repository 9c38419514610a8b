use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;

use classhub::config::jwt::AuthConfig;
use classhub::modules::auth::model::{LoginRequest, VerifyError};
use classhub::modules::auth::service::AuthService;
use classhub::modules::users::model::{Account, AccountStatus, UserRole};
use classhub::modules::users::store::AccountStore;
use classhub::utils::jwt::validate_session_token;
use classhub::utils::password::hash_password;

const TEST_COST: u32 = 4;

struct InMemoryStore {
    accounts: HashMap<String, Account>,
}

impl InMemoryStore {
    fn with(accounts: Vec<Account>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.email.clone(), a))
                .collect(),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        Ok(self.accounts.get(email).cloned())
    }
}

/// Store whose lookups always fail, standing in for a lost database.
struct FailingStore;

#[async_trait]
impl AccountStore for FailingStore {
    async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<Account>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// Store that must never be reached.
struct UnreachableStore;

#[async_trait]
impl AccountStore for UnreachableStore {
    async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<Account>> {
        panic!("lookup attempted for a request that should fail validation first");
    }
}

fn teacher_account() -> Account {
    Account {
        id: 1,
        name: "Ada Teacher".to_string(),
        email: "a@gmail.com".to_string(),
        password: hash_password("secret", TEST_COST).unwrap(),
        role: UserRole::Teacher,
        school_id: Some(7),
        status: AccountStatus::Active,
        created_at: Utc::now(),
    }
}

fn get_test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_lifetime: 86_400,
        bcrypt_cost: TEST_COST,
    }
}

#[tokio::test]
async fn test_verify_success_returns_matching_account() {
    let store = InMemoryStore::with(vec![teacher_account()]);

    let account = AuthService::verify(&store, "a@gmail.com", "secret")
        .await
        .unwrap();

    assert_eq!(account.id, 1);
    assert_eq!(account.role, UserRole::Teacher);
    assert_eq!(account.school_id, Some(7));
}

#[tokio::test]
async fn test_verify_wrong_password() {
    let store = InMemoryStore::with(vec![teacher_account()]);

    let err = AuthService::verify(&store, "a@gmail.com", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, VerifyError::WrongPassword));
}

#[tokio::test]
async fn test_verify_unknown_email_regardless_of_password() {
    let store = InMemoryStore::with(vec![teacher_account()]);

    let err = AuthService::verify(&store, "missing@x.com", "x")
        .await
        .unwrap_err();

    assert!(matches!(err, VerifyError::AccountNotFound));
}

#[tokio::test]
async fn test_verify_empty_fields_skip_lookup() {
    let err = AuthService::verify(&UnreachableStore, "", "secret")
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::MalformedRequest));

    let err = AuthService::verify(&UnreachableStore, "a@gmail.com", "")
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::MalformedRequest));

    let err = AuthService::verify(&UnreachableStore, "", "")
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::MalformedRequest));
}

#[tokio::test]
async fn test_verify_store_failure() {
    let err = AuthService::verify(&FailingStore, "a@gmail.com", "secret")
        .await
        .unwrap_err();

    assert!(matches!(err, VerifyError::Store(_)));
}

#[tokio::test]
async fn test_login_mints_token_mirroring_account() {
    let store = InMemoryStore::with(vec![teacher_account()]);
    let config = get_test_auth_config();

    let response = AuthService::login(
        &store,
        LoginRequest {
            email: "a@gmail.com".to_string(),
            password: "secret".to_string(),
        },
        &config,
    )
    .await
    .unwrap();

    assert_eq!(response.message, "Login successful");
    assert_eq!(response.user.id, 1);
    assert_eq!(response.user.name, "Ada Teacher");
    assert_eq!(response.user.email, "a@gmail.com");
    assert_eq!(response.user.role, UserRole::Teacher);
    assert_eq!(response.user.school_id, Some(7));

    let claims = validate_session_token(&response.token, &config).unwrap();
    assert_eq!(claims.sub, "1");
    assert_eq!(claims.role, UserRole::Teacher);
    assert_eq!(claims.school_id, Some(7));
}

#[tokio::test]
async fn test_login_failure_statuses_match_wire_contract() {
    let store = InMemoryStore::with(vec![teacher_account()]);
    let config = get_test_auth_config();

    let err = AuthService::login(
        &store,
        LoginRequest {
            email: "a@gmail.com".to_string(),
            password: "wrong".to_string(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "Incorrect password");

    let err = AuthService::login(
        &store,
        LoginRequest {
            email: "missing@x.com".to_string(),
            password: "x".to_string(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.error.to_string(), "User not found");

    let err = AuthService::login(
        &store,
        LoginRequest {
            email: String::new(),
            password: String::new(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.error.to_string(), "Email and password required");

    let err = AuthService::login(
        &FailingStore,
        LoginRequest {
            email: "a@gmail.com".to_string(),
            password: "secret".to_string(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.error.to_string(), "Server error");
}
