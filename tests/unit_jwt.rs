use classhub::config::jwt::AuthConfig;
use classhub::modules::users::model::UserRole;
use classhub::utils::jwt::{TokenError, create_session_token, validate_session_token};

fn get_test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_lifetime: 86_400,
        bcrypt_cost: 4,
    }
}

#[test]
fn test_create_session_token_success() {
    let config = get_test_auth_config();

    let result = create_session_token(1, UserRole::Teacher, Some(7), &config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_create_session_token_all_roles() {
    let config = get_test_auth_config();

    let roles = vec![
        UserRole::SuperAdmin,
        UserRole::Admin,
        UserRole::Teacher,
        UserRole::Student,
    ];

    for role in roles {
        let result = create_session_token(1, role, None, &config);
        assert!(result.is_ok());
    }
}

#[test]
fn test_validate_round_trip_preserves_claims() {
    let config = get_test_auth_config();

    let token = create_session_token(42, UserRole::Teacher, Some(7), &config).unwrap();
    let claims = validate_session_token(&token, &config).unwrap();

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.role, UserRole::Teacher);
    assert_eq!(claims.school_id, Some(7));
    assert_eq!(claims.exp - claims.iat, 86_400);
}

#[test]
fn test_token_with_no_school_binding() {
    let config = get_test_auth_config();

    let token = create_session_token(9, UserRole::SuperAdmin, None, &config).unwrap();
    let claims = validate_session_token(&token, &config).unwrap();

    assert_eq!(claims.sub, "9");
    assert_eq!(claims.role, UserRole::SuperAdmin);
    assert!(claims.school_id.is_none());
}

#[test]
fn test_validate_garbage_is_malformed() {
    let config = get_test_auth_config();

    let err = validate_session_token("not-a-token", &config).unwrap_err();
    assert_eq!(err, TokenError::Malformed);

    let err = validate_session_token("", &config).unwrap_err();
    assert_eq!(err, TokenError::Malformed);
}

#[test]
fn test_validate_wrong_secret_is_bad_signature() {
    let config = get_test_auth_config();
    let token = create_session_token(1, UserRole::Admin, Some(3), &config).unwrap();

    let wrong_config = AuthConfig {
        secret: "a_completely_different_secret_key".to_string(),
        ..get_test_auth_config()
    };

    let err = validate_session_token(&token, &wrong_config).unwrap_err();
    assert_eq!(err, TokenError::BadSignature);
}

#[test]
fn test_validate_tampered_signature_is_bad_signature() {
    let config = get_test_auth_config();
    let token = create_session_token(1, UserRole::Student, Some(2), &config).unwrap();

    let (head, sig) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = sig.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let tampered_sig: String = chars.into_iter().collect();
    let tampered = format!("{head}.{tampered_sig}");
    assert_ne!(tampered, token);

    let err = validate_session_token(&tampered, &config).unwrap_err();
    assert_eq!(err, TokenError::BadSignature);
}

#[test]
fn test_validate_tampered_payload_is_rejected() {
    let config = get_test_auth_config();
    let token = create_session_token(1, UserRole::Student, Some(2), &config).unwrap();

    // Splice the payload of a second token onto the first token's signature.
    let other = create_session_token(99, UserRole::SuperAdmin, None, &config).unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let spliced = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    let err = validate_session_token(&spliced, &config).unwrap_err();
    assert_eq!(err, TokenError::BadSignature);
}

#[test]
fn test_validate_expired_token() {
    // A negative lifetime places the expiry in the past at mint time.
    let config = AuthConfig {
        token_lifetime: -10,
        ..get_test_auth_config()
    };

    let token = create_session_token(1, UserRole::Teacher, Some(7), &config).unwrap();
    let err = validate_session_token(&token, &config).unwrap_err();
    assert_eq!(err, TokenError::Expired);
}
