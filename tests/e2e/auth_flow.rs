//! Live Authentication Scenarios
//!
//! API key issuance against the real service: the registered account gets a
//! key, every rejected combination gets 403 and no key. These scenarios only
//! read remote state, so they run unserialized.

use super::common::ScenarioEnv;
use petfriends_client::ApiKey;

/// Scenario: the registered account is issued a non-empty auth key
#[tokio::test]
async fn valid_credentials_issue_api_key() {
    crate::skip_if_no_service!();

    let env = ScenarioEnv::new().expect("scenario environment");
    let response = env
        .client
        .get_api_key(
            &env.config.accounts.valid_email,
            &env.config.accounts.valid_password,
        )
        .await
        .expect("request failed");

    assert_eq!(response.status, 200);
    assert!(response.has_field("key"));

    let key: ApiKey = response.json().expect("key body");
    assert!(!key.key.is_empty());
}

/// Scenario: every rejected credential pair gets 403 and a body without
/// `key`. Explicit named cases instead of default-argument parameterization.
#[tokio::test]
async fn rejected_credentials_get_403_and_no_key() {
    crate::skip_if_no_service!();

    let env = ScenarioEnv::new().expect("scenario environment");
    let accounts = &env.config.accounts;

    let cases: Vec<(&str, String, String)> = vec![
        ("empty email and password", String::new(), String::new()),
        (
            "unknown email",
            accounts.invalid_email.clone(),
            accounts.valid_password.clone(),
        ),
        (
            "wrong password",
            accounts.valid_email.clone(),
            accounts.invalid_password.clone(),
        ),
        (
            "both wrong",
            accounts.invalid_email.clone(),
            accounts.invalid_password.clone(),
        ),
    ];

    for (label, email, password) in cases {
        let response = env
            .client
            .get_api_key(&email, &password)
            .await
            .expect("request failed");

        assert_eq!(response.status, 403, "case '{}': unexpected status", label);
        assert!(
            !response.has_field("key"),
            "case '{}': 403 body must not carry a key",
            label
        );
    }
}
