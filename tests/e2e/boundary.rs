//! Live Boundary Scenarios
//!
//! Malformed pet data the service is known to accept. These document
//! observed behavior of the deployment under test, they do not express what
//! the service *should* do, and the client enforces none of it.

use super::common::ScenarioEnv;
use petfriends_client::Pet;
use serial_test::serial;

/// Scenario: the service accepts and echoes nonsensical field values with
/// status 200. Each input combination is an explicit named case.
#[tokio::test]
#[serial]
async fn malformed_input_is_accepted_and_echoed() {
    crate::skip_if_no_service!();

    let env = ScenarioEnv::new().expect("scenario environment");
    let key = env.obtain_key().await.expect("auth key");

    let cases: &[(&str, &str, &str, &str)] = &[
        ("empty name, type and age", "", "", ""),
        ("numeric name", "12341234", "енот", "3"),
        ("numeric animal type", "Цифрокот", "123123", "5"),
        ("out-of-range age", "Тествозр", "кот", "7878"),
    ];

    for (label, name, animal_type, age) in cases {
        let response = env
            .client
            .create_pet_simple(&key, name, animal_type, age)
            .await
            .expect("request failed");

        assert_eq!(response.status, 200, "case '{}': unexpected status", label);

        let pet: Pet = response.json().unwrap_or_else(|e| {
            panic!("case '{}': pet body did not parse: {}", label, e);
        });
        assert_eq!(pet.name, *name, "case '{}': name not echoed", label);
        assert_eq!(pet.age, *age, "case '{}': age not echoed", label);

        env.teardown_pet(&key, &pet.id).await;
    }
}
