//! Live Photo Attachment Scenario
//!
//! Attaching a photo to a pet created without one must come back with a
//! non-empty `pet_photo` field.

use super::common::{self, ScenarioEnv};
use petfriends_client::Pet;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn attach_photo_to_bare_pet() {
    crate::skip_if_no_service!();

    let env = ScenarioEnv::new().expect("scenario environment");
    let key = env.obtain_key().await.expect("auth key");

    // create_pet_simple never attaches a photo, so this pet starts bare
    let pet = env
        .create_fixture_pet(&key, "Котофото")
        .await
        .expect("fixture pet");
    assert!(!pet.has_photo());

    let dir = tempfile::tempdir().expect("temp dir");
    let photo_path = common::write_photo(dir.path(), "cat1.jpg");

    let response = env
        .client
        .add_photo_to_pet(&key, &pet.id, &photo_path)
        .await
        .expect("request failed");

    assert_eq!(response.status, 200);

    let updated: Pet = response.json().expect("pet body");
    assert!(
        updated.has_photo(),
        "pet_photo must be non-empty after attachment"
    );

    env.teardown_pet(&key, &pet.id).await;
}
