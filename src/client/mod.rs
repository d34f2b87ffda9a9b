//! PetFriends API Client
//!
//! Translates typed method calls into authenticated HTTP requests against a
//! fixed base URL. Every call is a live network request; no state is kept
//! between calls.
//!
//! The client never interprets status codes: service-level 4xx/5xx come back
//! as ordinary [`ApiResponse`] values and pass/fail judgment belongs to the
//! caller. Only transport-level failures (unreachable host, timeout, photo
//! file unreadable) surface as [`ClientError`].
//!
//! # Example
//!
//! ```no_run
//! use petfriends_client::{ApiKey, PetFilter, PetFriends};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PetFriends::new("https://petfriends.skillfactory.ru");
//!
//! let auth = client.get_api_key("qa@example.com", "hunter2").await?;
//! assert_eq!(auth.status, 200);
//!
//! let key: ApiKey = auth.json()?;
//! let pets = client.get_list_of_pets(&key.key, PetFilter::All).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::model::PetFilter;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default timeout for service requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the issued auth key on all pet operations
const AUTH_KEY_HEADER: &str = "auth_key";

/// Client errors
///
/// Only the transport layer raises these. A 403 or 500 from the service is
/// not an error, it is a response.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read photo file: {0}")]
    PhotoRead(#[from] std::io::Error),

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// Status code plus parsed body of one service call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status exactly as the service returned it
    pub status: StatusCode,
    /// Parsed JSON body; [`Value::Null`] when the body was not JSON
    pub body: Value,
    raw: String,
}

impl ApiResponse {
    /// Deserialize the stored body into a typed model
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.body.clone()).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Whether the body is a JSON object containing the given top-level field.
    ///
    /// Negative scenarios use this to assert that a 403 body carries no
    /// `key` field.
    pub fn has_field(&self, name: &str) -> bool {
        self.body.get(name).is_some()
    }

    /// The body text as received, before JSON parsing
    pub fn raw_body(&self) -> &str {
        &self.raw
    }
}

/// PetFriends API client
///
/// Wraps a [`reqwest::Client`] pinned to one base URL. Holds no other state;
/// every call is a fresh request.
pub struct PetFriends {
    base_url: String,
    client: reqwest::Client,
}

impl PetFriends {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    /// Base URL this client targets, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request an auth key for a credential pair.
    ///
    /// Credentials travel as `email` and `password` headers. On success the
    /// body carries `key`; on rejection the service answers 403 with a body
    /// that has no `key` field.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .get(format!("{}/api/key", self.base_url))
            .header("email", email)
            .header("password", password);

        self.dispatch("GET /api/key", request).await
    }

    /// List pets visible under the given filter scope
    pub async fn get_list_of_pets(
        &self,
        auth_key: &str,
        filter: PetFilter,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .get(format!("{}/api/pets", self.base_url))
            .header(AUTH_KEY_HEADER, auth_key)
            .query(&[("filter", filter.query_value())]);

        self.dispatch("GET /api/pets", request).await
    }

    /// Create a pet with a photo.
    ///
    /// Multipart request combining the text fields with the photo bytes read
    /// from `photo_path`. Returns the created pet including its `id`.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse, ClientError> {
        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", photo_part(photo_path).await?);

        let request = self
            .client
            .post(format!("{}/api/pets", self.base_url))
            .header(AUTH_KEY_HEADER, auth_key)
            .multipart(form);

        self.dispatch("POST /api/pets", request).await
    }

    /// Create a pet without a photo.
    ///
    /// Distinct endpoint with a urlencoded body, not a degenerate case of
    /// [`PetFriends::add_new_pet`].
    pub async fn create_pet_simple(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .post(format!("{}/api/create_pet_simple", self.base_url))
            .header(AUTH_KEY_HEADER, auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.dispatch("POST /api/create_pet_simple", request).await
    }

    /// Update name, type and age of an existing pet
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .put(format!("{}/api/pets/{}", self.base_url, pet_id))
            .header(AUTH_KEY_HEADER, auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.dispatch("PUT /api/pets/{id}", request).await
    }

    /// Delete a pet by id
    pub async fn delete_pet(&self, auth_key: &str, pet_id: &str) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .delete(format!("{}/api/pets/{}", self.base_url, pet_id))
            .header(AUTH_KEY_HEADER, auth_key);

        self.dispatch("DELETE /api/pets/{id}", request).await
    }

    /// Attach a photo to an existing pet.
    ///
    /// Returns the updated pet; on success its `pet_photo` field is
    /// non-empty.
    pub async fn add_photo_to_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse, ClientError> {
        let form = Form::new().part("pet_photo", photo_part(photo_path).await?);

        let request = self
            .client
            .post(format!("{}/api/pets/set_photo/{}", self.base_url, pet_id))
            .header(AUTH_KEY_HEADER, auth_key)
            .multipart(form);

        self.dispatch("POST /api/pets/set_photo/{id}", request).await
    }

    /// Send a request and capture status plus body as plain values.
    ///
    /// A body that fails JSON parsing is kept as [`Value::Null`] with the
    /// raw text retained; callers only ever check error bodies for field
    /// presence.
    async fn dispatch(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let body = serde_json::from_str(&raw).unwrap_or(Value::Null);

        tracing::debug!(%status, operation, "petfriends response");

        Ok(ApiResponse { status, body, raw })
    }
}

/// Build the multipart file part for a photo upload
async fn photo_part(path: &Path) -> Result<Part, ClientError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pet_photo".to_string());

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(guess_image_mime(path))?;

    Ok(part)
}

/// Guess the image MIME type from the file extension
fn guess_image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
