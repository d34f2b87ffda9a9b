//! PetFriends API Client Library
//!
//! Thin async client for the PetFriends pet-management REST API, plus the
//! black-box scenario suite under `tests/` that exercises it.
//!
//! # Features
//!
//! - **Status-transparent**: every call returns the service's status code and
//!   parsed body as plain values; non-2xx is never an error
//! - **No local state**: every read re-fetches, nothing is cached
//! - **Photo upload**: multipart upload streaming bytes from a local file
//! - **Env/YAML config**: credentials and base URL from the environment or a
//!   YAML file with `${VAR}` expansion
//!
//! # Example
//!
//! ```no_run
//! use petfriends_client::{ApiKey, Config, PetFilter, PetFriends};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = PetFriends::from_config(&config);
//!
//!     let auth = client
//!         .get_api_key(&config.accounts.valid_email, &config.accounts.valid_password)
//!         .await?;
//!     let key: ApiKey = auth.json()?;
//!
//!     let pets = client.get_list_of_pets(&key.key, PetFilter::MyPets).await?;
//!     println!("status = {}", pets.status);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod model;

// Re-export commonly used types
pub use client::{ApiResponse, ClientError, PetFriends};
pub use config::Config;
pub use model::{ApiKey, Pet, PetFilter, PetList};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
