//! Live Scenarios for the PetFriends Service
//!
//! Scenarios follow one shape: obtain an auth key, perform one action,
//! assert on the returned status and payload fields.
//!
//! ## Fixture Lifecycle
//!
//! The remote pet list is shared mutable state under one account, so every
//! scenario that mutates it runs `#[serial]`, creates its own uniquely named
//! fixture pet, and deletes it at the end. Teardown is best effort; leftover
//! fixtures are swept by name prefix on the next run.
//!
//! ## Scenario Categories
//!
//! - `auth_flow`: API key issuance
//! - `pet_crud`: listing, creation, update, deletion
//! - `photo_flow`: photo attachment
//! - `boundary`: malformed input the service is known to accept

pub mod auth_flow;
pub mod boundary;
pub mod photo_flow;
