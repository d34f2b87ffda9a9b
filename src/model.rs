//! Wire types for PetFriends API payloads
//!
//! These are read-only views of what the service returns. The service owns
//! the data; nothing here is validated locally. `age` in particular stays a
//! string, the service accepts and echoes arbitrary text for it.

use serde::{Deserialize, Serialize};

/// Auth key issued by `GET /api/key`
///
/// Opaque bearer token. Passed verbatim in the `auth_key` header on all pet
/// operations; no expiry is tracked locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

/// A pet as the service represents it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    /// Free text on the wire, not a number
    pub age: String,
    /// Absent or empty string when no photo is attached
    #[serde(default)]
    pub pet_photo: Option<String>,
}

impl Pet {
    /// True when the service reports an attached photo
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Response body of `GET /api/pets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetList {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Whether any pet in the listing has the given id
    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|p| p.id == id)
    }

    /// First pet in the listing, if any
    pub fn first(&self) -> Option<&Pet> {
        self.pets.first()
    }
}

/// Visibility scope for pet listings
///
/// Forwarded opaquely as the `filter` query parameter; the service defines
/// the recognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    /// Every pet known to the service (`filter=`)
    #[default]
    All,
    /// Only pets owned by the authenticated account (`filter=my_pets`)
    MyPets,
}

impl PetFilter {
    /// Wire value sent as the `filter` query parameter
    pub fn query_value(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}
