//! Core types for Profile Desk

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod address;
pub mod user;

pub use address::{Address, AddressDraft, AddressField, AddressLabel};
pub use user::{Language, User};

/// Unique identifier for a saved address
///
/// Uses ULID so addresses sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub Ulid);

impl AddressId {
    /// Create a new AddressId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Convert to string representation
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "addr_{}", self.0)
    }
}

/// Unique identifier for a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Ulid);

impl UserId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}
