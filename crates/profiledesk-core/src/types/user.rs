//! User Type - the signed-in account shown on the profile screen
//!
//! Holds personal details, the language preference, saved addresses and the
//! security flags. The PIN itself is never stored, only its salted hash.

use serde::{Deserialize, Serialize};

use super::{Address, AddressId, UserId};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Bengali,
}

impl Language {
    /// Every selectable language, in picker order
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Bengali,
    ];

    /// BCP 47 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Bengali => "bn",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Bengali => "বাংলা",
        }
    }

    /// English name, used in logs
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Bengali => "Bengali",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.native_name())
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Display name
    pub name: String,

    /// 10-digit mobile number, digits only
    pub phone: String,

    pub language: Language,

    /// Saved addresses in insertion order
    pub addresses: Vec<Address>,

    /// Whether the device lock gates app entry
    pub biometric_enabled: bool,

    /// Salted SHA-256 of the app PIN, hex encoded
    pub pin_hash: Option<String>,

    /// Unix timestamp when the account was created
    pub created_at: i64,

    /// Unix timestamp of last update
    pub updated_at: i64,
}

impl User {
    /// Create a new user with just a display name
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: UserId::new(),
            name: name.into(),
            phone: String::new(),
            language: Language::default(),
            addresses: Vec::new(),
            biometric_enabled: false,
            pin_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the user's timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }

    pub fn has_pin(&self) -> bool {
        self.pin_hash.is_some()
    }

    /// Find a saved address by id
    pub fn address(&self, id: &AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| &a.id == id)
    }

    pub(crate) fn address_mut(&mut self, id: &AddressId) -> Option<&mut Address> {
        self.addresses.iter_mut().find(|a| &a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddressDraft;

    #[test]
    fn test_new_user() {
        let user = User::new("Asha");
        assert_eq!(user.name, "Asha");
        assert_eq!(user.language, Language::English);
        assert!(user.addresses.is_empty());
        assert!(!user.biometric_enabled);
        assert!(!user.has_pin());
        assert!(user.created_at > 0);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_language_codes_are_unique() {
        let codes: std::collections::HashSet<_> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn test_address_lookup() {
        let mut user = User::new("Asha");
        let draft = AddressDraft {
            details: "12 MG Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            ..Default::default()
        };
        let address = draft.into_address(AddressId::new());
        let id = address.id.clone();
        user.addresses.push(address);

        assert_eq!(user.address(&id).map(|a| a.city.as_str()), Some("Pune"));
        assert!(user.address(&AddressId::new()).is_none());
    }
}
