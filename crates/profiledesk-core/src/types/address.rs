//! Saved addresses and the draft used to create or edit them

use serde::{Deserialize, Serialize};

use super::AddressId;
use crate::validation::{self, ValidationError};

/// Tag shown on an address card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AddressLabel {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressLabel {
    pub const ALL: [AddressLabel; 3] = [AddressLabel::Home, AddressLabel::Work, AddressLabel::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressLabel::Home => "Home",
            AddressLabel::Work => "Work",
            AddressLabel::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AddressLabel::Home => "\u{1F3E0}",
            AddressLabel::Work => "\u{1F4BC}",
            AddressLabel::Other => "\u{1F4CD}",
        }
    }
}

impl std::fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved delivery address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub label: AddressLabel,
    /// House, street, landmark
    pub details: String,
    pub city: String,
    pub state: String,
    /// Postal code, up to 6 digits
    pub pincode: String,
}

impl Address {
    /// Single-line summary for cards
    pub fn summary(&self) -> String {
        format!("{}, {}, {} - {}", self.details, self.city, self.state, self.pincode)
    }
}

/// Text fields of the address form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Details,
    City,
    State,
    Pincode,
}

impl AddressField {
    /// Form order
    pub const ALL: [AddressField; 4] = [
        AddressField::Details,
        AddressField::City,
        AddressField::State,
        AddressField::Pincode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddressField::Details => "Address details",
            AddressField::City => "City",
            AddressField::State => "State",
            AddressField::Pincode => "Pincode",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AddressField::Details => "House no., street, landmark",
            AddressField::City => "City",
            AddressField::State => "State",
            AddressField::Pincode => "6-digit pincode",
        }
    }
}

/// Editable copy of an address, blank when adding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressDraft {
    pub label: AddressLabel,
    pub details: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl AddressDraft {
    /// Pre-fill from an existing address
    pub fn from_address(address: &Address) -> Self {
        Self {
            label: address.label,
            details: address.details.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            pincode: address.pincode.clone(),
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Details => &self.details,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Pincode => &self.pincode,
        }
    }

    /// Set a field; pincode input is reduced to at most 6 digits
    pub fn set(&mut self, field: AddressField, value: &str) {
        match field {
            AddressField::Details => self.details = value.to_string(),
            AddressField::City => self.city = value.to_string(),
            AddressField::State => self.state = value.to_string(),
            AddressField::Pincode => self.pincode = validation::sanitize_pincode(value),
        }
    }

    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_address(self)
    }

    /// Build an address with trimmed field values
    pub fn into_address(self, id: AddressId) -> Address {
        Address {
            id,
            label: self.label,
            details: self.details.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
        }
    }

    /// Overwrite an existing address, keeping its id
    pub fn apply_to(self, address: &mut Address) {
        let id = address.id.clone();
        *address = self.into_address(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AddressDraft {
        AddressDraft {
            label: AddressLabel::Work,
            details: "  4th floor, Tech Park ".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            pincode: "560103".into(),
        }
    }

    #[test]
    fn test_into_address_trims() {
        let address = sample().into_address(AddressId::new());
        assert_eq!(address.details, "4th floor, Tech Park");
        assert_eq!(address.label, AddressLabel::Work);
    }

    #[test]
    fn test_from_address_prefills_every_field() {
        let address = sample().into_address(AddressId::new());
        let draft = AddressDraft::from_address(&address);
        for field in AddressField::ALL {
            assert_eq!(draft.get(field), match field {
                AddressField::Details => address.details.as_str(),
                AddressField::City => address.city.as_str(),
                AddressField::State => address.state.as_str(),
                AddressField::Pincode => address.pincode.as_str(),
            });
        }
    }

    #[test]
    fn test_set_pincode_is_sanitized() {
        let mut draft = AddressDraft::default();
        draft.set(AddressField::Pincode, "56a01 0399");
        assert_eq!(draft.pincode, "560103");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut address = sample().into_address(AddressId::new());
        let id = address.id.clone();
        let mut draft = AddressDraft::from_address(&address);
        draft.city = "Mysuru".into();
        draft.apply_to(&mut address);
        assert_eq!(address.id, id);
        assert_eq!(address.city, "Mysuru");
    }

    #[test]
    fn test_default_label_is_home() {
        assert_eq!(AddressDraft::default().label, AddressLabel::Home);
    }

    #[test]
    fn test_summary() {
        let address = sample().into_address(AddressId::new());
        assert_eq!(
            address.summary(),
            "4th floor, Tech Park, Bengaluru, Karnataka - 560103"
        );
    }
}
