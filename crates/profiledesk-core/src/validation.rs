//! Input sanitisers and validation rules for the profile forms
//!
//! Sanitisers run on every keystroke and only ever shrink the input.
//! Validators run on submit and produce the message shown to the user.

use thiserror::Error;

use crate::types::AddressDraft;

pub const PHONE_LEN: usize = 10;
pub const PIN_MIN_LEN: usize = 4;
pub const PIN_MAX_LEN: usize = 10;
pub const PINCODE_MAX_LEN: usize = 6;

/// A form value that blocks a save
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Phone number must be exactly 10 digits")]
    PhoneLength,

    #[error("PIN must be at least 4 digits")]
    PinTooShort,

    #[error("PIN can be at most 10 digits")]
    PinTooLong,

    #[error("PIN must contain digits only")]
    PinNotNumeric,

    #[error("Please fill in all address fields")]
    MissingAddressField,

    #[error("Pincode must contain digits only")]
    PincodeNotNumeric,
}

fn digits_capped(input: &str, max: usize) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Keep at most 10 digits of a phone number
pub fn sanitize_phone(input: &str) -> String {
    digits_capped(input, PHONE_LEN)
}

/// Keep at most 10 digits of a PIN
pub fn sanitize_pin(input: &str) -> String {
    digits_capped(input, PIN_MAX_LEN)
}

/// Keep at most 6 digits of a pincode
pub fn sanitize_pincode(input: &str) -> String {
    digits_capped(input, PINCODE_MAX_LEN)
}

pub fn validate_profile(name: &str, phone: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if phone.len() != PHONE_LEN || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PhoneLength);
    }
    Ok(())
}

pub fn validate_pin(pin: &str) -> Result<(), ValidationError> {
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PinNotNumeric);
    }
    if pin.len() < PIN_MIN_LEN {
        return Err(ValidationError::PinTooShort);
    }
    if pin.len() > PIN_MAX_LEN {
        return Err(ValidationError::PinTooLong);
    }
    Ok(())
}

/// Details, city, state and pincode are all required
pub fn validate_address(draft: &AddressDraft) -> Result<(), ValidationError> {
    let required = [&draft.details, &draft.city, &draft.state, &draft.pincode];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::MissingAddressField);
    }
    if !draft.pincode.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PincodeNotNumeric);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_phone_strips_formatting() {
        assert_eq!(sanitize_phone("+91 98765-43210"), "9198765432");
        assert_eq!(sanitize_phone("98765 43210"), "9876543210");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn test_sanitize_pin_caps_length() {
        assert_eq!(sanitize_pin("123456789012"), "1234567890");
        assert_eq!(sanitize_pin("12a4"), "124");
    }

    #[test]
    fn test_validate_profile() {
        assert_eq!(validate_profile("Asha", "9876543210"), Ok(()));
        assert_eq!(validate_profile("   ", "9876543210"), Err(ValidationError::EmptyName));
        assert_eq!(validate_profile("Asha", "987654321"), Err(ValidationError::PhoneLength));
        assert_eq!(validate_profile("Asha", "98765432101"), Err(ValidationError::PhoneLength));
        assert_eq!(validate_profile("Asha", "98765x3210"), Err(ValidationError::PhoneLength));
    }

    #[test]
    fn test_validate_pin_bounds() {
        assert_eq!(validate_pin("123"), Err(ValidationError::PinTooShort));
        assert_eq!(validate_pin("1234"), Ok(()));
        assert_eq!(validate_pin("1234567890"), Ok(()));
        assert_eq!(validate_pin("12345678901"), Err(ValidationError::PinTooLong));
        assert_eq!(validate_pin("12e4"), Err(ValidationError::PinNotNumeric));
    }

    #[test]
    fn test_validate_address_requires_all_fields() {
        let full = AddressDraft {
            details: "12 MG Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            ..Default::default()
        };
        assert_eq!(validate_address(&full), Ok(()));

        let mut missing_state = full.clone();
        missing_state.state = "  ".into();
        assert_eq!(
            validate_address(&missing_state),
            Err(ValidationError::MissingAddressField)
        );

        let mut bad_pin = full;
        bad_pin.pincode = "41 001".into();
        assert_eq!(validate_address(&bad_pin), Err(ValidationError::PincodeNotNumeric));
    }
}
