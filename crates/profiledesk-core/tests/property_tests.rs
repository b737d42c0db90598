//! Property-based tests for form sanitisers and validation
//!
//! Uses proptest to check the input rules hold for arbitrary keystrokes.

use proptest::prelude::*;
use profiledesk_core::validation::{
    sanitize_phone, sanitize_pin, sanitize_pincode, validate_pin, validate_profile,
    ValidationError, PHONE_LEN, PINCODE_MAX_LEN, PIN_MAX_LEN, PIN_MIN_LEN,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Anything a user might paste into a numeric field
fn keystrokes_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-zA-Z +()\\-\u{0966}-\u{096F}]{0,40}").expect("valid regex")
}

/// Digit strings of any length up to 20
fn digits_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{0,20}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Sanitised values are ASCII digits within their caps
    #[test]
    fn sanitizers_keep_only_capped_ascii_digits(input in keystrokes_strategy()) {
        for (out, cap) in [
            (sanitize_phone(&input), PHONE_LEN),
            (sanitize_pin(&input), PIN_MAX_LEN),
            (sanitize_pincode(&input), PINCODE_MAX_LEN),
        ] {
            prop_assert!(out.len() <= cap);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit()));
        }
    }

    /// Sanitising twice changes nothing
    #[test]
    fn sanitizers_are_idempotent(input in keystrokes_strategy()) {
        let once = sanitize_phone(&input);
        prop_assert_eq!(sanitize_phone(&once), once.clone());
        let pin = sanitize_pin(&input);
        prop_assert_eq!(sanitize_pin(&pin), pin.clone());
    }

    /// A profile is accepted exactly when the phone has 10 digits
    #[test]
    fn phone_accepted_iff_ten_digits(phone in digits_strategy()) {
        let result = validate_profile("Asha", &phone);
        if phone.len() == PHONE_LEN {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(ValidationError::PhoneLength));
        }
    }

    /// Every sanitised PIN of at least 4 digits is valid
    #[test]
    fn sanitized_pins_validate_by_length(input in keystrokes_strategy()) {
        let pin = sanitize_pin(&input);
        prop_assert_eq!(validate_pin(&pin).is_ok(), pin.len() >= PIN_MIN_LEN);
    }
}
