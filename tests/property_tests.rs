//! Property-based tests for the Luhn engine.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated digit strings.

use proptest::prelude::*;

use luhncheck::core::luhn::{self, ValidationResult};
use luhncheck::core::types::{DigitString, LuhnError};

/// Strategy for generating non-empty digit strings, including ones far
/// beyond the range of any native integer.
fn digit_string() -> impl Strategy<Value = String> {
    "[0-9]{1,64}"
}

/// Strategy for generating strings with at least one non-digit character.
fn non_digit_string() -> impl Strategy<Value = String> {
    ("[0-9]{0,10}", "[^0-9]", "[0-9]{0,10}").prop_map(|(a, bad, b)| format!("{a}{bad}{b}"))
}

proptest! {
    /// Appending the computed check digit always yields a valid number.
    #[test]
    fn append_then_validate(value in digit_string()) {
        let full = luhn::append_check_digit(&value).unwrap();
        prop_assert!(luhn::is_valid(&full).unwrap());
    }

    /// Stripping the appended check digit restores the payload exactly.
    #[test]
    fn append_then_strip(value in digit_string()) {
        let full = luhn::append_check_digit(&value).unwrap();
        prop_assert_eq!(luhn::strip_check_digit(&full).unwrap(), value);
    }

    /// Exactly one trailing digit makes a payload valid.
    #[test]
    fn check_digit_is_unique(value in digit_string()) {
        let expected = luhn::check_digit(&value).unwrap().as_char();
        for d in '0'..='9' {
            let candidate = format!("{value}{d}");
            prop_assert_eq!(luhn::is_valid(&candidate).unwrap(), d == expected);
        }
    }

    /// The checksum pass is deterministic and returns its input unchanged.
    #[test]
    fn checksum_pass_is_pure(value in digit_string()) {
        let first = luhn::checksum_pass(&value).unwrap();
        let second = luhn::checksum_pass(&value).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.0, value.as_str());
    }

    /// Leading zeros never change the checksum.
    #[test]
    fn leading_zeros_do_not_change_checksum(value in digit_string(), zeros in 1usize..8) {
        let padded = format!("{}{}", "0".repeat(zeros), value);
        prop_assert_eq!(
            luhn::checksum_pass(&padded).unwrap().1,
            luhn::checksum_pass(&value).unwrap().1
        );
    }

    /// Changing any single digit of a valid number invalidates it.
    #[test]
    fn single_digit_error_detected(
        value in digit_string(),
        pos in any::<prop::sample::Index>(),
        delta in 1u8..10,
    ) {
        let full = luhn::append_check_digit(&value).unwrap();
        let mut bytes = full.clone().into_bytes();
        let i = pos.index(bytes.len());
        bytes[i] = b'0' + (bytes[i] - b'0' + delta) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(!luhn::is_valid(&corrupted).unwrap());
    }

    /// A wrong check digit is always corrected by the suggestion.
    #[test]
    fn suggestion_matches_check_digit(value in digit_string(), delta in 1u8..10) {
        let digit = luhn::check_digit(&value).unwrap();
        let wrong = (digit.value() + delta) % 10;
        let candidate = format!("{value}{wrong}");

        let result = luhn::validate_and_suggest(&candidate).unwrap();
        prop_assert_eq!(result, ValidationResult::invalid(digit));
    }

    /// Valid numbers never carry a suggestion.
    #[test]
    fn valid_numbers_have_no_suggestion(value in digit_string()) {
        let full = luhn::append_check_digit(&value).unwrap();
        prop_assert_eq!(luhn::validate_and_suggest(&full).unwrap(), ValidationResult::valid());
    }

    /// Non-digit input is rejected by every operation.
    #[test]
    fn non_digits_rejected(value in non_digit_string()) {
        let is_non_digit = |e: LuhnError| matches!(e, LuhnError::NonDigit { .. });
        prop_assert!(luhn::is_valid(&value).map_err(is_non_digit).unwrap_err());
        prop_assert!(luhn::check_digit(&value).map_err(is_non_digit).unwrap_err());
        prop_assert!(luhn::append_check_digit(&value).map_err(is_non_digit).unwrap_err());
        prop_assert!(DigitString::new(value).is_err());
    }

    /// DigitString methods agree with the free functions.
    #[test]
    fn digit_string_matches_functions(value in digit_string()) {
        let digits = DigitString::new(value.clone()).unwrap();
        prop_assert_eq!(digits.checksum(), luhn::checksum_pass(&value).unwrap().1);
        prop_assert_eq!(digits.is_valid(), luhn::is_valid(&value).unwrap());
        prop_assert_eq!(digits.check_digit(), luhn::check_digit(&value).unwrap());
        prop_assert_eq!(
            digits.with_check_digit().into_inner(),
            luhn::append_check_digit(&value).unwrap()
        );
    }
}
