//! core::types
//!
//! Strong types for Luhn-checked identifiers.
//!
//! # Types
//!
//! - [`DigitString`] - Validated, non-empty string of ASCII decimal digits
//! - [`CheckDigit`] - A single Luhn check digit (0-9)
//! - [`LuhnError`] - Input errors shared by every engine operation
//!
//! # Validation
//!
//! A `DigitString` is validated once at construction. Values are kept as
//! text, never parsed into an integer, so leading zeros and lengths beyond
//! the native integer range survive unchanged.
//!
//! # Examples
//!
//! ```
//! use luhncheck::core::types::{CheckDigit, DigitString};
//!
//! let number = DigitString::new("7992739871").unwrap();
//! assert_eq!(number.check_digit(), CheckDigit::new(3).unwrap());
//!
//! // Invalid constructions fail at creation time
//! assert!(DigitString::new("").is_err());
//! assert!(DigitString::new("12a4").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::luhn::{self, ValidationResult};

/// Errors from Luhn input validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LuhnError {
    #[error("number cannot be empty")]
    Empty,

    #[error("number must have at least 2 digits (got {len})")]
    TooShort { len: usize },

    #[error("invalid character {character:?} at position {position}: only digits 0-9 are allowed")]
    NonDigit { position: usize, character: char },

    #[error("check digit must be between 0 and 9 (got {0})")]
    CheckDigitOutOfRange(u8),

    #[error("check digit must be a single digit (got {0:?})")]
    NotSingleDigit(String),
}

/// Reject empty input and any character outside `'0'..='9'`.
pub(crate) fn ensure_digits(value: &str) -> Result<(), LuhnError> {
    if value.is_empty() {
        return Err(LuhnError::Empty);
    }

    match value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(LuhnError::NonDigit {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// A validated, non-empty string of ASCII decimal digits.
///
/// # Example
///
/// ```
/// use luhncheck::core::types::DigitString;
///
/// let number = DigitString::new("0042").unwrap();
/// assert_eq!(number.as_str(), "0042");
/// assert_eq!(number.len(), 4);
///
/// assert!(DigitString::new("4532 0151").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    /// Create a new validated digit string.
    ///
    /// # Errors
    ///
    /// Returns `LuhnError::Empty` for an empty string and
    /// `LuhnError::NonDigit` for the first non-digit character.
    pub fn new(value: impl Into<String>) -> Result<Self, LuhnError> {
        let value = value.into();
        ensure_digits(&value)?;
        Ok(Self(value))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw Luhn checksum of all digits.
    pub fn checksum(&self) -> u64 {
        luhn::checksum_of(self.as_str())
    }

    /// Whether the digits, read as payload plus check digit, pass the Luhn check.
    pub fn is_valid(&self) -> bool {
        self.checksum() % 10 == 0
    }

    /// Check digit that would make this payload valid.
    pub fn check_digit(&self) -> CheckDigit {
        luhn::check_digit_of(self.as_str())
    }

    /// Return a new digit string with the check digit appended.
    pub fn with_check_digit(&self) -> DigitString {
        let mut value = self.0.clone();
        value.push(self.check_digit().as_char());
        DigitString(value)
    }

    /// Return the payload with the trailing check digit removed.
    ///
    /// # Errors
    ///
    /// Returns `LuhnError::TooShort` when fewer than 2 digits remain.
    pub fn without_check_digit(&self) -> Result<DigitString, LuhnError> {
        luhn::strip_check_digit(self.as_str()).map(DigitString)
    }

    /// Validate and, if invalid, suggest the correct trailing digit.
    ///
    /// # Errors
    ///
    /// Returns `LuhnError::TooShort` for an invalid single-digit value.
    pub fn validate_and_suggest(&self) -> Result<ValidationResult, LuhnError> {
        luhn::validate_and_suggest(self.as_str())
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DigitString {
    type Error = LuhnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DigitString {
    type Error = LuhnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single Luhn check digit.
///
/// Serializes as a one-character string (`"4"`), which is how check digits
/// are appended to and compared against identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Create a check digit from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns `LuhnError::CheckDigitOutOfRange` for values above 9.
    pub fn new(value: u8) -> Result<Self, LuhnError> {
        if value > 9 {
            return Err(LuhnError::CheckDigitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Derive the check digit from a checksum computed with a `'0'` placeholder.
    pub(crate) fn from_checksum(checksum: u64) -> Self {
        // Always 0..=9.
        Self(((10 - checksum % 10) % 10) as u8)
    }

    /// Numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as an ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<String> for CheckDigit {
    type Error = LuhnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LuhnError::Empty),
            (Some(c), None) => match c.to_digit(10) {
                Some(d) => Ok(Self(d as u8)),
                _ => Err(LuhnError::NonDigit {
                    position: 0,
                    character: c,
                }),
            },
            (Some(_), Some(_)) => Err(LuhnError::NotSingleDigit(value.clone())),
        }
    }
}

impl From<CheckDigit> for String {
    fn from(value: CheckDigit) -> Self {
        value.to_string()
    }
}

impl From<CheckDigit> for u8 {
    fn from(value: CheckDigit) -> Self {
        value.0
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
