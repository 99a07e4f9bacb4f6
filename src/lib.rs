//! luhncheck - Luhn checksum validation and check digit generation
//!
//! Validates numeric identifiers such as credit card and IMEI numbers,
//! computes trailing check digits, and suggests corrections for numbers
//! that fail the check.
//!
//! # Architecture
//!
//! - [`core`] - The Luhn engine, strong types, and configuration
//! - [`cli`] - Command-line interface for the `luhn` binary
//! - [`ui`] - Output formatting and display
//!
//! # Example
//!
//! ```
//! use luhncheck::core::luhn;
//!
//! assert!(luhn::is_valid("4532015112830366").unwrap());
//! assert_eq!(luhn::check_digit("1234567").unwrap().to_string(), "4");
//!
//! let result = luhn::validate_and_suggest("12345670").unwrap();
//! assert!(!result.is_valid);
//! assert_eq!(result.suggested_digit.unwrap().to_string(), "4");
//! ```
//!
//! # Correctness Invariants
//!
//! 1. Every operation is a pure function of its input
//! 2. Appending a computed check digit always yields a valid number
//! 3. Malformed input is rejected, never coerced

pub mod cli;
pub mod core;
pub mod ui;
