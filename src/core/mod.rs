//! core
//!
//! Core domain types and operations for luhncheck.
//!
//! # Modules
//!
//! - [`luhn`] - The checksum engine
//! - [`types`] - Strong types: DigitString, CheckDigit, LuhnError
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The engine is stateless and does no I/O
//! - All computation is deterministic

pub mod config;
pub mod luhn;
pub mod types;
