//! Core data models for txconvert
//!
//! This module contains the row layouts on both sides of the conversion and
//! the fixed lookup tables used to translate between them.

pub mod account;
pub mod kind;
pub mod record;

pub use account::{account_alias, ACCOUNT_ALIASES};
pub use kind::TransactionKind;
pub use record::{InputRecord, OutputRecord, INPUT_COLUMNS, OUTPUT_COLUMNS};
