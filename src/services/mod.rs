//! Service layer for txconvert
//!
//! Holds the row conversion logic that sits between the CSV reader and
//! writer.

pub mod transform;

pub use transform::{convert_account_name, convert_date, convert_transaction_kind, transform};
