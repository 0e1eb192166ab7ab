//! Export module for txconvert
//!
//! Writes converted `OutputRecord`s in the destination spreadsheet layout.

pub mod csv;

pub use self::csv::DestinationWriter;
