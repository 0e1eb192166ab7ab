//! Import module for txconvert
//!
//! Reads the source export into `InputRecord`s.

pub mod csv;

pub use self::csv::SourceReader;
