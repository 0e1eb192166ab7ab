//! Configuration module for txconvert
//!
//! Only file locations are configurable; the label and column mappings are
//! fixed tables in `models`.

pub mod paths;

pub use paths::ConverterPaths;
