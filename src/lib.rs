//! txconvert - personal finance export converter
//!
//! This library converts transaction rows exported by one budgeting app into
//! the spreadsheet layout another one imports. Dates are reformatted, kind
//! labels become markers, known accounts get their display names and the
//! amount is spread over income/outcome columns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Input/output path resolution
//! - `error`: Custom error types
//! - `models`: Row layouts and the fixed lookup tables
//! - `services`: The row transformation
//! - `import`: CSV source reader
//! - `export`: CSV destination writer
//! - `cli`: The conversion command driving the above
//!
//! # Example
//!
//! ```rust,ignore
//! use txconvert::{cli::run_convert, config::ConverterPaths};
//!
//! let paths = ConverterPaths::new()?;
//! let summary = run_convert(&paths)?;
//! println!("{summary}");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod services;

pub use error::{ConvertError, ConvertResult};
