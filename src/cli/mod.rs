//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the reader, the
//! transformer and the writer.

pub mod convert;

pub use convert::{run_convert, ConvertSummary};
