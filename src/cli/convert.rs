//! CLI command handler for the conversion run
//!
//! Reads every row of `original`, converts it and writes it to
//! `result.csv`. The first failing row aborts the run.

use std::fmt;

use crate::config::ConverterPaths;
use crate::error::ConvertResult;
use crate::export::DestinationWriter;
use crate::import::SourceReader;
use crate::services::transform;

/// Outcome of a completed conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of data rows written (header excluded)
    pub records_written: usize,
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} records successfully dumped", self.records_written)
    }
}

/// Convert the source export into the destination file
pub fn run_convert(paths: &ConverterPaths) -> ConvertResult<ConvertSummary> {
    paths.check_input_exists()?;

    let reader = SourceReader::from_path(&paths.input_file())?;
    let mut writer = DestinationWriter::create(&paths.output_file())?;

    for record in reader {
        let output = transform(&record?)?;
        log::trace!("Row {}: {:?}", writer.written() + 1, output);
        writer.write(&output)?;
    }

    let records_written = writer.finish()?;
    log::debug!("Converted {} records", records_written);

    Ok(ConvertSummary { records_written })
}
