//! CSV destination writer
//!
//! Writes converted rows in the fixed destination column order. The header
//! goes out as soon as the writer is created so an empty export still yields
//! a valid file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{ConvertError, ConvertResult};
use crate::models::{OutputRecord, OUTPUT_COLUMNS};

/// Sequential writer for converted rows
pub struct DestinationWriter<W: Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl DestinationWriter<File> {
    /// Create (or truncate) the destination file and write its header
    pub fn create(path: &Path) -> ConvertResult<Self> {
        let file = File::create(path).map_err(|e| {
            ConvertError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?;
        log::debug!("Writing converted rows to {}", path.display());
        Self::from_writer(file)
    }
}

impl<W: Write> DestinationWriter<W> {
    /// Wrap any writer and emit the header row
    pub fn from_writer(inner: W) -> ConvertResult<Self> {
        // Header is written by hand; serde would only emit it with the first row.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(OUTPUT_COLUMNS)?;

        Ok(Self { writer, written: 0 })
    }

    /// Append one converted row
    pub fn write(&mut self, record: &OutputRecord) -> ConvertResult<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    /// Number of data rows written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered rows and return how many were written
    pub fn finish(mut self) -> ConvertResult<usize> {
        self.writer.flush()?;
        Ok(self.written)
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> ConvertResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ConvertError::Io(e.error().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn expense() -> OutputRecord {
        OutputRecord {
            date: "14/03/2024".into(),
            kind: "-".into(),
            category: "Groceries".into(),
            notes: String::new(),
            income: String::new(),
            outcome: "42.50".into(),
            income_account_name: String::new(),
            outcome_account_name: "Visa Classic".into(),
        }
    }

    fn written_text(records: &[OutputRecord]) -> String {
        let mut writer = DestinationWriter::from_writer(Vec::new()).unwrap();
        for record in records {
            writer.write(record).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_without_records() {
        let text = written_text(&[]);
        assert_eq!(
            text,
            "DATE,TYPE,CATEGORY,NOTES,income,outcome,incomeAccountName,outcomeAccountName\r\n"
        );
    }

    #[test]
    fn test_rows_in_column_order() {
        let text = written_text(&[expense()]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "14/03/2024,-,Groceries,,,42.50,,Visa Classic");
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let mut record = expense();
        record.category = "Food, drinks".into();
        let text = written_text(&[record]);

        assert!(text.contains(",\"Food, drinks\","));
        assert!(!text.contains("\"14/03/2024\""));
    }

    #[test]
    fn test_counts_rows() {
        let mut writer = DestinationWriter::from_writer(Vec::new()).unwrap();
        assert_eq!(writer.written(), 0);
        writer.write(&expense()).unwrap();
        writer.write(&expense()).unwrap();
        assert_eq!(writer.finish().unwrap(), 2);
    }

    #[test]
    fn test_create_writes_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("result.csv");

        let mut writer = DestinationWriter::create(&path).unwrap();
        let mut record = expense();
        record.kind = "Перевод".into();
        record.income_account_name = "Наличные".into();
        writer.write(&record).unwrap();
        assert_eq!(writer.finish().unwrap(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("DATE,TYPE,CATEGORY"));
        assert!(content.contains("Перевод"));
        assert!(content.contains("Наличные"));
    }
}
