//! CSV source reader
//!
//! Streams rows of the source export as `InputRecord`s. Columns are located
//! by header name, extra trailing fields are tolerated and a UTF-8
//! byte-order mark at the start of the file is skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::{ConvertError, ConvertResult};
use crate::models::{InputRecord, INPUT_COLUMNS};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header positions of the source columns
#[derive(Debug, Clone)]
struct ColumnIndex {
    positions: [Option<usize>; INPUT_COLUMNS.len()],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = [None; INPUT_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(INPUT_COLUMNS) {
            *slot = headers.iter().position(|header| header.trim() == name);
        }
        Self { positions }
    }

    fn value(&self, record: &StringRecord, column: usize, row: usize) -> ConvertResult<String> {
        let missing = || ConvertError::MissingField {
            field: INPUT_COLUMNS[column],
            row,
        };
        let position = self.positions[column].ok_or_else(missing)?;
        record
            .get(position)
            .map(str::to_string)
            .ok_or_else(missing)
    }

    fn build(&self, record: &StringRecord, row: usize) -> ConvertResult<InputRecord> {
        Ok(InputRecord {
            date: self.value(record, 0, row)?,
            kind: self.value(record, 1, row)?,
            tags: self.value(record, 2, row)?,
            from_account: self.value(record, 3, row)?,
            to_account_or_category: self.value(record, 4, row)?,
            amount: self.value(record, 5, row)?,
            currency: self.value(record, 6, row)?,
            amount_2: self.value(record, 7, row)?,
            currency_2: self.value(record, 8, row)?,
        })
    }
}

/// Lazy, single-pass reader over the rows of a source export
pub struct SourceReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    columns: Option<ColumnIndex>,
    header_error: Option<ConvertError>,
    row: usize,
}

impl SourceReader<BufReader<File>> {
    /// Open a source export on disk
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        let file = File::open(path).map_err(|e| {
            ConvertError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        log::debug!("Reading source export {}", path.display());
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: BufRead> SourceReader<R> {
    /// Wrap a buffered reader, skipping a leading byte-order mark
    pub fn from_reader(mut reader: R) -> ConvertResult<Self> {
        if reader.fill_buf()?.starts_with(UTF8_BOM) {
            reader.consume(UTF8_BOM.len());
        }

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let (columns, header_error) = match csv_reader.headers() {
            Ok(headers) => (Some(ColumnIndex::from_headers(headers)), None),
            Err(e) => (None, Some(ConvertError::from(e))),
        };

        Ok(Self {
            records: csv_reader.into_records(),
            columns,
            header_error,
            row: 0,
        })
    }
}

impl<R: Read> Iterator for SourceReader<R> {
    type Item = ConvertResult<InputRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.header_error.take() {
            return Some(Err(err));
        }
        let columns = self.columns.as_ref()?;

        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.row += 1;
        Some(columns.build(&record, self.row))
    }
}
