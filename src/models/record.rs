//! Source and destination row models
//!
//! `InputRecord` mirrors one row of the source export, `OutputRecord` one
//! row of the converted spreadsheet. Both are plain values; conversion
//! builds a fresh `OutputRecord` rather than editing the input.

use serde::Serialize;

/// Column names of the source export, in file order
pub const INPUT_COLUMNS: [&str; 9] = [
    "DATE",
    "TYPE",
    "TAGS",
    "FROM ACCOUNT",
    "TO ACCOUNT / TO CATEGORY",
    "AMOUNT",
    "CURRENCY",
    "AMOUNT 2",
    "CURRENCY 2",
];

/// Column names of the converted file, in write order
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "DATE",
    "TYPE",
    "CATEGORY",
    "NOTES",
    "income",
    "outcome",
    "incomeAccountName",
    "outcomeAccountName",
];

/// One transaction as exported by the source application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    /// Date as month/day/2-digit-year (e.g. "3/14/24")
    pub date: String,
    /// Transaction kind label ("Expense", "Income", "Transfer")
    pub kind: String,
    pub tags: String,
    pub from_account: String,
    /// Destination account for transfers, category otherwise
    pub to_account_or_category: String,
    pub amount: String,
    pub currency: String,
    pub amount_2: String,
    pub currency_2: String,
}

/// One transaction in the destination layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Date as day/month/4-digit-year (e.g. "14/03/2024")
    #[serde(rename = "DATE")]
    pub date: String,

    /// Kind marker, or the raw source label if the kind is unknown
    #[serde(rename = "TYPE")]
    pub kind: String,

    #[serde(rename = "CATEGORY")]
    pub category: String,

    /// Always empty; the source has nothing that maps here
    #[serde(rename = "NOTES")]
    pub notes: String,

    pub income: String,

    pub outcome: String,

    #[serde(rename = "incomeAccountName")]
    pub income_account_name: String,

    #[serde(rename = "outcomeAccountName")]
    pub outcome_account_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_columns_match_serialized_header() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(OutputRecord::default()).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(header, OUTPUT_COLUMNS.join(","));
    }

    #[test]
    fn test_input_columns_cover_source_export() {
        assert_eq!(INPUT_COLUMNS[0], "DATE");
        assert!(INPUT_COLUMNS.contains(&"TO ACCOUNT / TO CATEGORY"));
        assert!(!INPUT_COLUMNS.contains(&""));
    }
}
