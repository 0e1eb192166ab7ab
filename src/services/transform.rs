//! Record transformation
//!
//! Maps one row of the source export onto one row of the destination layout:
//! reformats the date, swaps the kind label for its marker, applies account
//! aliases and spreads the amount over the directional columns.

use chrono::NaiveDate;

use crate::error::{ConvertError, ConvertResult};
use crate::models::{account_alias, InputRecord, OutputRecord, TransactionKind};

/// Date layout used by the source export (e.g. "3/14/24")
pub const SOURCE_DATE_FORMAT: &str = "%m/%d/%y";

/// Date layout written to the destination (e.g. "14/03/2024")
pub const DESTINATION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Reformat a month/day/2-digit-year date as day/month/4-digit-year
///
/// The century of a two-digit year follows chrono's `%y` rule: low values
/// land in the 2000s, high values in the 1900s.
pub fn convert_date(date: &str) -> ConvertResult<String> {
    let parsed = NaiveDate::parse_from_str(date, SOURCE_DATE_FORMAT)
        .map_err(|_| ConvertError::invalid_date(date))?;
    Ok(parsed.format(DESTINATION_DATE_FORMAT).to_string())
}

/// Marker for a known kind label, or the label itself
pub fn convert_transaction_kind(label: &str) -> &str {
    match TransactionKind::parse(label) {
        Some(kind) => kind.marker(),
        None => label,
    }
}

/// Display alias for a known account, or the name itself
pub fn convert_account_name(name: &str) -> &str {
    account_alias(name).unwrap_or(name)
}

/// Convert one source row into one destination row
///
/// TAGS, CURRENCY, AMOUNT 2 and CURRENCY 2 have no destination column and
/// are dropped.
pub fn transform(input: &InputRecord) -> ConvertResult<OutputRecord> {
    let date = convert_date(&input.date)?;
    let kind = convert_transaction_kind(&input.kind);
    let from_account = convert_account_name(&input.from_account);
    let mut category = convert_account_name(&input.to_account_or_category).to_string();

    let mut income = String::new();
    let mut outcome = String::new();
    let mut income_account_name = String::new();
    let mut outcome_account_name = String::new();

    // Matching on the marker means a row already written as "+", "-" or
    // "Перевод" is treated like the corresponding kind.
    match TransactionKind::from_marker(kind) {
        Some(TransactionKind::Income) => {
            income_account_name = from_account.to_string();
            income = input.amount.clone();
        }
        Some(TransactionKind::Expense) => {
            outcome_account_name = from_account.to_string();
            outcome = input.amount.clone();
        }
        Some(TransactionKind::Transfer) => {
            income = input.amount.clone();
            outcome = input.amount.clone();
            outcome_account_name = from_account.to_string();
            income_account_name = std::mem::take(&mut category);
        }
        None => {
            log::warn!(
                "Unknown transaction type '{}' on {}: amount '{}' is not carried over",
                input.kind,
                input.date,
                input.amount
            );
        }
    }

    Ok(OutputRecord {
        date,
        kind: kind.to_string(),
        category,
        notes: String::new(),
        income,
        outcome,
        income_account_name,
        outcome_account_name,
    })
}
