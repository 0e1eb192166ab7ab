//! Transaction kind model
//!
//! The source export tags every row as an expense, an income or a transfer.
//! The destination uses a short marker for each of them instead.

use std::fmt;

/// Kind of a financial transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money leaving an account
    Expense,
    /// Money arriving in an account
    Income,
    /// Money moved between two accounts
    Transfer,
}

impl TransactionKind {
    pub const ALL: [Self; 3] = [Self::Expense, Self::Income, Self::Transfer];

    /// Parse the label used by the source export
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Expense" => Some(Self::Expense),
            "Income" => Some(Self::Income),
            "Transfer" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Recognize a destination marker
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == marker)
    }

    /// Source export label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
            Self::Transfer => "Transfer",
        }
    }

    /// Destination marker written to the TYPE column
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Expense => "-",
            Self::Income => "+",
            Self::Transfer => "Перевод",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(TransactionKind::parse("Expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("Income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("Transfer"), Some(TransactionKind::Transfer));
        assert_eq!(TransactionKind::parse("expense"), None);
        assert_eq!(TransactionKind::parse("Refund"), None);
    }

    #[test]
    fn test_markers() {
        assert_eq!(TransactionKind::Expense.marker(), "-");
        assert_eq!(TransactionKind::Income.marker(), "+");
        assert_eq!(TransactionKind::Transfer.marker(), "Перевод");
    }

    #[test]
    fn test_from_marker() {
        for kind in TransactionKind::ALL {
            assert_eq!(TransactionKind::from_marker(kind.marker()), Some(kind));
        }
        assert_eq!(TransactionKind::from_marker("Income"), None);
    }
}
