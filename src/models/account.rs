//! Account alias table
//!
//! A couple of source account names are shown under a different display
//! name in the destination. Everything else is kept as-is.

/// Source account name paired with its destination display name
pub const ACCOUNT_ALIASES: &[(&str, &str)] = &[("Cash", "Наличные"), ("Card", "Visa Classic")];

/// Look up the display name for a known source account
pub fn account_alias(name: &str) -> Option<&'static str> {
    ACCOUNT_ALIASES
        .iter()
        .find(|(source, _)| *source == name)
        .map(|(_, alias)| *alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_aliases() {
        assert_eq!(account_alias("Cash"), Some("Наличные"));
        assert_eq!(account_alias("Card"), Some("Visa Classic"));
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert_eq!(account_alias("Bank"), None);
        assert_eq!(account_alias("cash"), None);
        assert_eq!(account_alias(""), None);
    }
}
