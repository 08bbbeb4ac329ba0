//! Bank-name resolution against a static list of known institutions.

use super::FieldExtractor;

/// Known institutions, in match-priority order. When more than one name
/// appears in a text, the earliest entry in this list wins; list order
/// decides, not match length or position.
pub const KNOWN_BANKS: [&str; 6] = ["BBVA", "Plin", "BCP", "Interbank", "Scotiabank", "BanBif"];

/// Case-insensitive substring matcher over [`KNOWN_BANKS`].
pub struct BankExtractor;

impl BankExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BankExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BankExtractor {
    type Output = &'static str;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let haystack = text.to_lowercase();
        KNOWN_BANKS
            .iter()
            .filter(|bank| haystack.contains(&bank.to_lowercase()))
            .copied()
            .collect()
    }
}

/// First known institution named in the text, in canonical casing.
pub fn resolve_bank(text: &str) -> Option<&'static str> {
    BankExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(resolve_bank("transferencia vía INTERBANK"), Some("Interbank"));
        assert_eq!(resolve_bank("enviado por plin"), Some("Plin"));
    }

    #[test]
    fn test_unknown_institution() {
        assert_eq!(resolve_bank("Banco de la Nación"), None);
        assert_eq!(resolve_bank(""), None);
    }

    #[test]
    fn test_list_order_breaks_ties() {
        // Scotiabank appears first in the text, but BBVA precedes it in the
        // known-institution list.
        assert_eq!(resolve_bank("de Scotiabank hacia BBVA"), Some("BBVA"));
    }

    #[test]
    fn test_all_matches_in_list_order() {
        let extractor = BankExtractor::new();
        assert_eq!(
            extractor.extract_all("bcp y banbif y scotiabank"),
            vec!["BCP", "Scotiabank", "BanBif"]
        );
    }
}
