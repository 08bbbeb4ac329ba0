//! Account-number extraction and origin/destination assignment.
//!
//! Receipts show accounts either as a masked marker (a bullet followed by
//! the last four digits, e.g. `•4521`) or as an explicit `Cuenta <digits>` /
//! `Cta. <digits>` label.

use lazy_static::lazy_static;
use regex::Regex;

use super::{ExtractionMatch, FieldExtractor};

lazy_static! {
    // Labels appear verbatim on receipts, so matching is case-sensitive.
    static ref ACCOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"•(\d{4})").unwrap(),
        Regex::new(r"Cuenta\s*(\d+)").unwrap(),
        Regex::new(r"Cta\.\s*(\d+)").unwrap(),
    ];
}

/// Account-number extractor.
///
/// Candidates are ordered by position of first occurrence in the text and
/// deduplicated by captured value: two identical substrings count once, at
/// the position where the value first appears.
pub struct AccountExtractor;

impl AccountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AccountExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut matches = Vec::new();

        for pattern in ACCOUNT_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                let full_match = caps.get(0).unwrap();
                matches.push(ExtractionMatch::new(
                    caps[1].to_string(),
                    full_match.start(),
                    full_match.as_str(),
                ));
            }
        }

        matches.sort_by_key(|m| m.start);

        let mut seen: Vec<String> = Vec::new();
        matches.retain(|m| {
            if seen.contains(&m.value) {
                false
            } else {
                seen.push(m.value.clone());
                true
            }
        });

        matches
    }
}

/// Origin/destination slots produced by the ordinal heuristic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountAssignment {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// Assign account candidates to origin and destination by reading order.
///
/// Ordinal heuristic: receipts list the source account before the
/// destination, so the first distinct candidate becomes the origin and the
/// second the destination; any further candidates are discarded. The rule is
/// positional, not semantic; unusual layouts can misclassify.
pub fn resolve_accounts(text: &str) -> AccountAssignment {
    let mut candidates = AccountExtractor::new().extract_all(text).into_iter();

    AccountAssignment {
        origin: candidates.next().map(|m| m.value),
        destination: candidates.next().map(|m| m.value),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_two_masked_markers_in_reading_order() {
        let assignment = resolve_accounts("De mi cuenta •1111\nA la cuenta •2222");
        assert_eq!(assignment.origin.as_deref(), Some("1111"));
        assert_eq!(assignment.destination.as_deref(), Some("2222"));
    }

    #[test]
    fn test_single_marker_is_origin_only() {
        let assignment = resolve_accounts("Cargo a tu cuenta •4521");
        assert_eq!(assignment.origin.as_deref(), Some("4521"));
        assert_eq!(assignment.destination, None);
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(resolve_accounts("sin cuentas aquí"), AccountAssignment::default());
    }

    #[test]
    fn test_repeated_value_counts_once() {
        let assignment = resolve_accounts("•1111 cargo\n•1111 confirmación\n•2222 abono");
        assert_eq!(assignment.origin.as_deref(), Some("1111"));
        assert_eq!(assignment.destination.as_deref(), Some("2222"));
    }

    #[test]
    fn test_mixed_forms_ordered_by_position() {
        // The explicit form appears first in the text even though the masked
        // pattern is listed first.
        let assignment = resolve_accounts("Cuenta 19412345678 origen\nabono a •9876");
        assert_eq!(assignment.origin.as_deref(), Some("19412345678"));
        assert_eq!(assignment.destination.as_deref(), Some("9876"));
    }

    #[test]
    fn test_third_candidate_discarded() {
        let assignment = resolve_accounts("•1111 luego •2222 y además •3333");
        assert_eq!(assignment.origin.as_deref(), Some("1111"));
        assert_eq!(assignment.destination.as_deref(), Some("2222"));
    }

    #[test]
    fn test_extractor_reports_positions() {
        let extractor = AccountExtractor::new();
        let matches = extractor.extract_all("pago •1234 listo");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "1234");
        assert_eq!(matches[0].start, "pago ".len());
        assert_eq!(matches[0].source, "•1234");
    }
}
