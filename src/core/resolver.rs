//! Maps a raw category label in any locale or spelling to a canonical category.
//!
//! Rules are tried in rank order: exact key, synonym, the Facility/CAFM special
//! case, then substring containment. Substring containment is not total: a
//! label can be contained in synonyms of several categories. Ties go to the
//! first category in `CanonicalCategory::ALL` order. Labels that match nothing
//! pass through unchanged.
//!
//! Deviation from plain containment: an empty label (after trimming) is never
//! contained in anything, so `resolve("")` is `Unmapped("")` rather than the
//! first category, and it filters to nothing instead of every section.

use crate::core::catalog::catalog;
use crate::domain::model::CanonicalCategory;
use serde::Serialize;

const FACILITY_TOKENS: [&str; 2] = ["Facility", "CAFM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    ExactKey,
    Synonym,
    FacilitySpecialCase,
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Canonical {
        category: CanonicalCategory,
        rule: MatchRule,
    },
    Unmapped(String),
}

impl Resolution {
    pub fn category(&self) -> Option<CanonicalCategory> {
        match self {
            Resolution::Canonical { category, .. } => Some(*category),
            Resolution::Unmapped(_) => None,
        }
    }
}

pub fn resolve(raw_label: &str) -> Resolution {
    let label = raw_label.trim();
    let resolution = resolve_trimmed(label);
    match &resolution {
        Resolution::Canonical { category, rule } => {
            tracing::debug!("Resolved '{}' to {} via {:?}", label, category, rule);
        }
        Resolution::Unmapped(_) => {
            tracing::debug!("No category matches '{}', passing label through", label);
        }
    }
    resolution
}

fn resolve_trimmed(label: &str) -> Resolution {
    if label.is_empty() {
        return Resolution::Unmapped(String::new());
    }

    let catalog = catalog();

    if let Some(category) = catalog.exact_key(label) {
        return Resolution::Canonical {
            category,
            rule: MatchRule::ExactKey,
        };
    }

    if let Some(category) = catalog.synonym(label) {
        return Resolution::Canonical {
            category,
            rule: MatchRule::Synonym,
        };
    }

    if is_facility_like(label) {
        return Resolution::Canonical {
            category: CanonicalCategory::FacilityManagementCafm,
            rule: MatchRule::FacilitySpecialCase,
        };
    }

    catalog
        .entries()
        .iter()
        .find(|entry| entry.synonyms.iter().any(|s| fuzzy_match(s, label)))
        .map(|entry| Resolution::Canonical {
            category: entry.category,
            rule: MatchRule::Substring,
        })
        .unwrap_or_else(|| Resolution::Unmapped(label.to_string()))
}

/// Case-sensitive containment in either direction. Empty strings never match.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

pub fn is_facility_like(label: &str) -> bool {
    FACILITY_TOKENS.iter().any(|token| label.contains(token))
}

/// Both strings carry the same Facility/CAFM token.
pub fn shares_facility_token(a: &str, b: &str) -> bool {
    FACILITY_TOKENS
        .iter()
        .any(|token| a.contains(token) && b.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label_stays_unmapped() {
        assert_eq!(resolve(""), Resolution::Unmapped(String::new()));
        assert_eq!(resolve("   "), Resolution::Unmapped(String::new()));
        assert!(!fuzzy_match("", "ESG Software"));
    }

    fn category_of(label: &str) -> Option<CanonicalCategory> {
        resolve(label).category()
    }

    #[test]
    fn test_exact_key_wins_first() {
        assert_eq!(
            resolve("ESG-Software"),
            Resolution::Canonical {
                category: CanonicalCategory::EsgSoftware,
                rule: MatchRule::ExactKey,
            }
        );
    }

    #[test]
    fn test_synonym_lookup() {
        assert_eq!(
            resolve("Logiciel ESG"),
            Resolution::Canonical {
                category: CanonicalCategory::EsgSoftware,
                rule: MatchRule::Synonym,
            }
        );
    }

    #[test]
    fn test_facility_special_case() {
        assert_eq!(
            resolve("CAFM-Lösungen"),
            Resolution::Canonical {
                category: CanonicalCategory::FacilityManagementCafm,
                rule: MatchRule::FacilitySpecialCase,
            }
        );
        assert_eq!(
            category_of("Facility Services"),
            Some(CanonicalCategory::FacilityManagementCafm)
        );
    }

    #[test]
    fn test_substring_ties_go_to_enumeration_order() {
        // "Software" is contained in ESG and in both monitoring/optimization synonyms.
        assert_eq!(
            resolve("Software"),
            Resolution::Canonical {
                category: CanonicalCategory::EsgSoftware,
                rule: MatchRule::Substring,
            }
        );
        assert_eq!(
            category_of("Smart Metering"),
            Some(CanonicalCategory::SmartMeteringSubmetering)
        );
    }

    #[test]
    fn test_label_containing_synonym_matches() {
        assert_eq!(
            category_of("Standards and Certification (12)"),
            Some(CanonicalCategory::StandardsCertification)
        );
    }

    #[test]
    fn test_unknown_label_passes_through() {
        assert_eq!(
            resolve("  Hardware  "),
            Resolution::Unmapped("Hardware".to_string())
        );
        assert_eq!(resolve("   "), Resolution::Unmapped(String::new()));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(resolve("esg"), Resolution::Unmapped("esg".to_string()));
    }

    #[test]
    fn test_fuzzy_match_helpers() {
        assert!(fuzzy_match("Facility Management / CAFM", "Facility Management"));
        assert!(fuzzy_match("ESG", "ESG Software"));
        assert!(!fuzzy_match("", "ESG Software"));
        assert!(shares_facility_token("Facility-Management / CAFM", "CAFM"));
        assert!(!shares_facility_token("Facility Management", "CAFM"));
    }
}
