//! Decides which directory sections and partner cards are visible.

use crate::core::catalog::catalog;
use crate::core::resolver::{fuzzy_match, shares_facility_token};
use crate::core::state::{CategoryFilter, FilterState, WidgetMode};
use crate::domain::model::{
    CanonicalCategory, DirectorySection, PartnerCard, SectionVisibility, VisibilityPlan,
};

/// Every label considered equal to the active category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClosure {
    members: Vec<String>,
}

impl EquivalenceClosure {
    /// Synonyms of every category whose synonym set contains or fuzzy-matches
    /// `label`, the resolved category's synonyms, and `label` itself.
    pub fn for_label(label: &str, resolved: Option<CanonicalCategory>) -> Self {
        let label = label.trim();
        let mut members: Vec<String> = vec![label.to_string()];

        for entry in catalog().entries() {
            let matches = Some(entry.category) == resolved
                || entry.synonyms.iter().any(|synonym| {
                    *synonym == label
                        || fuzzy_match(synonym, label)
                        || shares_facility_token(synonym, label)
                });
            if !matches {
                continue;
            }
            for synonym in entry.synonyms {
                if !members.iter().any(|m| m == synonym) {
                    members.push(synonym.to_string());
                }
            }
        }

        Self { members }
    }

    pub fn for_filter(filter: &CategoryFilter) -> Option<Self> {
        match filter {
            CategoryFilter::All => None,
            CategoryFilter::Canonical { category, label } => {
                Some(Self::for_label(label, Some(*category)))
            }
            CategoryFilter::Unmapped { label } => Some(Self::for_label(label, None)),
        }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Exact membership, fuzzy containment, or a shared Facility/CAFM token.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.members.iter().any(|member| {
            member == text || fuzzy_match(member, text) || shares_facility_token(member, text)
        })
    }
}

pub fn card_matches_search(card: &PartnerCard, search_term: &str) -> bool {
    search_term.is_empty()
        || card.name.trim().to_lowercase().contains(search_term)
        || card.description.trim().to_lowercase().contains(search_term)
}

pub fn apply(state: &FilterState, sections: &[DirectorySection]) -> VisibilityPlan {
    if state.mode() == WidgetMode::Unfiltered {
        return show_all(sections);
    }

    let closure = EquivalenceClosure::for_filter(&state.category);
    let mut any_visible = false;

    let sections: Vec<SectionVisibility> = sections
        .iter()
        .map(|section| {
            let candidate = closure
                .as_ref()
                .map_or(true, |closure| closure.matches(&section.heading));

            let cards: Vec<bool> = section
                .cards
                .iter()
                .map(|card| candidate && card_matches_search(card, &state.search_term))
                .collect();
            let visible = cards.iter().any(|v| *v);
            any_visible |= visible;

            SectionVisibility {
                heading: section.heading.clone(),
                visible,
                cards,
            }
        })
        .collect();

    tracing::debug!(
        "Filter {:?} / '{}': {} of {} sections visible",
        state.category,
        state.search_term,
        sections.iter().filter(|s| s.visible).count(),
        sections.len()
    );

    VisibilityPlan {
        sections,
        any_visible,
        no_results: !any_visible,
    }
}

/// Initial-load and reset layout: everything shown, sections without cards included.
pub fn show_all(sections: &[DirectorySection]) -> VisibilityPlan {
    let sections: Vec<SectionVisibility> = sections
        .iter()
        .map(|section| SectionVisibility {
            heading: section.heading.clone(),
            visible: true,
            cards: vec![true; section.cards.len()],
        })
        .collect();
    let any_visible = sections.iter().any(|s| !s.cards.is_empty());

    VisibilityPlan {
        sections,
        any_visible,
        no_results: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<DirectorySection> {
        vec![
            DirectorySection::new(
                "ESG-Software",
                vec![
                    PartnerCard::new("GreenData", "Carbon reporting for portfolios"),
                    PartnerCard::new("SmartESG", "Smart sustainability dashboards"),
                ],
            ),
            DirectorySection::new(
                "Facility-Management / CAFM",
                vec![PartnerCard::new("FM Pro", "CAFM suite")],
            ),
            DirectorySection::new("Standards und Zertifizierung", vec![]),
        ]
    }

    #[test]
    fn test_closure_contains_all_locales() {
        let closure = EquivalenceClosure::for_label("Logiciel ESG", Some(CanonicalCategory::EsgSoftware));
        assert!(closure.members().iter().any(|m| m == "ESG Software"));
        assert!(closure.members().iter().any(|m| m == "ESG-Software"));
        assert!(closure.matches("ESG software"));
        assert!(!closure.matches("Normes et certification"));
        assert!(!closure.matches(""));
    }

    #[test]
    fn test_facility_closure_matches_any_facility_heading() {
        let closure = EquivalenceClosure::for_label(
            "Facility Management / CAFM",
            Some(CanonicalCategory::FacilityManagementCafm),
        );
        assert!(closure.matches("Gestion des installations / CAFM"));
        assert!(closure.matches("Facility Services"));
        assert!(!closure.matches("ESG-Software"));
    }

    #[test]
    fn test_unfiltered_shows_everything() {
        let plan = apply(&FilterState::initial(), &sections());
        assert!(plan.sections.iter().all(|s| s.visible));
        assert!(plan.sections.iter().all(|s| s.cards.iter().all(|c| *c)));
        assert!(!plan.no_results);
    }

    #[test]
    fn test_category_hides_other_sections() {
        let state = FilterState::initial().with_category(CategoryFilter::from_label("ESG Software"));
        let plan = apply(&state, &sections());
        assert_eq!(plan.visible_headings(), vec!["ESG-Software"]);
        assert_eq!(plan.sections[1].cards, vec![false]);
        assert_eq!(plan.visible_card_count(), 2);
    }

    #[test]
    fn test_search_hides_sections_without_matching_cards() {
        let state = FilterState::initial().with_search("CAFM");
        let plan = apply(&state, &sections());
        assert_eq!(plan.visible_headings(), vec!["Facility-Management / CAFM"]);
        assert!(!plan.no_results);
    }

    #[test]
    fn test_unmapped_category_yields_no_results() {
        let state = FilterState::initial().with_category(CategoryFilter::from_label("Hardware"));
        let plan = apply(&state, &sections());
        assert!(plan.visible_headings().is_empty());
        assert!(plan.no_results);
    }
}
