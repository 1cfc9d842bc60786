use partner_filter::{
    apply, CanonicalCategory, CategoryFilter, DirectorySection, EquivalenceClosure, FilterState,
    PartnerCard, WidgetMode,
};

fn directory() -> Vec<DirectorySection> {
    vec![
        DirectorySection::new(
            "Asset- und Immobilienverwaltung",
            vec![
                PartnerCard::new("PropTech One", "Portfolio management for real estate"),
                PartnerCard::new("Immo Cloud", "Smart asset reporting"),
            ],
        ),
        DirectorySection::new(
            "Facility Management / CAFM",
            vec![PartnerCard::new("FM Suite", "Maintenance planning")],
        ),
        DirectorySection::new(
            "Gestion des installations / CAFM",
            vec![PartnerCard::new("Bâtiment Plus", "Gestion technique")],
        ),
        DirectorySection::new(
            "ESG-Software",
            vec![
                PartnerCard::new("GreenLedger", "Carbon accounting"),
                PartnerCard::new("SMART ESG", "Reporting dashboards"),
            ],
        ),
        DirectorySection::new(
            "Logiciel ESG",
            vec![PartnerCard::new("VertCalc", "Bilan carbone")],
        ),
        DirectorySection::new(
            "Smart Metering / Untermessung",
            vec![PartnerCard::new("MeterHub", "Submetering gateways")],
        ),
        DirectorySection::new("Standards und Zertifizierung", vec![]),
    ]
}

fn state_for(label: &str, search: &str) -> FilterState {
    FilterState::initial()
        .with_category(CategoryFilter::from_label(label))
        .with_search(search)
}

#[test]
fn test_initial_state_shows_every_section_and_card() {
    let plan = apply(&FilterState::initial(), &directory());
    assert!(plan.sections.iter().all(|s| s.visible));
    assert!(plan.sections.iter().all(|s| s.cards.iter().all(|c| *c)));
    assert_eq!(plan.visible_card_count(), 8);
    assert!(!plan.no_results);
}

#[test]
fn test_category_shows_exactly_the_equivalent_sections() {
    let sections = directory();
    let state = state_for("ESG Software", "");
    let closure = EquivalenceClosure::for_filter(&state.category).unwrap();
    let plan = apply(&state, &sections);

    for (section, visibility) in sections.iter().zip(&plan.sections) {
        let expected = closure.matches(&section.heading) && !section.cards.is_empty();
        assert_eq!(visibility.visible, expected, "section '{}'", section.heading);
        if visibility.visible {
            assert!(visibility.cards.iter().all(|c| *c));
        }
    }
    assert_eq!(plan.visible_headings(), vec!["ESG-Software", "Logiciel ESG"]);
}

#[test]
fn test_facility_link_matches_facility_headings_in_any_locale() {
    let plan = apply(&state_for("Facility Management / CAFM", ""), &directory());
    assert_eq!(
        plan.visible_headings(),
        vec!["Facility Management / CAFM", "Gestion des installations / CAFM"]
    );
}

#[test]
fn test_search_with_all_hides_sections_without_matches() {
    let state = FilterState::initial().with_search("smart");
    let plan = apply(&state, &directory());

    assert_eq!(state.mode(), WidgetMode::Filtered);
    assert_eq!(plan.visible_headings(), vec!["Asset- und Immobilienverwaltung", "ESG-Software"]);
    assert_eq!(plan.sections[0].cards, vec![false, true]);
    assert_eq!(plan.sections[3].cards, vec![false, true]);
    assert!(!plan.sections[6].visible);
}

#[test]
fn test_card_visible_iff_candidate_and_matching() {
    let sections = directory();
    let state = state_for("ESG-Software", "carbon");
    let closure = EquivalenceClosure::for_filter(&state.category).unwrap();
    let plan = apply(&state, &sections);

    for (section, visibility) in sections.iter().zip(&plan.sections) {
        for (card, visible) in section.cards.iter().zip(&visibility.cards) {
            let matches = card.name.to_lowercase().contains("carbon")
                || card.description.to_lowercase().contains("carbon");
            assert_eq!(*visible, closure.matches(&section.heading) && matches);
        }
    }
    // "Carbon accounting" and the French "Bilan carbone".
    assert_eq!(plan.visible_card_count(), 2);
}

#[test]
fn test_apply_is_idempotent() {
    let state = state_for("Logiciel ESG", "re");
    assert_eq!(apply(&state, &directory()), apply(&state, &directory()));
}

#[test]
fn test_reset_yields_initial_plan() {
    let filtered = state_for("CAFM", "zzz");
    let filtered_plan = apply(&filtered, &directory());
    assert!(filtered_plan.no_results);

    let reset = filtered.reset();
    assert_eq!(reset, FilterState::initial());
    assert_eq!(apply(&reset, &directory()), apply(&FilterState::initial(), &directory()));
}

#[test]
fn test_unresolved_label_only_matches_identical_heading() {
    let mut sections = directory();
    sections.push(DirectorySection::new(
        "Partnerprogramm",
        vec![PartnerCard::new("Consultancy X", "Onboarding")],
    ));

    let state = state_for("Partnerprogramm", "");
    assert!(matches!(state.category, CategoryFilter::Unmapped { .. }));
    let plan = apply(&state, &sections);
    assert_eq!(plan.visible_headings(), vec!["Partnerprogramm"]);

    let plan = apply(&state_for("Hardware", ""), &sections);
    assert!(plan.no_results);
    assert!(!plan.any_visible);
}

#[test]
fn test_closure_spans_all_locales() {
    let closure = EquivalenceClosure::for_label(
        "Smart Metering / Submetering",
        Some(CanonicalCategory::SmartMeteringSubmetering),
    );
    for expected in [
        "Smart Metering / Submetering",
        "Smart Metering / Untermessung",
        "Comptage intelligent / Sous-comptage",
    ] {
        assert!(closure.members().iter().any(|m| m == expected));
    }
}
