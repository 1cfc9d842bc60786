use crate::core::catalog::catalog;
use crate::core::resolver::{fuzzy_match, resolve};
use crate::core::state::CategoryFilter;
use crate::domain::model::DropdownOption;

/// Label used for filtering after a dropdown change, or `None` for "all".
///
/// Known machine values map to their English display name; anything else
/// uses the option text.
pub fn label_for_selection(value: &str, text: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let label = catalog()
        .display_for_value(value)
        .map(str::to_string)
        .unwrap_or_else(|| text.trim().to_string());
    Some(label)
}

/// Option the dropdown should show after a category link click.
pub fn option_for_filter(filter: &CategoryFilter, options: &[DropdownOption]) -> Option<usize> {
    let label = filter.label()?.trim();

    if let Some(category) = filter.category() {
        let same_category = options.iter().position(|option| {
            !option.value.trim().is_empty()
                && (resolve(&option.value).category() == Some(category)
                    || resolve(&option.text).category() == Some(category))
        });
        if same_category.is_some() {
            return same_category;
        }
    }

    if let Some(index) = options.iter().position(|o| o.text.trim() == label) {
        return Some(index);
    }

    // Last resort: partial text match, the last such option wins.
    options
        .iter()
        .rposition(|option| !option.value.trim().is_empty() && fuzzy_match(&option.text, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DropdownOption> {
        vec![
            DropdownOption::new("", "Kategorien filtern"),
            DropdownOption::new("Asset-Property-Management", "Asset- und Immobilienverwaltung"),
            DropdownOption::new("ESG-Software", "ESG-Software"),
            DropdownOption::new("Partnerprogramm", "Partnerprogramm"),
        ]
    }

    #[test]
    fn test_label_for_selection_maps_machine_values() {
        assert_eq!(
            label_for_selection("ESG-Software", "ESG-Software"),
            Some("ESG Software".to_string())
        );
        assert_eq!(
            label_for_selection("Partnerprogramm", " Partnerprogramm "),
            Some("Partnerprogramm".to_string())
        );
        assert_eq!(label_for_selection("  ", "Kategorien filtern"), None);
    }

    #[test]
    fn test_option_for_filter_by_category() {
        let filter = CategoryFilter::from_label("Logiciel ESG");
        assert_eq!(option_for_filter(&filter, &options()), Some(2));

        let filter = CategoryFilter::from_label("Asset and real estate management");
        assert_eq!(option_for_filter(&filter, &options()), Some(1));
    }

    #[test]
    fn test_option_for_filter_by_text() {
        let filter = CategoryFilter::from_label("Partnerprogramm");
        assert_eq!(option_for_filter(&filter, &options()), Some(3));
    }

    #[test]
    fn test_option_for_filter_without_match() {
        let filter = CategoryFilter::from_label("Hardware");
        assert_eq!(option_for_filter(&filter, &options()), None);
        assert_eq!(option_for_filter(&CategoryFilter::All, &options()), None);
    }
}
