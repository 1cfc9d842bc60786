use crate::domain::model::{EmptyState, Locale};

pub fn empty_state(locale: Locale) -> EmptyState {
    let (message, reset_label) = match locale {
        Locale::English => ("No partners found matching your criteria.", "Reset Filters"),
        Locale::French => (
            "Aucun partenaire ne correspond à vos critères.",
            "Réinitialiser les filtres",
        ),
        Locale::German => (
            "Keine Partner gefunden, die Ihren Kriterien entsprechen.",
            "Filter zurücksetzen",
        ),
    };

    EmptyState {
        locale,
        message: message.to_string(),
        reset_label: reset_label.to_string(),
    }
}
