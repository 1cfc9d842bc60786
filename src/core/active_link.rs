use crate::core::engine::EquivalenceClosure;
use crate::core::resolver::is_facility_like;
use crate::core::state::CategoryFilter;
use crate::domain::model::{ActiveLink, CategoryLink, LinkStyle};

/// Link labels that mean "no category filter", per locale.
pub const DEFAULT_ALL_PARTNERS_LABELS: [&str; 3] = ["All partners", "Alle Partner", "Tous les partenaires"];

pub fn is_all_partners_label(text: &str, all_partners_labels: &[String]) -> bool {
    let text = text.trim();
    all_partners_labels.iter().any(|label| label.trim() == text)
}

fn style_for(link: &CategoryLink) -> LinkStyle {
    if link.in_icon_container {
        LinkStyle::CurrentWithIcon
    } else {
        LinkStyle::Current
    }
}

fn mark(index: usize, link: &CategoryLink) -> ActiveLink {
    ActiveLink {
        index,
        style: style_for(link),
    }
}

/// Which links carry the "current" marker for `filter`.
pub fn active_links(
    filter: &CategoryFilter,
    links: &[CategoryLink],
    all_partners_labels: &[String],
) -> Vec<ActiveLink> {
    let Some(closure) = EquivalenceClosure::for_filter(filter) else {
        return all_partners_links(links, all_partners_labels);
    };
    let label = filter.label().unwrap_or_default();
    let facility_label = is_facility_like(label);

    links
        .iter()
        .enumerate()
        .filter(|(_, link)| {
            let text = link.text.trim();
            (facility_label && is_facility_like(text)) || closure.matches(text)
        })
        .map(|(index, link)| mark(index, link))
        .collect()
}

fn all_partners_links(links: &[CategoryLink], all_partners_labels: &[String]) -> Vec<ActiveLink> {
    let marked: Vec<ActiveLink> = links
        .iter()
        .enumerate()
        .filter(|(_, link)| is_all_partners_label(&link.text, all_partners_labels))
        .map(|(index, link)| mark(index, link))
        .collect();

    if !marked.is_empty() {
        return marked;
    }

    // Fall back to whichever link the page marked current on load.
    links
        .iter()
        .enumerate()
        .find(|(_, link)| link.initially_current)
        .map(|(index, link)| vec![mark(index, link)])
        .unwrap_or_else(|| {
            tracing::debug!("No 'all partners' link on the page, nothing to mark");
            Vec::new()
        })
}
