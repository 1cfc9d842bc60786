use crate::core::resolver::{resolve, Resolution};
use crate::domain::model::CanonicalCategory;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    /// A resolved category together with the label the visitor picked.
    Canonical {
        category: CanonicalCategory,
        label: String,
    },
    Unmapped { label: String },
}

impl CategoryFilter {
    pub fn from_label(raw_label: &str) -> Self {
        let label = raw_label.trim().to_string();
        match resolve(&label) {
            Resolution::Canonical { category, .. } => CategoryFilter::Canonical { category, label },
            Resolution::Unmapped(label) => CategoryFilter::Unmapped { label },
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Canonical { label, .. } | CategoryFilter::Unmapped { label } => {
                Some(label)
            }
        }
    }

    pub fn category(&self) -> Option<CanonicalCategory> {
        match self {
            CategoryFilter::Canonical { category, .. } => Some(*category),
            _ => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetMode {
    Unfiltered,
    Filtered,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Lowercased, not trimmed.
    pub search_term: String,
}

impl FilterState {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn with_search(&self, raw_input: &str) -> Self {
        Self {
            category: self.category.clone(),
            search_term: raw_input.to_lowercase(),
        }
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            search_term: self.search_term.clone(),
        }
    }

    pub fn reset(&self) -> Self {
        Self::initial()
    }

    pub fn mode(&self) -> WidgetMode {
        if self.category.is_all() && self.search_term.is_empty() {
            WidgetMode::Unfiltered
        } else {
            WidgetMode::Filtered
        }
    }
}
