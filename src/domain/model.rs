use serde::{Deserialize, Serialize};
use std::fmt;

/// Partner classification buckets, in the fixed order used to break ties
/// when a label matches more than one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalCategory {
    AssetPropertyManagement,
    FacilityManagementCafm,
    SmartMeteringSubmetering,
    TechnicalBuildingEquipment,
    ConsultingPlanningImplementation,
    StandardsCertification,
    EsgSoftware,
    TechnicalMonitoringSoftware,
    ActiveOperationalOptimizationSoftware,
    WorkspaceAppsSmartBuilding,
}

impl CanonicalCategory {
    pub const ALL: [CanonicalCategory; 10] = [
        CanonicalCategory::AssetPropertyManagement,
        CanonicalCategory::FacilityManagementCafm,
        CanonicalCategory::SmartMeteringSubmetering,
        CanonicalCategory::TechnicalBuildingEquipment,
        CanonicalCategory::ConsultingPlanningImplementation,
        CanonicalCategory::StandardsCertification,
        CanonicalCategory::EsgSoftware,
        CanonicalCategory::TechnicalMonitoringSoftware,
        CanonicalCategory::ActiveOperationalOptimizationSoftware,
        CanonicalCategory::WorkspaceAppsSmartBuilding,
    ];
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    English,
    French,
    #[default]
    German,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::German => "de",
        }
    }

    /// Unknown codes fall back to German, the page's default language.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Locale::English,
            "fr" | "french" => Locale::French,
            _ => Locale::German,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerCard {
    pub name: String,
    pub description: String,
}

impl PartnerCard {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySection {
    pub heading: String,
    pub cards: Vec<PartnerCard>,
}

impl DirectorySection {
    pub fn new(heading: impl Into<String>, cards: Vec<PartnerCard>) -> Self {
        Self {
            heading: heading.into(),
            cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    pub text: String,
    /// The link sits inside an icon container and uses the white "current" marker.
    pub in_icon_container: bool,
    /// The link carried the "current" marker when the page loaded.
    pub initially_current: bool,
}

impl CategoryLink {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            in_icon_container: false,
            initially_current: false,
        }
    }

    pub fn with_icon(mut self) -> Self {
        self.in_icon_container = true;
        self
    }

    pub fn current(mut self) -> Self {
        self.initially_current = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub text: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Text content of the partner page as the filter sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    pub sections: Vec<DirectorySection>,
    pub links: Vec<CategoryLink>,
    /// `None` when the page has no category dropdown.
    pub dropdown: Option<Vec<DropdownOption>>,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    pub heading: String,
    pub visible: bool,
    pub cards: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityPlan {
    pub sections: Vec<SectionVisibility>,
    pub any_visible: bool,
    pub no_results: bool,
}

impl VisibilityPlan {
    pub fn visible_card_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.cards.iter().filter(|v| **v).count())
            .sum()
    }

    pub fn visible_headings(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.heading.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// `current` on the link itself.
    Current,
    /// `current-white` on the link and icon, `current` on the icon container.
    CurrentWithIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveLink {
    pub index: usize,
    pub style: LinkStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "index")]
pub enum DropdownAction {
    Keep,
    Clear,
    Select(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub locale: Locale,
    pub message: String,
    pub reset_label: String,
}

/// Everything the page collaborator needs to apply after one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderUpdate {
    pub plan: VisibilityPlan,
    pub active_links: Vec<ActiveLink>,
    pub dropdown: DropdownAction,
    /// `Some` when the search box text must be replaced.
    pub search_input: Option<String>,
    pub empty_state: Option<EmptyState>,
}
