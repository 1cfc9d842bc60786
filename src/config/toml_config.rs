use crate::core::active_link::DEFAULT_ALL_PARTNERS_LABELS;
use crate::domain::model::Locale;
use crate::utils::error::{FilterError, Result};
use crate::utils::validation::{
    validate_css_selector, validate_non_empty_list, validate_non_empty_string, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

/// CSS selectors locating the widget's elements in the partner page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub category_select: String,
    pub category_link: String,
    pub icon_container: String,
    pub section: String,
    pub section_heading: String,
    pub card: String,
    pub card_name: String,
    pub card_description: String,
    pub locale_heading: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            category_select: "#Kategorien-filtern".to_string(),
            category_link: ".category-link".to_string(),
            icon_container: ".with-icon".to_string(),
            section: ".wrapper-partner-cards".to_string(),
            section_heading: ".heading-partner".to_string(),
            card: ".card-under-partner".to_string(),
            card_name: "h6".to_string(),
            card_description: "p".to_string(),
            locale_heading: "h2.text-center-no-margins".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub all_partners: Vec<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            all_partners: DEFAULT_ALL_PARTNERS_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Lowercase text whose presence in the locale heading marks the English page.
    pub english_marker: String,
    pub default: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            english_marker: "aedifion partner ecosystem".to_string(),
            default: Locale::German.code().to_string(),
        }
    }
}

impl LocaleConfig {
    /// A language segment in the page path wins over the heading marker.
    pub fn detect(&self, page_path: Option<&str>, heading: Option<&str>) -> Locale {
        if let Some(path) = page_path {
            for segment in path.split('/').map(str::trim) {
                match segment.to_lowercase().as_str() {
                    "en" => return Locale::English,
                    "fr" => return Locale::French,
                    "de" => return Locale::German,
                    _ => {}
                }
            }
        }

        let marker = self.english_marker.trim().to_lowercase();
        if let Some(heading) = heading {
            if !marker.is_empty() && heading.trim().to_lowercase().contains(&marker) {
                return Locale::English;
            }
        }

        self.default_locale()
    }

    pub fn default_locale(&self) -> Locale {
        Locale::from_code(&self.default)
    }
}

impl WidgetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FilterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${PARTNER_SECTION_SELECTOR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FilterError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let s = &self.selectors;
        for (field, selector) in [
            ("selectors.category_select", &s.category_select),
            ("selectors.category_link", &s.category_link),
            ("selectors.icon_container", &s.icon_container),
            ("selectors.section", &s.section),
            ("selectors.section_heading", &s.section_heading),
            ("selectors.card", &s.card),
            ("selectors.card_name", &s.card_name),
            ("selectors.card_description", &s.card_description),
            ("selectors.locale_heading", &s.locale_heading),
        ] {
            validate_css_selector(field, selector)?;
        }

        validate_non_empty_list("labels.all_partners", &self.labels.all_partners)?;
        validate_non_empty_string("locale.english_marker", &self.locale.english_marker)?;

        let valid_locales = ["en", "fr", "de"];
        if !valid_locales.contains(&self.locale.default.trim()) {
            return Err(FilterError::InvalidConfigValueError {
                field: "locale.default".to_string(),
                value: self.locale.default.clone(),
                reason: format!("Unsupported locale. Valid locales: {}", valid_locales.join(", ")),
            });
        }

        Ok(())
    }
}

impl Validate for WidgetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
