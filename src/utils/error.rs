use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Page element not found: {what}")]
    MissingElement { what: String },

    #[error("Invalid event '{input}': {reason}")]
    InvalidEvent { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::TomlError(_)
            | FilterError::ConfigValidationError { .. }
            | FilterError::InvalidConfigValueError { .. }
            | FilterError::InvalidSelector { .. } => ErrorCategory::Configuration,
            FilterError::MissingElement { .. } | FilterError::InvalidEvent { .. } => {
                ErrorCategory::Input
            }
            FilterError::IoError(_) | FilterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FilterError::MissingElement { .. } => ErrorSeverity::Low,
            FilterError::InvalidEvent { .. } => ErrorSeverity::Medium,
            FilterError::TomlError(_)
            | FilterError::ConfigValidationError { .. }
            | FilterError::InvalidConfigValueError { .. }
            | FilterError::InvalidSelector { .. } => ErrorSeverity::High,
            FilterError::IoError(_) | FilterError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FilterError::IoError(_) => {
                "Check that the page or config file exists and is readable".to_string()
            }
            FilterError::TomlError(_) => "Check the config file for TOML syntax errors".to_string(),
            FilterError::SerializationError(_) => {
                "Retry with --format text to bypass JSON output".to_string()
            }
            FilterError::ConfigValidationError { field, .. }
            | FilterError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the config file", field)
            }
            FilterError::InvalidSelector { .. } => {
                "Use a CSS selector the page markup actually supports".to_string()
            }
            FilterError::MissingElement { what } => {
                format!("Make sure the page contains {}", what)
            }
            FilterError::InvalidEvent { .. } => {
                "Events look like 'search:smart', 'select:ESG-Software', 'link:ESG Software', 'all' or 'reset'"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not apply input: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
