pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::WidgetConfig;

pub use adapters::{HtmlDirectory, OutputFormat, ScriptedEvent, TextRenderer};
pub use crate::core::{
    engine::{apply, EquivalenceClosure},
    resolver::{resolve, MatchRule, Resolution},
    state::{CategoryFilter, FilterState, WidgetMode},
    widget::{EventOutcome, PartnerFilter, WidgetEvent},
};
pub use domain::{
    CanonicalCategory, DirectorySection, DirectorySnapshot, DirectorySource, Locale, PartnerCard,
    Renderer, RenderUpdate, VisibilityPlan,
};
pub use utils::error::{FilterError, Result};
