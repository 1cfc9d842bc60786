pub mod active_link;
pub mod catalog;
pub mod dropdown;
pub mod empty_state;
pub mod engine;
pub mod resolver;
pub mod state;
pub mod widget;

pub use crate::domain::model::{
    CanonicalCategory, DirectorySection, DirectorySnapshot, Locale, PartnerCard, RenderUpdate,
    VisibilityPlan,
};
pub use crate::domain::ports::{DirectorySource, Renderer};
pub use crate::utils::error::Result;
