// Domain layer: page model and the ports to the page collaborator.

pub mod model;
pub mod ports;

pub use model::{
    ActiveLink, CanonicalCategory, CategoryLink, DirectorySection, DirectorySnapshot,
    DropdownAction, DropdownOption, EmptyState, LinkStyle, Locale, PartnerCard, RenderUpdate,
    SectionVisibility, VisibilityPlan,
};
pub use ports::{DirectorySource, Renderer};
