use crate::domain::model::{DirectorySnapshot, RenderUpdate};
use crate::utils::error::Result;

/// Supplies the current text content of the partner page.
pub trait DirectorySource {
    fn snapshot(&self) -> Result<DirectorySnapshot>;
}

/// Applies visibility, link markers and the empty state to the page.
pub trait Renderer {
    fn render(&mut self, update: &RenderUpdate) -> Result<()>;
}

impl DirectorySource for DirectorySnapshot {
    fn snapshot(&self) -> Result<DirectorySnapshot> {
        Ok(self.clone())
    }
}
