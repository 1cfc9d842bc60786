// Adapters layer: the partner page collaborator (HTML in, rendered updates out).

pub mod html;
pub mod script;
pub mod text_renderer;

pub use html::HtmlDirectory;
pub use script::ScriptedEvent;
pub use text_renderer::{OutputFormat, TextRenderer};
