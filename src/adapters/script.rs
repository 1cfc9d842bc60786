use crate::core::active_link::is_all_partners_label;
use crate::core::widget::WidgetEvent;
use crate::domain::model::DirectorySnapshot;
use crate::utils::error::{FilterError, Result};
use std::str::FromStr;

/// A UI event written as text, e.g. `search:smart` or `link:ESG Software`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedEvent {
    Search(String),
    Select(String),
    Link(String),
    AllPartners,
    Enter,
    Reset,
}

impl FromStr for ScriptedEvent {
    type Err = FilterError;

    fn from_str(input: &str) -> Result<Self> {
        let (kind, argument) = match input.split_once(':') {
            Some((kind, argument)) => (kind.trim(), Some(argument)),
            None => (input.trim(), None),
        };

        let event = match (kind.to_lowercase().as_str(), argument) {
            ("search", Some(text)) => ScriptedEvent::Search(text.to_string()),
            ("select", Some(value)) => ScriptedEvent::Select(value.trim().to_string()),
            ("link", Some(text)) if !text.trim().is_empty() => {
                ScriptedEvent::Link(text.trim().to_string())
            }
            ("all", None) => ScriptedEvent::AllPartners,
            ("enter", None) => ScriptedEvent::Enter,
            ("reset", None) => ScriptedEvent::Reset,
            _ => {
                return Err(FilterError::InvalidEvent {
                    input: input.to_string(),
                    reason: "unknown event or missing argument".to_string(),
                })
            }
        };
        Ok(event)
    }
}

impl ScriptedEvent {
    /// Binds the event to the elements of `snapshot`.
    pub fn to_widget_event(
        &self,
        snapshot: &DirectorySnapshot,
        all_partners_labels: &[String],
    ) -> Result<WidgetEvent> {
        match self {
            ScriptedEvent::Search(text) => Ok(WidgetEvent::SearchInput(text.clone())),
            ScriptedEvent::Enter => Ok(WidgetEvent::KeyDown("Enter".to_string())),
            ScriptedEvent::Reset => Ok(WidgetEvent::ResetClick),
            ScriptedEvent::Select(value) => {
                let text = snapshot
                    .dropdown
                    .as_ref()
                    .ok_or_else(|| FilterError::MissingElement {
                        what: "a category dropdown".to_string(),
                    })?
                    .iter()
                    .find(|option| option.value.trim() == value)
                    .map(|option| option.text.clone())
                    .ok_or_else(|| FilterError::MissingElement {
                        what: format!("a dropdown option with value '{}'", value),
                    })?;
                Ok(WidgetEvent::DropdownChange {
                    value: value.clone(),
                    text,
                })
            }
            ScriptedEvent::Link(text) => snapshot
                .links
                .iter()
                .position(|link| link.text.trim() == text)
                .map(WidgetEvent::LinkClick)
                .ok_or_else(|| FilterError::MissingElement {
                    what: format!("a category link '{}'", text),
                }),
            ScriptedEvent::AllPartners => snapshot
                .links
                .iter()
                .position(|link| is_all_partners_label(&link.text, all_partners_labels))
                .map(WidgetEvent::LinkClick)
                .ok_or_else(|| FilterError::MissingElement {
                    what: "an 'all partners' link".to_string(),
                }),
        }
    }
}
