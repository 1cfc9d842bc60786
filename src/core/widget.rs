//! Event handling for the partner filter widget.
//!
//! Handlers only derive the next `FilterState`; visibility, link markers and
//! the empty state are recomputed from scratch by `render` on every event.

use crate::core::active_link::{active_links, is_all_partners_label, DEFAULT_ALL_PARTNERS_LABELS};
use crate::core::dropdown::{label_for_selection, option_for_filter};
use crate::core::empty_state::empty_state;
use crate::core::engine::apply;
use crate::core::state::{CategoryFilter, FilterState, WidgetMode};
use crate::domain::model::{DirectorySnapshot, DropdownAction, RenderUpdate};
use crate::domain::ports::{DirectorySource, Renderer};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    SearchInput(String),
    KeyDown(String),
    FormSubmit,
    DropdownChange { value: String, text: String },
    LinkClick(usize),
    ResetClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    /// The page must suppress the browser default (navigation, form submit).
    pub prevent_default: bool,
    pub update: Option<RenderUpdate>,
}

impl EventOutcome {
    fn suppressed() -> Self {
        Self {
            prevent_default: true,
            update: None,
        }
    }
}

/// Pure view of `state` over the page content.
pub fn render(
    state: &FilterState,
    snapshot: &DirectorySnapshot,
    all_partners_labels: &[String],
    dropdown: DropdownAction,
    search_input: Option<String>,
) -> RenderUpdate {
    let plan = apply(state, &snapshot.sections);
    let empty_state = plan.no_results.then(|| empty_state(snapshot.locale));

    RenderUpdate {
        active_links: active_links(&state.category, &snapshot.links, all_partners_labels),
        plan,
        dropdown,
        search_input,
        empty_state,
    }
}

#[derive(Debug, Clone)]
pub struct PartnerFilter {
    state: FilterState,
    all_partners_labels: Vec<String>,
}

impl Default for PartnerFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALL_PARTNERS_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl PartnerFilter {
    pub fn new(all_partners_labels: Vec<String>) -> Self {
        Self {
            state: FilterState::initial(),
            all_partners_labels,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn mode(&self) -> WidgetMode {
        self.state.mode()
    }

    pub fn initial_render(&self, snapshot: &DirectorySnapshot) -> RenderUpdate {
        render(
            &FilterState::initial(),
            snapshot,
            &self.all_partners_labels,
            DropdownAction::Keep,
            None,
        )
    }

    pub fn handle(&mut self, event: WidgetEvent, snapshot: &DirectorySnapshot) -> EventOutcome {
        tracing::debug!("Handling {:?}", event);

        let (next, dropdown, search_input, prevent_default) = match event {
            WidgetEvent::KeyDown(key) if key == "Enter" => return EventOutcome::suppressed(),
            WidgetEvent::KeyDown(_) => {
                return EventOutcome {
                    prevent_default: false,
                    update: None,
                }
            }
            WidgetEvent::FormSubmit => return EventOutcome::suppressed(),
            WidgetEvent::SearchInput(text) => {
                (self.state.with_search(&text), DropdownAction::Keep, None, false)
            }
            WidgetEvent::DropdownChange { value, text } => {
                let category = label_for_selection(&value, &text)
                    .map(|label| CategoryFilter::from_label(&label))
                    .unwrap_or(CategoryFilter::All);
                (self.state.with_category(category), DropdownAction::Keep, None, false)
            }
            WidgetEvent::LinkClick(index) => {
                let Some(link) = snapshot.links.get(index) else {
                    tracing::debug!("Ignoring click on missing category link #{}", index);
                    return EventOutcome::suppressed();
                };
                // The link marked current on load is the page's "all partners" entry.
                if link.initially_current
                    || is_all_partners_label(&link.text, &self.all_partners_labels)
                {
                    (
                        self.state.with_category(CategoryFilter::All),
                        self.clear_dropdown(snapshot),
                        None,
                        true,
                    )
                } else {
                    let category = CategoryFilter::from_label(&link.text);
                    let dropdown = snapshot
                        .dropdown
                        .as_deref()
                        .and_then(|options| option_for_filter(&category, options))
                        .map(DropdownAction::Select)
                        .unwrap_or(DropdownAction::Keep);
                    (self.state.with_category(category), dropdown, None, true)
                }
            }
            WidgetEvent::ResetClick => (
                self.state.reset(),
                self.clear_dropdown(snapshot),
                Some(String::new()),
                false,
            ),
        };

        self.state = next;
        let update = render(
            &self.state,
            snapshot,
            &self.all_partners_labels,
            dropdown,
            search_input,
        );

        EventOutcome {
            prevent_default,
            update: Some(update),
        }
    }

    /// Reads the page, handles `event` and hands the result to `renderer`.
    /// Returns whether the browser default must be suppressed.
    pub fn dispatch<S, R>(&mut self, event: WidgetEvent, source: &S, renderer: &mut R) -> Result<bool>
    where
        S: DirectorySource,
        R: Renderer,
    {
        let snapshot = source.snapshot()?;
        let outcome = self.handle(event, &snapshot);
        if let Some(update) = &outcome.update {
            renderer.render(update)?;
        }
        Ok(outcome.prevent_default)
    }

    fn clear_dropdown(&self, snapshot: &DirectorySnapshot) -> DropdownAction {
        if snapshot.dropdown.is_some() {
            DropdownAction::Clear
        } else {
            DropdownAction::Keep
        }
    }
}
