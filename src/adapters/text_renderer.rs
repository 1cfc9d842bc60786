use crate::domain::model::{DropdownAction, LinkStyle, RenderUpdate};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes each render update to `out` instead of a live page.
///
/// Tracks whether the empty-state message is on screen so it is created once
/// and removed when results come back.
pub struct TextRenderer<W: Write> {
    out: W,
    format: OutputFormat,
    link_texts: Vec<String>,
    empty_state_shown: bool,
    renders: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, format: OutputFormat, link_texts: Vec<String>) -> Self {
        Self {
            out,
            format,
            link_texts,
            empty_state_shown: false,
            renders: 0,
        }
    }

    pub fn empty_state_shown(&self) -> bool {
        self.empty_state_shown
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn link_text(&self, index: usize) -> &str {
        self.link_texts
            .get(index)
            .map(String::as_str)
            .unwrap_or("?")
    }

    fn write_text(&mut self, update: &RenderUpdate) -> Result<()> {
        let mut lines = vec![format!("--- render #{} ---", self.renders)];

        for section in &update.plan.sections {
            let shown = section.cards.iter().filter(|v| **v).count();
            let marker = if section.visible { "+" } else { "-" };
            lines.push(format!(
                "{} {} ({}/{} cards)",
                marker,
                section.heading,
                shown,
                section.cards.len()
            ));
        }

        for active in &update.active_links {
            let style = match active.style {
                LinkStyle::Current => "current",
                LinkStyle::CurrentWithIcon => "current-white",
            };
            lines.push(format!("* link '{}' [{}]", self.link_text(active.index), style));
        }

        match update.dropdown {
            DropdownAction::Keep => {}
            DropdownAction::Clear => lines.push("dropdown: cleared".to_string()),
            DropdownAction::Select(index) => lines.push(format!("dropdown: option #{}", index)),
        }

        if let Some(value) = &update.search_input {
            lines.push(format!("search box: '{}'", value));
        }

        match (&update.empty_state, self.empty_state_shown) {
            (Some(empty), false) => {
                lines.push(format!("! {} [{}]", empty.message, empty.reset_label))
            }
            (None, true) => lines.push("empty-state message removed".to_string()),
            _ => {}
        }

        writeln!(self.out, "{}", lines.join("\n"))?;
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, update: &RenderUpdate) -> Result<()> {
        self.renders += 1;
        match self.format {
            OutputFormat::Text => self.write_text(update)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, update)?;
                writeln!(self.out)?;
            }
        }
        self.empty_state_shown = update.empty_state.is_some();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::empty_state::empty_state;
    use crate::domain::model::{ActiveLink, Locale, SectionVisibility, VisibilityPlan};

    fn update(no_results: bool) -> RenderUpdate {
        RenderUpdate {
            plan: VisibilityPlan {
                sections: vec![SectionVisibility {
                    heading: "ESG Software".to_string(),
                    visible: !no_results,
                    cards: vec![!no_results],
                }],
                any_visible: !no_results,
                no_results,
            },
            active_links: vec![ActiveLink {
                index: 0,
                style: LinkStyle::Current,
            }],
            dropdown: DropdownAction::Select(1),
            search_input: None,
            empty_state: no_results.then(|| empty_state(Locale::English)),
        }
    }

    #[test]
    fn test_text_output_tracks_empty_state() {
        let mut renderer = TextRenderer::new(Vec::new(), OutputFormat::Text, vec!["ESG Software".to_string()]);
        renderer.render(&update(true)).unwrap();
        assert!(renderer.empty_state_shown());
        renderer.render(&update(false)).unwrap();
        assert!(!renderer.empty_state_shown());
        assert_eq!(renderer.renders(), 2);

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.contains("! No partners found matching your criteria. [Reset Filters]"));
        assert!(output.contains("empty-state message removed"));
        assert!(output.contains("+ ESG Software (1/1 cards)"));
        assert!(output.contains("* link 'ESG Software' [current]"));
    }

    #[test]
    fn test_json_output_is_one_line_per_render() {
        let mut renderer = TextRenderer::new(Vec::new(), OutputFormat::Json, vec![]);
        renderer.render(&update(false)).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["dropdown"]["action"], "select");
        assert_eq!(value["dropdown"]["index"], 1);
        assert_eq!(value["plan"]["no_results"], false);
    }
}
