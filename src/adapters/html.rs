use crate::config::{SelectorConfig, WidgetConfig};
use crate::domain::model::{
    CategoryLink, DirectorySection, DirectorySnapshot, DropdownOption, Locale, PartnerCard,
};
use crate::domain::ports::DirectorySource;
use crate::utils::error::{FilterError, Result};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use tracing::{debug, info, warn};

struct CompiledSelectors {
    category_select: Selector,
    option: Selector,
    category_link: Selector,
    icon_container: Selector,
    section: Selector,
    section_heading: Selector,
    card: Selector,
    card_name: Selector,
    card_description: Selector,
    locale_heading: Selector,
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| FilterError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl CompiledSelectors {
    fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            category_select: compile(&config.category_select)?,
            option: compile("option")?,
            category_link: compile(&config.category_link)?,
            icon_container: compile(&config.icon_container)?,
            section: compile(&config.section)?,
            section_heading: compile(&config.section_heading)?,
            card: compile(&config.card)?,
            card_name: compile(&config.card_name)?,
            card_description: compile(&config.card_description)?,
            locale_heading: compile(&config.locale_heading)?,
        })
    }
}

/// Trimmed text content, like the browser's `textContent.trim()`.
fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|e| text_of(&e))
}

/// A rendered partner page read through the configured selectors.
pub struct HtmlDirectory {
    document: Html,
    selectors: CompiledSelectors,
    locale: Locale,
}

impl HtmlDirectory {
    pub fn parse(html: &str, config: &WidgetConfig, page_path: Option<&str>) -> Result<Self> {
        let document = Html::parse_document(html);
        let selectors = CompiledSelectors::new(&config.selectors)?;

        let heading = document
            .select(&selectors.locale_heading)
            .next()
            .map(|e| text_of(&e));
        let locale = config.locale.detect(page_path, heading.as_deref());
        debug!("Detected page locale {:?} (heading: {:?})", locale, heading);

        Ok(Self {
            document,
            selectors,
            locale,
        })
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        config: &WidgetConfig,
        page_path: Option<&str>,
    ) -> Result<Self> {
        let html = std::fs::read_to_string(&path)?;
        info!("Loaded partner page from {}", path.as_ref().display());
        Self::parse(&html, config, page_path)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn sections(&self) -> Vec<DirectorySection> {
        self.document
            .select(&self.selectors.section)
            .map(|section| {
                let heading =
                    first_text(&section, &self.selectors.section_heading).unwrap_or_default();
                let cards = section
                    .select(&self.selectors.card)
                    .map(|card| {
                        PartnerCard::new(
                            first_text(&card, &self.selectors.card_name).unwrap_or_default(),
                            first_text(&card, &self.selectors.card_description)
                                .unwrap_or_default(),
                        )
                    })
                    .collect();
                DirectorySection::new(heading, cards)
            })
            .collect()
    }

    fn links(&self) -> Vec<CategoryLink> {
        self.document
            .select(&self.selectors.category_link)
            .map(|link| {
                let in_icon_container = link
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .any(|ancestor| self.selectors.icon_container.matches(&ancestor));
                CategoryLink {
                    text: text_of(&link),
                    in_icon_container,
                    initially_current: link.value().classes().any(|c| c == "current"),
                }
            })
            .collect()
    }

    fn dropdown(&self) -> Option<Vec<DropdownOption>> {
        let select = self.document.select(&self.selectors.category_select).next()?;
        let options = select
            .select(&self.selectors.option)
            .map(|option| {
                let text = text_of(&option);
                // A missing value attribute falls back to the option text.
                let value = option
                    .value()
                    .attr("value")
                    .map(|v| v.trim().to_string())
                    .unwrap_or_else(|| text.clone());
                DropdownOption::new(value, text)
            })
            .collect();
        Some(options)
    }
}

impl DirectorySource for HtmlDirectory {
    fn snapshot(&self) -> Result<DirectorySnapshot> {
        let sections = self.sections();
        if sections.is_empty() {
            warn!("No directory sections found on the page");
        }
        let dropdown = self.dropdown();
        if dropdown.is_none() {
            debug!("Page has no category dropdown, dropdown sync disabled");
        }

        Ok(DirectorySnapshot {
            sections,
            links: self.links(),
            dropdown,
            locale: self.locale,
        })
    }
}
