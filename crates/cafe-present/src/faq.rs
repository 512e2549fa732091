//! FAQ accordion

use crate::html::{escape, ui_attrs};
use crate::theme::{AccordionMode, Theme};
use cafe_catalog::Faq;

/// `data-action` of an FAQ question button
pub const TOGGLE_FAQ_ACTION: &str = "toggle-faq";

/// Open/closed state of each FAQ entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Vec<bool>,
    mode: AccordionMode,
}

impl FaqAccordion {
    /// All entries closed
    #[must_use]
    pub fn new(len: usize, mode: AccordionMode) -> Self {
        Self {
            open: vec![false; len],
            mode,
        }
    }

    /// Toggle entry; out-of-range indices are ignored
    ///
    /// In exclusive mode opening an entry closes every other one.
    pub fn toggle(&mut self, index: usize) {
        let Some(was_open) = self.open.get(index).copied() else {
            return;
        };

        if self.mode == AccordionMode::Exclusive {
            self.open.iter_mut().for_each(|o| *o = false);
        }
        self.open[index] = !was_open;
    }

    /// Check if entry is open
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Indices of open entries
    #[must_use]
    pub fn open_indices(&self) -> Vec<usize> {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.then_some(i))
            .collect()
    }

    /// Render the accordion
    #[must_use]
    pub fn render(&self, faqs: &[Faq], theme: Theme) -> String {
        let items: String = faqs
            .iter()
            .enumerate()
            .map(|(i, faq)| {
                let open = self.is_open(i);
                let (item_class, icon) = match (theme, open) {
                    (Theme::Classic, true) => ("faq-item is-open", "−"),
                    (Theme::Classic, false) => ("faq-item", "+"),
                    (Theme::Noir, true) => ("faq-item bg-shadow-grey is-open", "remove"),
                    (Theme::Noir, false) => ("faq-item bg-shadow-grey", "add"),
                };
                let index = u32::try_from(i).unwrap_or(u32::MAX);
                format!(
                    concat!(
                        "<div class=\"{class}\" data-faq-id=\"{id}\">",
                        "<button class=\"faq-item__question\"{toggle} aria-expanded=\"{open}\">",
                        "<span>{question}</span><span class=\"faq-item__icon\">{icon}</span>",
                        "</button>",
                        "<div class=\"faq-item__answer\"><div class=\"faq-item__answer-content\">{answer}</div></div>",
                        "</div>"
                    ),
                    class = item_class,
                    id = faq.id,
                    toggle = ui_attrs(TOGGLE_FAQ_ACTION, Some(index)),
                    open = open,
                    question = escape(&faq.question),
                    icon = icon,
                    answer = escape(&faq.answer),
                )
            })
            .collect();

        format!("<div id=\"faqList\">{items}</div>")
    }
}
