//! Table of contents built from the heading outline.
//!
//! Numbering is flat: level-3 entries are indented by class but share the
//! counter with level-2 entries, so the list reads 1, 2, 3, ... top to bottom.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::content_renderer::headings::{HeadingLevel, HeadingRecord};
use crate::utils::MIN_TOC_HEADINGS;

/// One numbered TOC line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// 1-based position across the whole list, regardless of level
    pub index: usize,
    pub heading: HeadingRecord,
}

/// Ordered TOC entries for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocFragment {
    entries: Vec<TocEntry>,
}

impl TocFragment {
    /// Build the fragment, or `None` when fewer than two headings are anchored.
    pub fn build<'a, I>(headings: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a HeadingRecord>,
    {
        let entries: Vec<TocEntry> = headings
            .into_iter()
            .enumerate()
            .map(|(i, heading)| TocEntry {
                index: i + 1,
                heading: heading.clone(),
            })
            .collect();

        if entries.len() < MIN_TOC_HEADINGS {
            return None;
        }
        Some(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    /// Render as a `<nav class="article-toc">` block.
    #[must_use]
    pub fn render(&self, title: &str) -> String {
        let mut html = String::with_capacity(128 + self.entries.len() * 128);
        html.push_str("<nav class=\"article-toc\" aria-label=\"");
        html.push_str(&encode_double_quoted_attribute(title));
        html.push_str("\"><div class=\"article-toc__title\">");
        html.push_str(&encode_text(title));
        html.push_str("</div><ol class=\"article-toc__list\">");

        for entry in &self.entries {
            let modifier = match entry.heading.level {
                HeadingLevel::H2 => "h2",
                HeadingLevel::H3 => "h3",
            };
            html.push_str(&format!(
                "<li class=\"article-toc__item article-toc__item--{modifier}\"><a href=\"#{id}\"><span class=\"article-toc__index\">{index}.</span> {text}</a></li>",
                id = entry.heading.id,
                index = entry.index,
                text = encode_text(&entry.heading.text),
            ));
        }

        html.push_str("</ol></nav>");
        html
    }
}

/// TOC markup for `headings`, or an empty string below the threshold.
pub fn build_toc_html<'a, I>(headings: I, title: &str) -> String
where
    I: IntoIterator<Item = &'a HeadingRecord>,
{
    match TocFragment::build(headings) {
        Some(fragment) => fragment.render(title),
        None => {
            tracing::debug!("Fewer than {MIN_TOC_HEADINGS} anchored headings, no table of contents");
            String::new()
        }
    }
}
