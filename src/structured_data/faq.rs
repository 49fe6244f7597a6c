//! FAQ question/answer pairs from an article body.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::content_renderer::html_preprocessing::{Block, parse_blocks};
use crate::utils::plain_text;

/// A `<p>` opening the markup that follows a question heading.
static ANSWER_PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\A\s*<p\b[^>]*>(.*?)</p\s*>")
        .expect("ANSWER_PARAGRAPH_RE: hardcoded regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Question/answer pairs of the first FAQ section in `html`.
///
/// The section opens at the first heading whose text contains one of
/// `phrases` (compared lower-cased) and runs to the next level-2 heading or
/// the end of the body. Returns `None` when there is no such heading or it
/// holds no complete pair.
pub fn extract_faq(html: &str, phrases: &[String]) -> Option<Vec<FaqEntry>> {
    let blocks = parse_blocks(html);

    let (start_index, faq_heading) = blocks.iter().enumerate().find_map(|(i, block)| {
        let heading = block.as_heading()?;
        let text = heading.text.to_lowercase();
        phrases
            .iter()
            .any(|phrase| text.contains(phrase.as_str()))
            .then_some((i, heading))
    })?;

    let section = &blocks[start_index + 1..];
    let section_len = section
        .iter()
        .position(|block| matches!(block, Block::Heading(heading) if heading.level == 2))
        .unwrap_or(section.len());
    let section = &section[..section_len];

    let entries: Vec<FaqEntry> = section
        .iter()
        .enumerate()
        .filter_map(|(i, block)| {
            let question = block.as_heading().filter(|heading| heading.level == 3)?;
            let Some(Block::Markup(following)) = section.get(i + 1) else {
                return None;
            };
            let answer = plain_text(ANSWER_PARAGRAPH_RE.captures(following)?.get(1)?.as_str());
            (!question.text.is_empty() && !answer.is_empty()).then(|| FaqEntry {
                question: question.text.clone(),
                answer,
            })
        })
        .collect();

    if entries.is_empty() {
        tracing::debug!(heading = %faq_heading.text, "FAQ heading found but no question/answer pairs");
        return None;
    }
    tracing::trace!(count = entries.len(), "Extracted FAQ entries");
    Some(entries)
}
