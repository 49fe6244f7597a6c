//! Re-emission of a body with anchor ids on its headings.

use regex::Regex;
use std::sync::LazyLock;

use super::extraction::HeadingOutline;
use crate::content_renderer::html_preprocessing::Block;

/// Existing `id` attribute in any quoting style. `data-id` is not matched
/// because the name must follow whitespace.
static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("ID_ATTR_RE: hardcoded regex is valid")
});

/// Value of the first `id` attribute in a heading's raw attribute text.
pub(super) fn existing_id(attrs: &str) -> Option<&str> {
    let caps = ID_ATTR_RE.captures(attrs)?;
    (1..=3).find_map(|group| caps.get(group)).map(|value| value.as_str())
}

/// Rebuild the body from `blocks`, anchoring every heading in `outline`.
///
/// Anchored headings lose any previous `id` and get `id="<slug>"` as their
/// first attribute. Headings left unanchored keep their attributes as
/// written. `h4` is emitted as `h3` whether anchored or not. Markup
/// between headings is copied unchanged.
pub fn rewrite_headings(blocks: &[Block<'_>], outline: &HeadingOutline) -> String {
    let capacity = blocks
        .iter()
        .map(|block| match block {
            Block::Markup(markup) => markup.len(),
            Block::Heading(heading) => heading.span.len() + 32,
        })
        .sum();
    let mut output = String::with_capacity(capacity);

    for (block_index, block) in blocks.iter().enumerate() {
        let heading = match block {
            Block::Markup(markup) => {
                output.push_str(markup);
                continue;
            }
            Block::Heading(heading) => heading,
        };

        let level = heading.level.min(3);
        output.push_str("<h");
        output.push(char::from(b'0' + level));

        match outline.anchor_for(block_index) {
            Some(id) => {
                output.push_str(" id=\"");
                output.push_str(id);
                output.push('"');
                output.push_str(&ID_ATTR_RE.replace_all(heading.attrs, ""));
            }
            None => output.push_str(heading.attrs),
        }

        output.push('>');
        output.push_str(heading.inner);
        output.push_str("</h");
        output.push(char::from(b'0' + level));
        output.push('>');
    }

    output
}
