//! Flat block scan of an article body.
//!
//! Splits the body into heading elements (`h2`..`h4`) and the markup between
//! them. Heading extraction, heading rewriting and FAQ detection all walk the
//! same block list, so a heading can never be seen by one stage and missed by
//! another. Markup between headings is kept byte-for-byte.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

use crate::utils::plain_text;

/// One alternative per level: the `regex` crate has no backreferences, and
/// `<h2>...</h3>` must not count as a heading. Comments are matched first and
/// skipped, so markup inside a marker payload is never a heading.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--.*?-->|<h2\b([^>]*)>(.*?)</h2\s*>|<h3\b([^>]*)>(.*?)</h3\s*>|<h4\b([^>]*)>(.*?)</h4\s*>",
    )
    .expect("HEADING_RE: hardcoded regex is valid")
});

/// A heading element found in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingBlock<'a> {
    /// Tag level as written: 2, 3 or 4
    pub level: u8,
    /// Raw attribute text between the tag name and `>`, leading space included
    pub attrs: &'a str,
    /// Raw inner markup
    pub inner: &'a str,
    /// Visible text: nested markup stripped, entities decoded, whitespace collapsed
    pub text: String,
    /// Byte range of the whole element in the scanned body
    pub span: Range<usize>,
}

/// A run of the body: either a heading or untouched markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Markup(&'a str),
    Heading(HeadingBlock<'a>),
}

impl<'a> Block<'a> {
    #[must_use]
    pub fn as_heading(&self) -> Option<&HeadingBlock<'a>> {
        match self {
            Block::Heading(heading) => Some(heading),
            Block::Markup(_) => None,
        }
    }
}

fn heading_from_captures<'a>(caps: &Captures<'a>) -> Option<HeadingBlock<'a>> {
    let whole = caps.get(0)?;
    let (level, attrs, inner) = [(2u8, 1usize), (3, 3), (4, 5)]
        .into_iter()
        .find_map(|(level, group)| {
            let attrs = caps.get(group)?;
            let inner = caps.get(group + 1)?;
            Some((level, attrs.as_str(), inner.as_str()))
        })?;

    Some(HeadingBlock {
        level,
        attrs,
        inner,
        text: plain_text(inner),
        span: whole.range(),
    })
}

/// Scan `html` into blocks in document order.
///
/// Concatenating the raw text of every block reproduces `html` exactly.
pub fn parse_blocks(html: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut last_end = 0;

    for caps in HEADING_RE.captures_iter(html) {
        let Some(heading) = heading_from_captures(&caps) else {
            continue;
        };
        if heading.span.start > last_end {
            blocks.push(Block::Markup(&html[last_end..heading.span.start]));
        }
        last_end = heading.span.end;
        blocks.push(Block::Heading(heading));
    }

    if last_end < html.len() {
        blocks.push(Block::Markup(&html[last_end..]));
    }

    blocks
}
