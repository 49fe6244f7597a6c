//! Single-pass scanner for comment-style marker tokens.
//!
//! Recognised payloads, each inside `<!-- ... -->`:
//!
//! - `TOC`
//! - `IMAGE:<n>`
//! - `CTA:<kind>`
//! - `VRACHKA:quote:<text>` (text runs to the first `-->`)
//!
//! Tokens come out left to right and never overlap. A marker that is the only
//! content of a paragraph (`<p><!-- IMAGE:1 --></p>`) swallows the wrapper,
//! since every expansion is block-level markup that cannot sit inside `<p>`.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--\s*(?:(TOC)|IMAGE:(\d+)|CTA:([a-z_-]+)|VRACHKA:quote:(.*?))\s*-->",
    )
    .expect("MARKER_RE: hardcoded regex is valid")
});

static OPEN_PARAGRAPH_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<p(?:\s[^>]*)?>\s*$").expect("OPEN_PARAGRAPH_TAIL_RE: hardcoded regex is valid")
});

static CLOSE_PARAGRAPH_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*</p\s*>").expect("CLOSE_PARAGRAPH_HEAD_RE: hardcoded regex is valid")
});

/// What a marker asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind<'a> {
    Toc,
    /// `IMAGE:n`; numbers too large for `usize` saturate and never resolve
    Image(usize),
    /// `CTA:kind`, kind as written
    Cta(&'a str),
    /// `VRACHKA:quote:text`, text trimmed
    Quote(&'a str),
}

/// A recognised marker and the byte range it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerToken<'a> {
    pub kind: MarkerKind<'a>,
    /// Range to replace, including a swallowed `<p>...</p>` wrapper
    pub span: Range<usize>,
    /// Exact source text of the marker comment itself
    pub source: &'a str,
}

/// Marker tokens of `html` in document order.
pub fn tokenize(html: &str) -> Vec<MarkerToken<'_>> {
    MARKER_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = if caps.get(1).is_some() {
                MarkerKind::Toc
            } else if let Some(n) = caps.get(2) {
                MarkerKind::Image(n.as_str().parse().unwrap_or(usize::MAX))
            } else if let Some(kind) = caps.get(3) {
                MarkerKind::Cta(kind.as_str())
            } else {
                MarkerKind::Quote(caps.get(4)?.as_str().trim())
            };

            Some(MarkerToken {
                kind,
                span: paragraph_span(html, whole.range()),
                source: whole.as_str(),
            })
        })
        .collect()
}

/// Longest `<p ...>` plus whitespace looked at before a marker.
const WRAPPER_LOOKBEHIND: usize = 256;

/// Widen `span` to a `<p>` wrapper that holds nothing but the marker.
fn paragraph_span(html: &str, span: Range<usize>) -> Range<usize> {
    let mut tail_start = span.start.saturating_sub(WRAPPER_LOOKBEHIND);
    while !html.is_char_boundary(tail_start) {
        tail_start -= 1;
    }
    let before = &html[tail_start..span.start];
    let after = &html[span.end..];
    match (
        OPEN_PARAGRAPH_TAIL_RE.find(before),
        CLOSE_PARAGRAPH_HEAD_RE.find(after),
    ) {
        (Some(open), Some(close)) => tail_start + open.start()..span.end + close.end(),
        _ => span,
    }
}

/// Rebuild `html`, letting `replace` decide each token's output.
///
/// Returning `None` keeps the token's original text (wrapper included).
pub fn replace_tokens<'a, F>(html: &'a str, tokens: &[MarkerToken<'a>], mut replace: F) -> String
where
    F: FnMut(&MarkerToken<'a>) -> Option<String>,
{
    let mut output = String::with_capacity(html.len());
    let mut last_end = 0;

    for token in tokens {
        // Swallowed wrappers of adjacent markers can touch; never go backwards.
        if token.span.start < last_end {
            continue;
        }
        output.push_str(&html[last_end..token.span.start]);
        match replace(token) {
            Some(replacement) => output.push_str(&replacement),
            None => output.push_str(&html[token.span.clone()]),
        }
        last_end = token.span.end;
    }

    output.push_str(&html[last_end..]);
    output
}
