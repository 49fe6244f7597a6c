//! Placement of the table of contents in the body.

use regex::Regex;
use std::sync::LazyLock;

use crate::content_renderer::markers::{MarkerKind, replace_tokens, tokenize};

/// Comments are matched first and skipped, so a `</p>` inside a marker
/// payload is never taken for the end of the first paragraph.
static PARAGRAPH_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|</p\s*>").expect("PARAGRAPH_CLOSE_RE: hardcoded regex is valid")
});

/// Place `toc_html` in `html`.
///
/// Every `<!-- TOC -->` marker is replaced with the fragment, even when the
/// fragment is empty. Without a marker the fragment goes right after the first
/// `</p>` outside a comment, or at the very start when the body has no paragraph.
pub fn inject_toc(html: &str, toc_html: &str) -> String {
    let tokens: Vec<_> = tokenize(html)
        .into_iter()
        .filter(|token| token.kind == MarkerKind::Toc)
        .collect();

    if !tokens.is_empty() {
        tracing::trace!(markers = tokens.len(), "Placing table of contents at marker");
        return replace_tokens(html, &tokens, |_| Some(toc_html.to_string()));
    }

    if toc_html.is_empty() {
        return html.to_string();
    }

    let first_close = PARAGRAPH_CLOSE_RE
        .find_iter(html)
        .find(|found| !found.as_str().starts_with("<!--"));

    match first_close {
        Some(close) => {
            let mut output = String::with_capacity(html.len() + toc_html.len());
            output.push_str(&html[..close.end()]);
            output.push_str(toc_html);
            output.push_str(&html[close.end()..]);
            output
        }
        None => format!("{toc_html}{html}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOC: &str = "<nav class=\"article-toc\"></nav>";

    #[test]
    fn marker_takes_precedence_over_first_paragraph() {
        let html = "<p>Увод</p><h2>A</h2><!-- TOC --><h2>B</h2>";
        assert_eq!(
            inject_toc(html, TOC),
            format!("<p>Увод</p><h2>A</h2>{TOC}<h2>B</h2>")
        );
    }

    #[test]
    fn every_marker_gets_the_fragment() {
        let out = inject_toc("<!-- TOC --><p>a</p><!-- TOC -->", TOC);
        assert_eq!(out, format!("{TOC}<p>a</p>{TOC}"));
    }

    #[test]
    fn marker_in_own_paragraph_loses_wrapper() {
        let out = inject_toc("<p>a</p><p><!-- TOC --></p><h2>B</h2>", TOC);
        assert_eq!(out, format!("<p>a</p>{TOC}<h2>B</h2>"));
    }

    #[test]
    fn marker_with_empty_fragment_is_removed() {
        assert_eq!(inject_toc("<p>a</p><!-- TOC -->", ""), "<p>a</p>");
    }

    #[test]
    fn falls_back_to_after_first_paragraph() {
        let out = inject_toc("<p>Първи</p><p>Втори</p>", TOC);
        assert_eq!(out, format!("<p>Първи</p>{TOC}<p>Втори</p>"));
    }

    #[test]
    fn paragraph_inside_marker_comment_is_not_first_paragraph() {
        let html = "<!-- VRACHKA:quote:<p>цитат</p> --><p>Увод</p><h2>A</h2>";
        assert_eq!(
            inject_toc(html, TOC),
            format!("<!-- VRACHKA:quote:<p>цитат</p> --><p>Увод</p>{TOC}<h2>A</h2>")
        );
    }

    #[test]
    fn prepends_without_paragraphs() {
        assert_eq!(inject_toc("<h2>A</h2>", TOC), format!("{TOC}<h2>A</h2>"));
    }

    #[test]
    fn other_markers_are_left_for_expansion() {
        let html = "<p>a</p><!-- IMAGE:1 -->";
        assert_eq!(inject_toc(html, TOC), format!("<p>a</p>{TOC}<!-- IMAGE:1 -->"));
    }

    #[test]
    fn empty_fragment_without_marker_is_a_no_op() {
        assert_eq!(inject_toc("<p>a</p>", ""), "<p>a</p>");
    }
}
