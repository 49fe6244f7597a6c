//! Marker token expansion.
//!
//! One tokenizer pass finds every marker; each token is then handed to the
//! expander for its kind. Expansion runs after the structural stages, so the
//! generated markup is never seen by heading or TOC scanning.

mod cta;
mod image;
mod quote;
pub mod tokenizer;

pub use cta::cta_snippet;
pub use tokenizer::{MarkerKind, MarkerToken, replace_tokens, tokenize};

/// Side inputs the expanders read.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionContext<'a> {
    /// Article images; position 0 is the hero image
    pub image_urls: &'a [String],
    /// Highest `IMAGE:n` index that resolves
    pub image_limit: usize,
    /// Alt text for inline images
    pub image_alt: &'a str,
}

/// What to do with one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Replace(String),
    /// Drop the marker and its paragraph wrapper
    Remove,
    /// Leave the marker text as it is
    Keep,
}

impl Expansion {
    fn into_replacement(self) -> Option<String> {
        match self {
            Expansion::Replace(html) => Some(html),
            Expansion::Remove => Some(String::new()),
            Expansion::Keep => None,
        }
    }
}

/// Expander for a single token.
pub fn expand_token(kind: MarkerKind<'_>, ctx: &ExpansionContext<'_>) -> Expansion {
    match kind {
        // Injection has already placed the TOC; anything left is stale.
        MarkerKind::Toc => Expansion::Remove,
        MarkerKind::Image(index) => image::expand_image(index, ctx),
        MarkerKind::Cta(kind) => cta::expand_cta(kind),
        MarkerKind::Quote(text) => quote::expand_quote(text),
    }
}

/// Replace every marker in `html`, left to right.
///
/// Only unknown `CTA:<kind>` markers survive.
pub fn expand_markers(html: &str, ctx: &ExpansionContext<'_>) -> String {
    let tokens = tokenize(html);
    if tokens.is_empty() {
        return html.to_string();
    }
    tracing::trace!(count = tokens.len(), "Expanding marker tokens");
    replace_tokens(html, &tokens, |token| {
        expand_token(token.kind, ctx).into_replacement()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(html: &str, urls: &[String]) -> String {
        let ctx = ExpansionContext {
            image_urls: urls,
            image_limit: 2,
            image_alt: "Таро",
        };
        expand_markers(html, &ctx)
    }

    #[test]
    fn expands_all_kinds_in_one_pass() {
        let urls = vec!["hero.jpg".to_string(), "one.jpg".to_string()];
        let html = "<p>a</p><!-- IMAGE:1 --><!-- CTA:soft --><!-- VRACHKA:quote:Цитат --><!-- IMAGE:2 -->";
        let out = expand(html, &urls);
        assert!(out.contains("<img src=\"one.jpg\""));
        assert!(out.contains("vrachka-cta--soft"));
        assert!(out.contains("<p>Цитат</p>"));
        assert!(!out.contains("<!--"));
    }

    #[test]
    fn adjacent_markers_expand_independently() {
        let out = expand("<!-- VRACHKA:quote:a --><!-- VRACHKA:quote:b -->", &[]);
        assert_eq!(out.matches("<blockquote").count(), 2);
    }

    #[test]
    fn lone_image_marker_paragraph_is_replaced_whole() {
        let urls = vec!["hero.jpg".to_string(), "one.jpg".to_string()];
        let out = expand("<p>a</p><p><!-- IMAGE:1 --></p>", &urls);
        assert!(out.starts_with("<p>a</p><figure"));
        assert!(out.ends_with("</figure>"));
    }

    #[test]
    fn removed_marker_leaves_no_empty_paragraph() {
        assert_eq!(expand("<p>a</p><p><!-- IMAGE:2 --></p><p>b</p>", &[]), "<p>a</p><p>b</p>");
    }

    #[test]
    fn unknown_cta_and_plain_comments_survive() {
        let html = "<!-- CTA:mystery --><!-- бележка -->";
        assert_eq!(expand(html, &[]), html);
    }

    #[test]
    fn stale_toc_marker_is_removed() {
        assert_eq!(expand("<p>a</p><!-- TOC -->", &[]), "<p>a</p>");
    }

    #[test]
    fn markerless_body_is_unchanged() {
        assert_eq!(expand("<p>Нищо особено</p>", &[]), "<p>Нищо особено</p>");
    }
}
