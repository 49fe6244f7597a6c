//! Article body rendering pipeline.
//!
//! Stages, in order:
//!
//! 1. unwrap the legacy JSON envelope
//! 2. strip hard-coded legacy tables of contents
//! 3. scan the body into heading and markup blocks
//! 4. extract the heading outline and build the TOC
//! 5. rewrite headings with anchor ids
//! 6. place the TOC
//! 7. expand quote, CTA and image markers
//!
//! Every stage is a pure string transform; nothing here can fail. Bad input
//! degrades to less enhancement (no TOC, no FAQ) rather than an error.

pub mod headings;
pub mod html_preprocessing;
pub mod markers;
pub mod toc;

use serde::Serialize;

use crate::article::Article;
use crate::config::RenderConfig;
use crate::structured_data::{
    ArticleMetadata, StructuredDataBundle, assemble_structured_data, extract_faq,
};
use crate::utils::{MAX_STRUCTURAL_BODY_SIZE, WORDS_PER_MINUTE, word_count};

pub use headings::{HeadingLevel, HeadingRecord, slugify};
pub use html_preprocessing::{normalize_content, strip_legacy_toc};
pub use markers::{ExpansionContext, expand_markers};
pub use toc::{build_toc_html, inject_toc};

/// Display-ready body plus what the page needs around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedContent {
    /// Fully expanded, TOC-injected, anchor-tagged markup
    pub html: String,
    /// Anchored headings in document order, as linked from the TOC
    pub headings: Vec<HeadingRecord>,
    pub word_count: usize,
    /// Reading time at 200 words per minute, never below 1
    pub reading_minutes: usize,
}

/// Rendered body and its structured data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedArticle {
    pub content: RenderedContent,
    pub structured_data: StructuredDataBundle,
}

fn reading_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Run the body stages on an already normalized body.
fn render_normalized(
    body: &str,
    image_urls: &[String],
    image_alt: &str,
    config: &RenderConfig,
) -> RenderedContent {
    let ctx = ExpansionContext {
        image_urls,
        image_limit: config.inline_image_limit(),
        image_alt,
    };

    if body.len() > MAX_STRUCTURAL_BODY_SIZE {
        tracing::warn!(
            size = body.len(),
            limit = MAX_STRUCTURAL_BODY_SIZE,
            "Body too large for heading and TOC stages, expanding markers only"
        );
        let words = word_count(body);
        return RenderedContent {
            html: expand_markers(body, &ctx),
            headings: Vec::new(),
            word_count: words,
            reading_minutes: reading_minutes(words),
        };
    }

    let stripped = strip_legacy_toc(body);
    let blocks = html_preprocessing::parse_blocks(&stripped);
    let outline = headings::extract_headings(&blocks, config.dedupe_anchor_ids());

    let toc_html = if config.toc_enabled() {
        build_toc_html(outline.records(), config.toc_title())
    } else {
        String::new()
    };

    let rewritten = headings::rewrite_headings(&blocks, &outline);
    let placed = inject_toc(&rewritten, &toc_html);
    let html = expand_markers(&placed, &ctx);

    let words = word_count(&stripped);
    tracing::trace!(
        input = body.len(),
        output = html.len(),
        headings = outline.len(),
        words,
        "Rendered article body"
    );

    RenderedContent {
        html,
        headings: outline.into_records(),
        word_count: words,
        reading_minutes: reading_minutes(words),
    }
}

/// Render a stored body to display markup.
///
/// `image_urls` follows the article convention (position 0 is the hero
/// image); `image_alt` becomes the alt text of inline images.
///
/// ```
/// # use vrachka_render::config::RenderConfig;
/// # use vrachka_render::content_renderer::render_body;
/// let config = RenderConfig::default();
/// let rendered = render_body("<p>Увод</p><h2>Едно</h2><h2>Две</h2>", &[], "", &config);
/// assert!(rendered.html.contains("<h2 id=\"edno\">"));
/// assert!(rendered.html.contains("href=\"#dve\""));
/// assert_eq!(rendered.headings.len(), 2);
/// ```
#[must_use]
pub fn render_body(
    body: &str,
    image_urls: &[String],
    image_alt: &str,
    config: &RenderConfig,
) -> RenderedContent {
    let normalized = normalize_content(body);
    render_normalized(&normalized, image_urls, image_alt, config)
}

/// Render an article body and build its structured data.
///
/// The FAQ block and the derived description read the normalized body as
/// stored, before any heading is rewritten.
#[must_use]
pub fn render_article(article: &Article, config: &RenderConfig) -> RenderedArticle {
    let normalized = normalize_content(&article.content);
    let content = render_normalized(&normalized, &article.image_urls, &article.title, config);

    let faq = extract_faq(&normalized, config.faq_phrases());
    let metadata = ArticleMetadata::from_article(article, &normalized, content.word_count, config);
    let structured_data = assemble_structured_data(&metadata, faq.as_deref(), config);

    tracing::debug!(
        slug = %article.slug,
        headings = content.headings.len(),
        faq = structured_data.faq.is_some(),
        "Rendered article"
    );

    RenderedArticle {
        content,
        structured_data,
    }
}
