//! Removal of table-of-contents blocks that older articles carry inline.
//!
//! Earlier article templates hard-coded their own "В тази статия" block. The
//! pipeline now generates a table of contents on every render, so the stored
//! copies have to go or the page shows two. Only a closed set of shapes is
//! recognised; each one needs both the fixed heading text and a wrapper that
//! only a generated TOC would have, so ordinary prose that happens to say
//! "в тази статия" is left alone.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// ============================================================================
// Legacy TOC shapes
// ============================================================================

/// `<nav class="article-toc">...</nav>`: the block this crate itself emits,
/// plus the `table-of-contents` variant used by the first site template.
static NAV_TOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<nav\b[^>]*\bclass\s*=\s*["'][^"']*\b(?:article-toc|table-of-contents)\b[^"']*["'][^>]*>.*?</nav\s*>"#,
    )
    .expect("NAV_TOC_RE: hardcoded regex is valid")
});

/// `<div class="toc-box">` with a fixed title followed by one list.
static DIV_TOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<div\b[^>]*\bclass\s*=\s*["'][^"']*\b(?:toc-box|article-contents|in-this-article)\b[^"']*["'][^>]*>\s*<(?:h[2-4]|p|strong|div)\b[^>]*>\s*(?:<strong>\s*)?(?:В тази статия|Съдържание|In this article|Table of contents)\s*:?\s*(?:</strong>\s*)?</(?:h[2-4]|p|strong|div)\s*>\s*<(?:ul|ol)\b[^>]*>.*?</(?:ul|ol)\s*>\s*</div\s*>"#,
    )
    .expect("DIV_TOC_RE: hardcoded regex is valid")
});

/// Bare `<h2>В тази статия</h2>` followed by a list made only of in-page
/// anchor links. A heading with the same words followed by real content does
/// not match. A run of repeated title headings goes with the list in one
/// match.
static HEADING_TOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)(?:<h[23]\b[^>]*>\s*(?:В тази статия|Съдържание на статията|In this article)\s*:?\s*</h[23]\s*>\s*)+<(?:ul|ol)\b[^>]*>(?:\s*<li\b[^>]*>\s*<a\s+href\s*=\s*["']#[^"']*["'][^>]*>[^<]*</a>\s*</li\s*>)+\s*</(?:ul|ol)\s*>"#,
    )
    .expect("HEADING_TOC_RE: hardcoded regex is valid")
});

/// Upper bound on full passes over the body. Legacy blocks never nest, so
/// real articles settle in one or two.
const MAX_STRIP_PASSES: usize = 4;

/// Remove every recognised legacy table of contents from `html`.
///
/// Passes repeat until nothing matches, so removing one block can never
/// expose another and `strip(strip(x)) == strip(x)` holds. Passes are capped
/// at [`MAX_STRIP_PASSES`] so crafted nesting stays linear.
pub fn strip_legacy_toc(html: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(html);
    for pass in 1..=MAX_STRIP_PASSES {
        let mut changed = false;
        for pattern in [&*NAV_TOC_RE, &*DIV_TOC_RE, &*HEADING_TOC_RE] {
            let stripped = match pattern.replace_all(&current, "") {
                Cow::Owned(stripped) => Some(stripped),
                Cow::Borrowed(_) => None,
            };
            if let Some(stripped) = stripped {
                current = Cow::Owned(stripped);
                changed = true;
            }
        }
        if !changed {
            break;
        }
        tracing::debug!(pass, "Removed legacy table of contents block");
        if pass == MAX_STRIP_PASSES {
            tracing::debug!(passes = MAX_STRIP_PASSES, "Legacy TOC stripping hit pass limit");
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV_SHAPE: &str = r##"<nav class="article-toc" aria-label="Съдържание"><div class="article-toc__title">Съдържание</div><ol><li><a href="#a">A</a></li></ol></nav>"##;

    #[test]
    fn removes_generated_nav_toc() {
        let html = format!("<p>Увод</p>{NAV_SHAPE}<h2>A</h2>");
        assert_eq!(strip_legacy_toc(&html), "<p>Увод</p><h2>A</h2>");
    }

    #[test]
    fn removes_div_shape_with_fixed_title() {
        let html = r##"<div class="toc-box"><p><strong>В тази статия:</strong></p><ul><li><a href="#x">X</a></li><li>Y</li></ul></div><p>Текст</p>"##;
        assert_eq!(strip_legacy_toc(html), "<p>Текст</p>");
    }

    #[test]
    fn removes_bare_heading_with_anchor_list() {
        let html = r##"<p>Начало</p><h2>В тази статия</h2>
<ul>
  <li><a href="#purvo">Първо</a></li>
  <li><a href="#vtoro">Второ</a></li>
</ul><h2 id="purvo">Първо</h2>"##;
        assert_eq!(
            strip_legacy_toc(html),
            r#"<p>Начало</p><h2 id="purvo">Първо</h2>"#
        );
    }

    #[test]
    fn keeps_heading_with_similar_words_and_real_content() {
        let html = "<h2>В тази статия</h2><p>ще разгледаме Луната.</p><ul><li>Фази</li></ul>";
        assert_eq!(strip_legacy_toc(html), html);
    }

    #[test]
    fn keeps_list_of_external_links_after_fixed_heading() {
        let html = r#"<h2>В тази статия</h2><ul><li><a href="https://example.com">Източник</a></li></ul>"#;
        assert_eq!(strip_legacy_toc(html), html);
    }

    #[test]
    fn keeps_div_without_toc_wrapper_class() {
        let html = r##"<div class="note"><p>Съдържание</p><ul><li><a href="#a">A</a></li></ul></div>"##;
        assert_eq!(strip_legacy_toc(html), html);
    }

    #[test]
    fn stripping_is_idempotent() {
        let html = format!("{NAV_SHAPE}<p>a</p>{NAV_SHAPE}<h2>В тази статия</h2><ol><li><a href='#z'>Z</a></li></ol>");
        let once = strip_legacy_toc(&html).into_owned();
        let twice = strip_legacy_toc(&once).into_owned();
        assert_eq!(once, "<p>a</p>");
        assert_eq!(once, twice);
    }

    #[test]
    fn repeated_title_headings_go_with_their_list() {
        let html = format!(
            "<p>a</p>{}{}<p>b</p>",
            "<h2>В тази статия</h2>".repeat(50),
            r##"<ul><li><a href="#a">A</a></li></ul>"##.repeat(50),
        );
        let once = strip_legacy_toc(&html).into_owned();
        assert!(!once.contains("В тази статия"));
        assert!(once.starts_with("<p>a</p><ul>"));
        assert_eq!(strip_legacy_toc(&once), once);
    }

    #[test]
    fn untouched_input_is_borrowed() {
        assert!(matches!(strip_legacy_toc("<p>x</p>"), Cow::Borrowed(_)));
    }
}
