//! Property-based tests for the rendering pipeline
//!
//! These tests check the invariants that hold for any body:
//! - slugs are deterministic and ASCII-only
//! - legacy TOC stripping is idempotent
//! - every TOC link has exactly one matching anchor
//! - no supported marker survives a full render

use proptest::prelude::*;
use vrachka_render::content_renderer::strip_legacy_toc;
use vrachka_render::{RenderConfig, render_body, slugify};

/// Heading-like text mixing Cyrillic, Latin, digits and punctuation
fn heading_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[а-яА-Я ]{1,20}",
        "[a-zA-Z0-9 ]{1,20}",
        "[а-яa-z0-9 ?!,.:-]{1,30}",
        // Repeats are common: "Любов", "Любов"
        Just("Любов".to_string()),
    ]
}

/// Body fragments, including every legacy TOC shape
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[а-яa-z ]{0,20}".prop_map(|t| format!("<p>{t}</p>")),
        heading_text_strategy().prop_map(|t| format!("<h2>{t}</h2>")),
        Just(r##"<nav class="article-toc"><ol><li><a href="#a">A</a></li></ol></nav>"##.to_string()),
        Just(r##"<div class="toc-box"><p>В тази статия</p><ul><li>A</li></ul></div>"##.to_string()),
        Just(r##"<h2>В тази статия</h2><ul><li><a href="#a">A</a></li></ul>"##.to_string()),
        Just("<h2>В тази статия</h2>".to_string()),
        Just("<ul><li><a href=\"#b\">B</a></li></ul>".to_string()),
    ]
}

/// One of the supported marker tokens
fn marker_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<!-- TOC -->".to_string()),
        (0usize..6).prop_map(|n| format!("<!-- IMAGE:{n} -->")),
        prop::sample::select(vec![
            "soft", "medium", "strong", "free", "feature", "conversion", "urgent",
        ])
        .prop_map(|kind| format!("<!-- CTA:{kind} -->")),
        "[а-яa-z ]{0,20}".prop_map(|t| format!("<!-- VRACHKA:quote:{t} -->")),
    ]
}

fn toc_links(html: &str) -> Vec<String> {
    html.split("href=\"#")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn test_slug_is_deterministic_and_ascii(text in "\\PC{0,40}") {
        let slug = slugify(&text);
        prop_assert_eq!(&slug, &slugify(&text));
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn test_legacy_strip_is_idempotent(fragments in prop::collection::vec(fragment_strategy(), 0..8)) {
        let body = fragments.concat();
        let once = strip_legacy_toc(&body).into_owned();
        let twice = strip_legacy_toc(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_toc_links_match_anchors(headings in prop::collection::vec(heading_text_strategy(), 0..10)) {
        let body: String = std::iter::once("<p>Увод</p>".to_string())
            .chain(headings.iter().map(|t| format!("<h2>{t}</h2><p>x</p>")))
            .collect();
        let rendered = render_body(&body, &[], "", &RenderConfig::default());

        let links = toc_links(&rendered.html);
        if rendered.headings.len() >= 2 {
            prop_assert_eq!(links.len(), rendered.headings.len());
        } else {
            prop_assert!(links.is_empty());
        }
        for id in links {
            let anchor = format!("id=\"{id}\"");
            prop_assert_eq!(rendered.html.matches(&anchor).count(), 1);
        }
    }

    #[test]
    fn test_no_marker_survives(
        parts in prop::collection::vec(prop_oneof![fragment_strategy(), marker_strategy()], 0..12)
    ) {
        let images = vec![
            "https://cdn.vrachka.eu/0.jpg".to_string(),
            "https://cdn.vrachka.eu/1.jpg".to_string(),
        ];
        let rendered = render_body(&parts.concat(), &images, "", &RenderConfig::default());
        prop_assert!(!rendered.html.contains("IMAGE:"));
        prop_assert!(!rendered.html.contains("CTA:"));
        prop_assert!(!rendered.html.contains("VRACHKA:quote:"));
        prop_assert!(!rendered.html.contains("<!-- TOC"));
    }
}
