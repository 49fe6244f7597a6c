//! `IMAGE:<n>` markers.
//!
//! Position 0 of the image list is the hero image and is never referenced;
//! `IMAGE:1` and `IMAGE:2` point at positions 1 and 2.

use html_escape::encode_double_quoted_attribute;

use super::{Expansion, ExpansionContext};

pub(super) fn expand_image(index: usize, ctx: &ExpansionContext<'_>) -> Expansion {
    if index == 0 || index > ctx.image_limit {
        tracing::debug!(index, "Inline image index out of range, removing marker");
        return Expansion::Remove;
    }

    match ctx
        .image_urls
        .get(index)
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
    {
        Some(url) => Expansion::Replace(format!(
            "<figure class=\"article-image\"><img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" decoding=\"async\"></figure>",
            src = encode_double_quoted_attribute(url),
            alt = encode_double_quoted_attribute(ctx.image_alt),
        )),
        None => {
            tracing::debug!(index, "No image at marker index, removing marker");
            Expansion::Remove
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> Vec<String> {
        vec![
            "https://cdn.vrachka.eu/hero.jpg".to_string(),
            "https://cdn.vrachka.eu/one.jpg?w=800&h=600".to_string(),
            "  ".to_string(),
        ]
    }

    fn ctx(urls: &[String]) -> ExpansionContext<'_> {
        ExpansionContext {
            image_urls: urls,
            image_limit: 2,
            image_alt: "Луна \"нова\"",
        }
    }

    #[test]
    fn first_marker_uses_second_url() {
        let urls = urls();
        let Expansion::Replace(html) = expand_image(1, &ctx(&urls)) else {
            panic!("IMAGE:1 must expand");
        };
        assert!(html.contains("src=\"https://cdn.vrachka.eu/one.jpg?w=800&amp;h=600\""));
        assert!(html.contains("alt=\"Луна &quot;нова&quot;\""));
        assert!(!html.contains("hero.jpg"));
    }

    #[test]
    fn blank_or_missing_url_removes_marker() {
        let urls = urls();
        assert_eq!(expand_image(2, &ctx(&urls)), Expansion::Remove);
        let short = vec!["https://cdn.vrachka.eu/hero.jpg".to_string()];
        assert_eq!(expand_image(1, &ctx(&short)), Expansion::Remove);
    }

    #[test]
    fn hero_and_over_limit_indexes_are_removed() {
        let mut urls = urls();
        urls.push("https://cdn.vrachka.eu/three.jpg".to_string());
        assert_eq!(expand_image(0, &ctx(&urls)), Expansion::Remove);
        assert_eq!(expand_image(3, &ctx(&urls)), Expansion::Remove);
        assert_eq!(expand_image(usize::MAX, &ctx(&urls)), Expansion::Remove);
    }
}
