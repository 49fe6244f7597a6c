//! UTF-8-safe text helpers shared by the schema and outline stages.

use scraper::Html;

/// Truncate to at most `max_chars` characters, preferring the last word boundary.
///
/// Never splits a multi-byte character: Cyrillic text is two bytes per letter,
/// so byte slicing would panic on most article bodies. Trailing whitespace and
/// punctuation before the cut are trimmed.
///
/// ```
/// # use vrachka_render::utils::truncate_at_word_boundary;
/// assert_eq!(truncate_at_word_boundary("Здравей, свят на звездите", 14), "Здравей, свят");
/// assert_eq!(truncate_at_word_boundary("Кратко", 100), "Кратко");
/// ```
pub fn truncate_at_word_boundary(s: &str, max_chars: usize) -> &str {
    let max_byte_idx = match s.char_indices().nth(max_chars) {
        None => return s,
        Some((idx, _)) => idx,
    };

    // A boundary right at the cut keeps the whole last word.
    let cut_on_boundary = s[max_byte_idx..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    let end = if cut_on_boundary {
        max_byte_idx
    } else {
        s[..max_byte_idx]
            .rfind(char::is_whitespace)
            .unwrap_or(max_byte_idx)
    };

    s[..end].trim_end_matches(|c: char| c.is_whitespace() || ",;:-".contains(c))
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of an HTML fragment with entities decoded and whitespace collapsed.
///
/// Uses the html5ever tokenizer behind `scraper`, so unclosed or misnested
/// tags still yield their text instead of leaking markup.
pub fn plain_text(html: &str) -> String {
    if !html.contains('<') && !html.contains('&') {
        return collapse_whitespace(html);
    }
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    collapse_whitespace(&text)
}

/// Number of whitespace-separated words in the visible text of `html`.
///
/// Counted per text node, so adjacent blocks (`</p><h2>`) never glue their
/// words together.
pub fn word_count(html: &str) -> usize {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .flat_map(str::split_whitespace)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_cyrillic_boundaries() {
        let text = "Въведение в таро картите и тяхното значение";
        let cut = truncate_at_word_boundary(text, 20);
        assert_eq!(cut, "Въведение в таро");
        assert!(text.starts_with(cut));
    }

    #[test]
    fn truncation_without_boundary_cuts_at_limit() {
        assert_eq!(truncate_at_word_boundary("абвгдежзий", 4), "абвг");
    }

    #[test]
    fn truncation_keeps_word_ending_exactly_at_limit() {
        assert_eq!(truncate_at_word_boundary("един два три", 8), "един два");
    }

    #[test]
    fn plain_text_strips_nested_markup_and_entities() {
        assert_eq!(
            plain_text("<strong>Какво</strong> е &amp; <em>таро</em>?"),
            "Какво е & таро?"
        );
        assert_eq!(plain_text("  просто   текст "), "просто текст");
    }

    #[test]
    fn plain_text_survives_unclosed_tags() {
        assert_eq!(plain_text("<b>Въпрос <i>без край"), "Въпрос без край");
    }

    #[test]
    fn word_count_ignores_markup() {
        assert_eq!(word_count("<p>Едно две</p><h2>три</h2>"), 3);
        assert_eq!(word_count(""), 0);
    }
}
