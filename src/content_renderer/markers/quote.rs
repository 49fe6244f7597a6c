//! `VRACHKA:quote:<text>` markers.

use super::Expansion;

const QUOTE_AUTHOR: &str = "Врачката";

/// Styled pull quote around `text`.
///
/// The text is inserted as written; article bodies come from the editorial
/// pipeline, not from readers.
pub(super) fn expand_quote(text: &str) -> Expansion {
    if text.is_empty() {
        return Expansion::Remove;
    }
    Expansion::Replace(format!(
        "<blockquote class=\"vrachka-quote\"><p>{text}</p><cite class=\"vrachka-quote__author\">{QUOTE_AUTHOR}</cite></blockquote>"
    ))
}
