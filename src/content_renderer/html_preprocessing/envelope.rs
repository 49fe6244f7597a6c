//! Unwrapping of bodies stored in the old `{"content": "<html>"}` shape.

use serde_json::Value;
use std::borrow::Cow;

/// Return the markup of a stored body, unwrapping the legacy JSON envelope.
///
/// A body is only treated as an envelope when, after trimming, it starts with
/// `{` and mentions `"content"`. Anything that fails to parse, is not an
/// object, or has a non-string `content` field is returned unchanged.
///
/// ```
/// # use vrachka_render::content_renderer::normalize_content;
/// assert_eq!(normalize_content(r#"{"content":"<p>hi</p>"}"#), "<p>hi</p>");
/// assert_eq!(normalize_content("<p>hi</p>"), "<p>hi</p>");
/// assert_eq!(normalize_content("{not json"), "{not json");
/// ```
pub fn normalize_content(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('{') || !trimmed.contains("\"content\"") {
        return Cow::Borrowed(raw);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("content") {
            Some(Value::String(content)) => Cow::Owned(content.clone()),
            _ => {
                tracing::debug!("Envelope has no string `content` field, using body as-is");
                Cow::Borrowed(raw)
            }
        },
        Ok(_) => Cow::Borrowed(raw),
        Err(e) => {
            tracing::debug!("Body looks like a JSON envelope but does not parse: {e}");
            Cow::Borrowed(raw)
        }
    }
}
