//! Legacy `CTA:<kind>` markers.
//!
//! Older articles carried call-to-action placeholders instead of inline
//! links. The set of kinds is closed; new articles do not use them.

use super::Expansion;

/// `(kind, snippet)` for every supported call to action.
static CTA_SNIPPETS: &[(&str, &str)] = &[
    (
        "soft",
        r#"<aside class="vrachka-cta vrachka-cta--soft"><p>Любопитни сте какво ви очаква днес? <a href="/horoscope">Вижте дневния си хороскоп</a>.</p></aside>"#,
    ),
    (
        "medium",
        r#"<aside class="vrachka-cta vrachka-cta--medium"><p>Задайте въпроса си на картите. <a href="/tarot">Изтеглете карта Таро</a> още сега.</p></aside>"#,
    ),
    (
        "strong",
        r#"<aside class="vrachka-cta vrachka-cta--strong"><p><strong>Получете личен прочит.</strong> <a class="vrachka-cta__button" href="/register">Създайте безплатен профил</a></p></aside>"#,
    ),
    (
        "free",
        r#"<aside class="vrachka-cta vrachka-cta--free"><p>Изчислете числото на съдбата си <strong>безплатно</strong>. <a href="/numerology">Към нумерологията</a></p></aside>"#,
    ),
    (
        "feature",
        r#"<aside class="vrachka-cta vrachka-cta--feature"><p>Хороскопи, Таро и нумерология на едно място. <a href="/register">Регистрирайте се</a> и опитайте всичко.</p></aside>"#,
    ),
    (
        "conversion",
        r#"<aside class="vrachka-cta vrachka-cta--conversion"><p>Отключете подробните прогнози с премиум план. <a class="vrachka-cta__button" href="/pricing">Вижте плановете</a></p></aside>"#,
    ),
    (
        "urgent",
        r#"<aside class="vrachka-cta vrachka-cta--urgent"><p><strong>Ограничена оферта:</strong> премиум достъп на специална цена. <a class="vrachka-cta__button" href="/pricing?offer=limited">Вземете офертата</a></p></aside>"#,
    ),
];

/// Snippet for a CTA kind, matched case-insensitively.
#[must_use]
pub fn cta_snippet(kind: &str) -> Option<&'static str> {
    CTA_SNIPPETS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(kind))
        .map(|(_, snippet)| *snippet)
}

pub(super) fn expand_cta(kind: &str) -> Expansion {
    match cta_snippet(kind) {
        Some(snippet) => Expansion::Replace(snippet.to_string()),
        None => {
            tracing::debug!(kind, "Unknown CTA kind, leaving marker in place");
            Expansion::Keep
        }
    }
}
