//! Heading text to anchor id.
//!
//! Transliteration follows the Bulgarian streamlined system (`ъ` -> `a`,
//! `щ` -> `sht`), extended with the Russian and Ukrainian letters that show up
//! in quoted names.

use std::collections::HashSet;

/// Latin replacement for a lower-case Cyrillic letter.
#[must_use]
pub fn transliterate_char(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sht",
        'ъ' => "a",
        'ь' => "y",
        'ю' => "yu",
        'я' => "ya",
        // Russian / Ukrainian
        'ё' => "yo",
        'ы' => "y",
        'э' => "e",
        'є' => "ye",
        'і' => "i",
        'ї' => "yi",
        'ґ' => "g",
        'ѝ' => "i",
        _ => return None,
    };
    Some(latin)
}

/// Anchor id for a heading.
///
/// Lower-cases, transliterates Cyrillic, drops everything outside
/// `[a-z0-9]`, whitespace and `-`, then turns whitespace runs into a single
/// hyphen and collapses hyphen runs. Leading and trailing hyphens are
/// dropped. An empty result means the heading cannot be anchored.
///
/// ```
/// # use vrachka_render::content_renderer::slugify;
/// assert_eq!(slugify("Въведение"), "vavedenie");
/// assert_eq!(slugify("Какво е таро?"), "kakvo-e-taro");
/// assert_eq!(slugify("★ ☆"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    // A separator is only written once the next kept character arrives, which
    // collapses runs and drops leading/trailing separators in one pass.
    let mut pending_separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            pending_separator = true;
            continue;
        }

        let latin = transliterate_char(c);
        if latin.is_none() && !c.is_ascii_lowercase() && !c.is_ascii_digit() {
            continue;
        }

        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;

        match latin {
            Some(latin) => slug.push_str(latin),
            None => slug.push(c),
        }
    }

    slug
}

/// Hands out anchor ids for one document.
///
/// With deduplication on, a slug seen before gets the first free `-2`, `-3`,
/// ... suffix in first-seen order, so distinct headings never share an id.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    taken: HashSet<String>,
    dedupe: bool,
}

impl SlugRegistry {
    #[must_use]
    pub fn new(dedupe: bool) -> Self {
        Self {
            taken: HashSet::new(),
            dedupe,
        }
    }

    /// Mark `id` as used without handing it out.
    pub fn reserve(&mut self, id: &str) {
        if !id.is_empty() {
            self.taken.insert(id.to_string());
        }
    }

    /// Anchor id for `text`, or `None` when the text has nothing to slug.
    pub fn claim(&mut self, text: &str) -> Option<String> {
        let slug = slugify(text);
        if slug.is_empty() {
            return None;
        }
        if !self.dedupe || self.taken.insert(slug.clone()) {
            return Some(slug);
        }

        let mut suffix = 2usize;
        loop {
            let candidate = format!("{slug}-{suffix}");
            if self.taken.insert(candidate.clone()) {
                log::trace!("Anchor id '{slug}' already used, assigned '{candidate}'");
                return Some(candidate);
            }
            suffix += 1;
        }
    }
}
