//! Shared rendering constants
//!
//! Default values used by `RenderConfig` and by the rendering stages, kept in
//! one place so tests and the builder agree on them.

/// Default public site name used as Article author/publisher.
pub const DEFAULT_SITE_NAME: &str = "Vrachka";

/// Path prefix under which articles are published.
pub const DEFAULT_ARTICLES_PATH: &str = "/blog";

/// Content language advertised in the Article schema.
pub const DEFAULT_LANGUAGE: &str = "bg";

/// Heading shown above the generated table of contents.
pub const DEFAULT_TOC_TITLE: &str = "Съдържание";

/// First breadcrumb label.
pub const DEFAULT_HOME_LABEL: &str = "Начало";

/// Number of `IMAGE:n` markers that may reference the image list.
///
/// Position 0 of the image list is the hero image, so with a limit of 2 the
/// markers `IMAGE:1` and `IMAGE:2` map to the second and third images.
pub const DEFAULT_INLINE_IMAGE_LIMIT: usize = 2;

/// Search engines cut meta descriptions at roughly this many characters.
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 160;

/// Minimum number of anchored headings before a table of contents is emitted.
pub const MIN_TOC_HEADINGS: usize = 2;

/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Bodies larger than this skip the structural (heading/TOC) stages.
pub const MAX_STRUCTURAL_BODY_SIZE: usize = 10 * 1024 * 1024; // 10 MB

/// Heading phrases that open an FAQ section (compared lower-cased).
pub const DEFAULT_FAQ_PHRASES: &[&str] = &[
    "често задавани въпроси",
    "чести въпроси",
    "въпроси и отговори",
    "frequently asked questions",
    "faq",
];
