//! Core configuration type for article rendering

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::Context;

use crate::error::ConfigResult;
use crate::utils::{
    DEFAULT_ARTICLES_PATH, DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_FAQ_PHRASES,
    DEFAULT_HOME_LABEL, DEFAULT_INLINE_IMAGE_LIMIT, DEFAULT_LANGUAGE, DEFAULT_SITE_NAME,
    DEFAULT_TOC_TITLE,
};

/// Site-level settings that shape rendered markup and structured data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Public origin of the site, without a trailing slash.
    ///
    /// **INVARIANT:** absolute http(s) URL (validated in the builder and in
    /// `from_json_str`).
    pub(crate) site_url: String,
    pub(crate) site_name: String,
    pub(crate) logo_url: Option<String>,
    /// Path prefix of article pages, e.g. `/blog`.
    pub(crate) articles_path: String,
    pub(crate) language: String,
    pub(crate) home_label: String,
    pub(crate) toc_title: String,
    pub(crate) toc_enabled: bool,

    /// Append `-2`, `-3`, ... to repeated heading slugs
    pub(crate) dedupe_anchor_ids: bool,

    /// Highest `IMAGE:n` marker that may pull from the image list
    pub(crate) inline_image_limit: usize,

    /// Lower-cased phrases that mark a heading as the FAQ section
    pub(crate) faq_phrases: Vec<String>,

    /// Length cap for descriptions derived from the body
    pub(crate) description_max_chars: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            site_url: "https://vrachka.eu".to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            logo_url: None,
            articles_path: DEFAULT_ARTICLES_PATH.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            home_label: DEFAULT_HOME_LABEL.to_string(),
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            toc_enabled: true,
            dedupe_anchor_ids: true,
            inline_image_limit: DEFAULT_INLINE_IMAGE_LIMIT,
            faq_phrases: DEFAULT_FAQ_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }
}

impl RenderConfig {
    /// Load configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON and the builder's
    /// validation errors for out-of-range values.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let raw: RenderConfig = serde_json::from_str(json)?;
        raw.validated()
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its contents are rejected by
    /// [`RenderConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read render config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid render config {}", path.display()))
    }

    /// Run the builder's checks over an already populated config.
    fn validated(self) -> ConfigResult<Self> {
        let mut builder = Self::builder().site_url(self.site_url);
        builder.site_name = self.site_name;
        builder.logo_url = self.logo_url;
        builder.articles_path = self.articles_path;
        builder.language = self.language;
        builder.home_label = self.home_label;
        builder.toc_title = self.toc_title;
        builder.toc_enabled = self.toc_enabled;
        builder.dedupe_anchor_ids = self.dedupe_anchor_ids;
        builder.inline_image_limit = self.inline_image_limit;
        builder.faq_phrases = self.faq_phrases;
        builder.description_max_chars = self.description_max_chars;
        builder.build()
    }
}
