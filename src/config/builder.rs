//! Type-safe builder for `RenderConfig` using the typestate pattern
//!
//! The site URL is the only required field; `build()` is only callable once
//! it has been provided.

use std::marker::PhantomData;

use url::Url;

use super::types::RenderConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::utils::{
    DEFAULT_ARTICLES_PATH, DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_FAQ_PHRASES,
    DEFAULT_HOME_LABEL, DEFAULT_INLINE_IMAGE_LIMIT, DEFAULT_LANGUAGE, DEFAULT_SITE_NAME,
    DEFAULT_TOC_TITLE,
};

// Type state for the builder
pub struct WithSiteUrl;

pub struct RenderConfigBuilder<State = ()> {
    pub(crate) site_url: Option<String>,
    pub(crate) site_name: String,
    pub(crate) logo_url: Option<String>,
    pub(crate) articles_path: String,
    pub(crate) language: String,
    pub(crate) home_label: String,
    pub(crate) toc_title: String,
    pub(crate) toc_enabled: bool,
    pub(crate) dedupe_anchor_ids: bool,
    pub(crate) inline_image_limit: usize,
    pub(crate) faq_phrases: Vec<String>,
    pub(crate) description_max_chars: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for RenderConfigBuilder<()> {
    fn default() -> Self {
        Self {
            site_url: None,
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
            _phantom: PhantomData,
        }
    }
}

impl RenderConfig {
    /// Create a builder for configuring a `RenderConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> RenderConfigBuilder<()> {
        RenderConfigBuilder::default()
    }
}

impl RenderConfigBuilder<()> {
    pub fn site_url(self, url: impl Into<String>) -> RenderConfigBuilder<WithSiteUrl> {
        RenderConfigBuilder {
            site_url: Some(url.into()),
            site_name: self.site_name,
            logo_url: self.logo_url,
            articles_path: self.articles_path,
            language: self.language,
            home_label: self.home_label,
            toc_title: self.toc_title,
            toc_enabled: self.toc_enabled,
            dedupe_anchor_ids: self.dedupe_anchor_ids,
            inline_image_limit: self.inline_image_limit,
            faq_phrases: self.faq_phrases,
            description_max_chars: self.description_max_chars,
            _phantom: PhantomData,
        }
    }
}

impl<State> RenderConfigBuilder<State> {
    #[must_use]
    pub fn site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    #[must_use]
    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn articles_path(mut self, path: impl Into<String>) -> Self {
        self.articles_path = path.into();
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    #[must_use]
    pub fn toc_title(mut self, title: impl Into<String>) -> Self {
        self.toc_title = title.into();
        self
    }

    #[must_use]
    pub fn toc_enabled(mut self, enabled: bool) -> Self {
        self.toc_enabled = enabled;
        self
    }

    #[must_use]
    pub fn dedupe_anchor_ids(mut self, dedupe: bool) -> Self {
        self.dedupe_anchor_ids = dedupe;
        self
    }

    #[must_use]
    pub fn inline_image_limit(mut self, limit: usize) -> Self {
        self.inline_image_limit = limit;
        self
    }

    /// Replace the FAQ heading phrases. Phrases are matched lower-cased.
    #[must_use]
    pub fn faq_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faq_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn description_max_chars(mut self, max_chars: usize) -> Self {
        self.description_max_chars = max_chars;
        self
    }
}

impl RenderConfigBuilder<WithSiteUrl> {
    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the site URL is not an absolute http(s) URL, the
    /// articles path does not start with `/`, the FAQ phrase list is empty, or
    /// `description_max_chars` is zero.
    pub fn build(self) -> ConfigResult<RenderConfig> {
        let raw_url = self.site_url.unwrap_or_default();
        let parsed = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidSiteUrl {
            url: raw_url.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        let site_url = parsed.as_str().trim_end_matches('/').to_string();

        let articles_path = self.articles_path.trim().trim_end_matches('/').to_string();
        if !articles_path.starts_with('/') && !articles_path.is_empty() {
            return Err(ConfigError::InvalidArticlesPath(self.articles_path));
        }

        let faq_phrases: Vec<String> = self
            .faq_phrases
            .iter()
            .map(|phrase| phrase.trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();
        if faq_phrases.is_empty() {
            return Err(ConfigError::EmptyFaqPhrases);
        }

        if self.description_max_chars == 0 {
            return Err(ConfigError::ZeroDescriptionLength);
        }

        Ok(RenderConfig {
            site_url,
            site_name: self.site_name,
            logo_url: self.logo_url,
            articles_path,
            language: self.language,
            home_label: self.home_label,
            toc_title: self.toc_title,
            toc_enabled: self.toc_enabled,
            dedupe_anchor_ids: self.dedupe_anchor_ids,
            inline_image_limit: self.inline_image_limit,
            faq_phrases,
            description_max_chars: self.description_max_chars,
        })
    }
}
