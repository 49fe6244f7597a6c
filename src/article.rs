//! Stored article as handed over by the storage layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted article, received as an immutable per-render copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Body markup, possibly wrapped in the legacy `{"content": ...}` envelope
    pub content: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub category: String,
    pub slug: String,
    /// Index 0 is the hero image; inline `IMAGE:n` markers use 1..
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Hero image, if the article has any images at all.
    #[must_use]
    pub fn hero_image(&self) -> Option<&str> {
        self.image_urls
            .first()
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }

    /// Excerpt with surrounding whitespace removed, `None` when blank.
    #[must_use]
    pub fn trimmed_excerpt(&self) -> Option<&str> {
        self.excerpt
            .as_deref()
            .map(str::trim)
            .filter(|excerpt| !excerpt.is_empty())
    }
}
