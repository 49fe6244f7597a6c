//! Getter methods for `RenderConfig`

use super::types::RenderConfig;

impl RenderConfig {
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    #[must_use]
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    #[must_use]
    pub fn articles_path(&self) -> &str {
        &self.articles_path
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn home_label(&self) -> &str {
        &self.home_label
    }

    #[must_use]
    pub fn toc_title(&self) -> &str {
        &self.toc_title
    }

    #[must_use]
    pub fn toc_enabled(&self) -> bool {
        self.toc_enabled
    }

    #[must_use]
    pub fn dedupe_anchor_ids(&self) -> bool {
        self.dedupe_anchor_ids
    }

    #[must_use]
    pub fn inline_image_limit(&self) -> usize {
        self.inline_image_limit
    }

    #[must_use]
    pub fn faq_phrases(&self) -> &[String] {
        &self.faq_phrases
    }

    #[must_use]
    pub fn description_max_chars(&self) -> usize {
        self.description_max_chars
    }

    /// Absolute URL of an article page.
    #[must_use]
    pub fn article_url(&self, slug: &str) -> String {
        format!("{}{}/{}", self.site_url, self.articles_path, slug.trim_matches('/'))
    }

    /// Absolute URL of a category listing.
    #[must_use]
    pub fn category_url(&self, category_slug: &str) -> String {
        format!(
            "{}{}/category/{}",
            self.site_url,
            self.articles_path,
            category_slug.trim_matches('/')
        )
    }

    /// Site root with a trailing slash, as used for the first breadcrumb.
    #[must_use]
    pub fn home_url(&self) -> String {
        format!("{}/", self.site_url)
    }
}
