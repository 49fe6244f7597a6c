//! Error types for the fallible edges of the crate
//!
//! Rendering itself never fails; only configuration can be rejected.

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a `RenderConfig` is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Site URL did not parse
    #[error("Invalid site URL '{url}': {source}")]
    InvalidSiteUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Site URL parsed but is not an absolute http(s) URL
    #[error("Site URL must use http or https, got scheme '{0}'")]
    UnsupportedScheme(String),

    /// Articles path must be an absolute path segment like `/blog`
    #[error("Articles path must start with '/': {0}")]
    InvalidArticlesPath(String),

    /// At least one phrase is needed to recognise an FAQ heading
    #[error("FAQ phrase list is empty")]
    EmptyFaqPhrases,

    /// A zero-length description would drop the meta description entirely
    #[error("description_max_chars must be greater than zero")]
    ZeroDescriptionLength,

    /// Configuration JSON did not deserialize
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
