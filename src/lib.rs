pub mod article;
pub mod config;
pub mod content_renderer;
pub mod error;
pub mod structured_data;
pub mod utils;

pub use article::Article;
pub use config::{RenderConfig, RenderConfigBuilder};
pub use content_renderer::{
    HeadingLevel, HeadingRecord, RenderedArticle, RenderedContent, render_article, render_body,
    slugify,
};
pub use error::{ConfigError, ConfigResult};
pub use structured_data::{FaqEntry, StructuredDataBundle, extract_faq};
