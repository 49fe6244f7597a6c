//! SEO structured data (JSON-LD) for a rendered article.
//!
//! The FAQ block is read from the normalized body before headings are
//! rewritten; the Article and Breadcrumb objects come from article metadata.

pub mod faq;
pub mod schema;

pub use faq::{FaqEntry, extract_faq};
pub use schema::{
    ArticleMetadata, ArticleSchema, BreadcrumbSchema, FaqSchema, StructuredDataBundle,
    assemble_structured_data,
};
