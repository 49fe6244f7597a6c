//! Body preprocessing ahead of the heading and TOC stages.
//!
//! - Legacy JSON envelope unwrapping
//! - Removal of previously hard-coded "in this article" blocks
//! - Flat block scan that separates headings from surrounding markup

pub mod blocks;
pub mod envelope;
pub mod legacy_toc;

pub use blocks::{Block, HeadingBlock, parse_blocks};
pub use envelope::normalize_content;
pub use legacy_toc::strip_legacy_toc;
