//! Table of contents generation and placement.

mod builder;
mod injection;

pub use builder::{TocEntry, TocFragment, build_toc_html};
pub use injection::inject_toc;
