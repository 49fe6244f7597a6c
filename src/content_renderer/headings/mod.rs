//! Heading outline: anchor ids, extraction and in-place rewriting.
//!
//! Extraction and rewriting share one block scan and one `SlugRegistry` pass,
//! so every TOC link points at an id that exists in the rewritten body.

mod extraction;
mod rewriting;
mod slug;


use serde::{Deserialize, Serialize};

pub use extraction::{AnchoredHeading, HeadingOutline, extract_headings};
pub use rewriting::rewrite_headings;
pub use slug::{SlugRegistry, slugify, transliterate_char};

/// Display level of a heading. `h4` is shown as level 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Map a tag level (`2`, `3`, `4`) to its display level.
    #[must_use]
    pub fn from_tag_level(level: u8) -> Option<Self> {
        match level {
            2 => Some(Self::H2),
            3 | 4 => Some(Self::H3),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            other => Err(format!("heading level must be 2 or 3, got {other}")),
        }
    }
}

/// A heading that received an anchor id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub text: String,
    pub id: String,
    pub level: HeadingLevel,
}
