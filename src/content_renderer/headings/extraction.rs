//! Ordered heading outline of a body.

use super::rewriting::existing_id;
use super::slug::{SlugRegistry, slugify};
use super::{HeadingLevel, HeadingRecord};
use crate::content_renderer::html_preprocessing::Block;

/// A heading record tied back to the block it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredHeading {
    /// Index into the block list the outline was extracted from
    pub block_index: usize,
    pub record: HeadingRecord,
}

/// Anchored headings of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingOutline {
    anchored: Vec<AnchoredHeading>,
}

impl HeadingOutline {
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchored.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchored.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &HeadingRecord> {
        self.anchored.iter().map(|anchored| &anchored.record)
    }

    /// Anchor id assigned to the heading at `block_index`, if any.
    #[must_use]
    pub fn anchor_for(&self, block_index: usize) -> Option<&str> {
        self.anchored
            .binary_search_by_key(&block_index, |anchored| anchored.block_index)
            .ok()
            .map(|pos| self.anchored[pos].record.id.as_str())
    }

    #[must_use]
    pub fn into_records(self) -> Vec<HeadingRecord> {
        self.anchored.into_iter().map(|anchored| anchored.record).collect()
    }
}

/// Collect `h2`/`h3`/`h4` headings with their anchor ids.
///
/// Headings with empty text, or text that slugs to nothing, are skipped: they
/// get no anchor and no TOC entry. They keep any `id` they already carry, and
/// that id is reserved so no anchored heading is given the same one.
pub fn extract_headings(blocks: &[Block<'_>], dedupe_ids: bool) -> HeadingOutline {
    let mut registry = SlugRegistry::new(dedupe_ids);
    blocks
        .iter()
        .filter_map(Block::as_heading)
        .filter(|heading| slugify(&heading.text).is_empty())
        .filter_map(|heading| existing_id(heading.attrs))
        .for_each(|id| registry.reserve(id));

    let mut anchored = Vec::new();

    for (block_index, block) in blocks.iter().enumerate() {
        let Some(heading) = block.as_heading() else {
            continue;
        };
        let Some(level) = HeadingLevel::from_tag_level(heading.level) else {
            continue;
        };
        if heading.text.is_empty() {
            continue;
        }
        let Some(id) = registry.claim(&heading.text) else {
            tracing::debug!("Heading '{}' has no sluggable characters, not anchored", heading.text);
            continue;
        };

        anchored.push(AnchoredHeading {
            block_index,
            record: HeadingRecord {
                text: heading.text.clone(),
                id,
                level,
            },
        });
    }

    HeadingOutline { anchored }
}
