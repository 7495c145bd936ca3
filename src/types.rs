// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a corpus search.
//!
//! A corpus is a list of [`Work`]s, each one owning its body text and a
//! substring index over the case-folded copy of that text. A search turns into
//! match positions, positions turn into [`Chunk`]s, and chunks turn into the
//! display fragments carried by a [`SearchResult`].
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Work**: `index` was built over `fold_case(text)`, which has exactly the
//!   same byte length as `text`. Every position the index reports is a valid
//!   byte offset into `text`.
//!
//! - **Chunk**: positions are strictly increasing, non-empty, and every gap
//!   between neighbours is at most [`PRE_SUFFIX_SIZE`].
//!
//! - **SearchResult**: only built for works with at least one match. A result
//!   with zero fragments never leaves the engine.

use serde::{Deserialize, Serialize};

use crate::index::SuffixArrayIndex;
use crate::utils::fold_case;

/// Proximity threshold in bytes.
///
/// Two match positions at most this far apart land in the same chunk. The same
/// value is the context radius around a chunk's first and last position.
pub const PRE_SUFFIX_SIZE: usize = 250;

/// Sentinel that starts every work in the corpus file.
pub const WORK_SEPARATOR: char = '►';

/// Sentinel marking sections inside a work. Stripped at load time.
pub const SECTION_SEPARATOR: char = '☞';

/// Line break marker emitted in formatted fragments.
pub const DISPLAY_LINE_BREAK: &str = "<br>";

/// One titled, independently indexed unit of the corpus.
///
/// Immutable after construction. Searches only ever borrow it.
pub struct Work {
    title: String,
    text: String,
    index: SuffixArrayIndex,
}

impl Work {
    /// Build a work and its substring index over the case-folded body.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let index = SuffixArrayIndex::new(fold_case(&text).into_bytes());
        Self {
            title: title.into(),
            text,
            index,
        }
    }

    /// Trimmed title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Original-case body text (everything after the title line).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> &SuffixArrayIndex {
        &self.index
    }
}

impl std::fmt::Debug for Work {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Work")
            .field("title", &self.title)
            .field("text_len", &self.text.len())
            .finish()
    }
}

/// A run of match positions close enough to share one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    positions: Vec<usize>,
}

impl Chunk {
    /// Start a chunk from its first position.
    pub(crate) fn starting_at(position: usize) -> Self {
        Self {
            positions: vec![position],
        }
    }

    pub(crate) fn push(&mut self, position: usize) {
        debug_assert!(self.last() < position, "chunk positions must increase");
        self.positions.push(position);
    }

    /// First (smallest) position. Chunks are never empty.
    pub fn first(&self) -> usize {
        self.positions[0]
    }

    /// Last (largest) position.
    pub fn last(&self) -> usize {
        self.positions[self.positions.len() - 1]
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Search hits for a single work, in the shape the HTTP layer returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub work_title: String,
    /// Formatted fragments in text order.
    pub fragments: Vec<String>,
}
