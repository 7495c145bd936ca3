// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus segmentation and loading.
//!
//! The corpus file is one long text. Works are introduced by [`WORK_SEPARATOR`];
//! whatever precedes the first separator (license, table of contents) is
//! discarded. Inside a work, [`SECTION_SEPARATOR`] marks are stripped, the
//! first line is the title and the rest is the body:
//!
//! ```text
//! <preamble>►THE SONNETS\r\n
//! From fairest creatures we desire increase,\r\n
//! ...
//! ►ALL’S WELL THAT ENDS WELL\r\n
//! ☞ACT I\r\n
//! ...
//! ```
//!
//! Segmentation is total: a segment without any line break becomes a work
//! whose title is the whole segment and whose body is empty.
//!
//! Each work builds its own suffix array. The arrays are independent, so with
//! the `parallel` feature they are built concurrently with rayon.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::LoadError;
use crate::types::{Work, SECTION_SEPARATOR, WORK_SEPARATOR};

/// Title and body of one work, before indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub title: String,
    pub body: String,
}

/// Split raw corpus text into title/body segments, in file order.
pub fn segment(raw: &str) -> Vec<Segment> {
    raw.split(WORK_SEPARATOR)
        .skip(1)
        .map(|chunk| {
            let cleaned: String = chunk.chars().filter(|&c| c != SECTION_SEPARATOR).collect();
            split_title(cleaned)
        })
        .collect()
}

fn split_title(mut segment: String) -> Segment {
    match segment.find('\n') {
        Some(newline) => {
            let body = segment.split_off(newline + 1);
            Segment {
                title: segment.trim().to_string(),
                body,
            }
        }
        None => {
            tracing::warn!(
                title = segment.trim(),
                "work segment has no line break; indexing with empty body"
            );
            Segment {
                title: segment.trim().to_string(),
                body: String::new(),
            }
        }
    }
}

/// The loaded, indexed corpus. Immutable once built.
#[derive(Debug, Default)]
pub struct Corpus {
    works: Vec<Work>,
}

impl Corpus {
    /// Read, segment, and index a corpus file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    valid_up_to = err.utf8_error().valid_up_to(),
                    "corpus is not valid UTF-8; decoding lossily"
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let corpus = Self::from_text(&raw);
        if corpus.is_empty() {
            tracing::warn!(path = %path.display(), "corpus contains no works");
        }
        tracing::info!(
            path = %path.display(),
            works = corpus.len(),
            bytes = corpus.total_bytes(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Segment and index corpus text that is already in memory.
    pub fn from_text(raw: &str) -> Self {
        Self::from_segments(segment(raw))
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        #[cfg(feature = "parallel")]
        let works = segments
            .into_par_iter()
            .map(|s| Work::new(s.title, s.body))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let works = segments
            .into_iter()
            .map(|s| Work::new(s.title, s.body))
            .collect();

        Self { works }
    }

    pub fn from_works(works: Vec<Work>) -> Self {
        Self { works }
    }

    /// Works in segmentation order.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Sum of body lengths in bytes.
    pub fn total_bytes(&self) -> usize {
        self.works.iter().map(|w| w.text().len()).sum()
    }
}
