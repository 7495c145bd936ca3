// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-work substring index.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: `suffixes` lists every suffix start of `text`
//!    in lexicographic byte order
//! 2. **SUFFIX_ARRAY_COMPLETE**: `suffixes.len() == text.len()`
//! 3. **MATCH_RANGE_CONTIGUOUS**: all suffixes starting with a needle form one
//!    contiguous run, so two binary searches bound every occurrence
//!
//! Offsets are **byte offsets**. The index is built over case-folded bytes
//! that have the same length as the original text, so a reported offset can be
//! used to slice the original directly.

use crate::sais::suffix_array;

/// "Find all occurrences of X" over a fixed byte sequence.
pub trait SubstringIndex {
    /// Start offsets of every occurrence of `needle`, in no particular order.
    ///
    /// An empty needle matches nothing.
    fn find_all(&self, needle: &[u8]) -> Vec<usize>;

    /// Length of the indexed text in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Suffix array over a byte sequence, built in O(n) with SA-IS.
#[derive(Debug, Clone)]
pub struct SuffixArrayIndex {
    text: Vec<u8>,
    suffixes: Vec<usize>,
}

impl SuffixArrayIndex {
    pub fn new(text: Vec<u8>) -> Self {
        let suffixes = suffix_array(&text);
        Self { text, suffixes }
    }

    /// The indexed bytes.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    fn suffix(&self, rank: usize) -> &[u8] {
        &self.text[self.suffixes[rank]..]
    }

    /// Suffix-array ranks `[lo, hi)` of the suffixes that start with `needle`.
    fn match_range(&self, needle: &[u8]) -> (usize, usize) {
        // First suffix >= needle
        let lo = self.suffixes.partition_point(|&start| &self.text[start..] < needle);

        // First suffix past the needle's run: compare only the needle-length prefix
        let hi = lo
            + self.suffixes[lo..].partition_point(|&start| {
                let suffix = &self.text[start..];
                suffix.len() >= needle.len() && &suffix[..needle.len()] == needle
            });

        debug_assert!(lo == hi || self.suffix(lo).starts_with(needle));
        (lo, hi)
    }
}

impl SubstringIndex for SuffixArrayIndex {
    fn find_all(&self, needle: &[u8]) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }
        let (lo, hi) = self.match_range(needle);
        self.suffixes[lo..hi].to_vec()
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}
