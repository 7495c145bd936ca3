// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match position deduplication.
//!
//! Each term's lookup returns positions in suffix-array order, and terms can
//! overlap ("to be" and "be" hit the same bytes). Chunking needs one ascending
//! list with no repeats.
//!
//! **Invariant**: output is strictly increasing.

/// Union per-term hit lists into one sorted, deduplicated list.
pub fn merge_positions<I>(hits: I) -> Vec<usize>
where
    I: IntoIterator<Item = Vec<usize>>,
{
    let mut positions: Vec<usize> = hits.into_iter().flatten().collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}
