// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Proximity merge of match positions.
//!
//! A frequent word would otherwise produce a wall of overlapping fragments.
//! Positions whose gap is at most [`PRE_SUFFIX_SIZE`] share a chunk; a gap of
//! `PRE_SUFFIX_SIZE + 1` starts a new one.
//!
//! ```text
//! positions:  10   80   200        700  760        1300
//! gaps:          70  120     500      60      540
//! chunks:    [10, 80, 200]   [700, 760]   [1300]
//! ```

use crate::types::{Chunk, PRE_SUFFIX_SIZE};

/// Group ascending, deduplicated positions into chunks, in text order.
///
/// Every position lands in exactly one chunk, and the trailing chunk is always
/// emitted.
pub fn chunk_positions(positions: &[usize]) -> Vec<Chunk> {
    debug_assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "positions must be strictly increasing"
    );

    let mut chunks = Vec::new();
    let Some((&first, rest)) = positions.split_first() else {
        return chunks;
    };

    let mut current = Chunk::starting_at(first);
    for &position in rest {
        if position - current.last() > PRE_SUFFIX_SIZE {
            chunks.push(std::mem::replace(&mut current, Chunk::starting_at(position)));
        } else {
            current.push(position);
        }
    }
    chunks.push(current);

    chunks
}
