// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for fragment extraction.
//!
//! Arbitrary text and arbitrary match positions. Windows have to land on char
//! boundaries and formatted fragments must never contain a raw line break.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarto::search::{chunk_positions, extract, format_fragment, Window};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    positions: Vec<u16>,
}

fuzz_target!(|input: Input| {
    let text = input.text;
    let _ = format_fragment(&text);
    if text.is_empty() {
        return;
    }

    // Matches always start on a char boundary in real searches
    let mut positions: Vec<usize> = input
        .positions
        .iter()
        .map(|&p| usize::from(p) % text.len())
        .filter(|&p| text.is_char_boundary(p))
        .collect();
    positions.sort_unstable();
    positions.dedup();

    for chunk in chunk_positions(&positions) {
        let window = Window::around(&text, &chunk);
        assert!(text.is_char_boundary(window.start));
        assert!(text.is_char_boundary(window.end));
        assert!(window.start <= chunk.first() && chunk.last() < window.end);

        let fragment = extract(&text, &chunk);
        assert!(!fragment.contains('\n'));
    }
});
