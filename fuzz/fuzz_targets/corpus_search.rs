// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the whole pipeline: segment, index, search.
//!
//! The corpus text is fuzzed too, so separators can show up anywhere, works can
//! be empty, and bodies can be one giant line.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarto::{Corpus, Searcher};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    corpus: &'a str,
    query: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let searcher = Searcher::new(Corpus::from_text(input.corpus));
    let results = searcher.search(input.query);

    let mut titles = searcher.corpus().works().iter().map(|w| w.title());
    for result in &results {
        assert!(!result.fragments.is_empty());
        // Results follow corpus order
        assert!(titles.any(|t| t == result.work_title));
        for fragment in &result.fragments {
            assert!(!fragment.contains('\n'));
        }
    }
});
