// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query parser.
//!
//! Any string is a valid query. The parser must never panic and never hand the
//! search layer an empty term, whatever the quotes look like.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quarto::{fold_case, parse_query};

fuzz_target!(|query: &str| {
    for term in parse_query(query) {
        assert!(!term.is_empty(), "empty term from {:?}", query);
        assert_eq!(term.trim(), term, "untrimmed term from {:?}", query);
        assert_eq!(fold_case(&term).len(), term.len());
    }
});
