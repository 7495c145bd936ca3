// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Per work, the pipeline is
//!
//! ```text
//! terms ──▶ index.find_all ──▶ merge_positions ──▶ chunk_positions ──▶ extract
//!           (per term)         (sort + dedup)      (proximity merge)   (window + format)
//! ```
//!
//! Works never share state, so the corpus-wide loop is a plain `par_iter` with
//! an order-preserving collect. Results come back in segmentation order no
//! matter which thread finished first.

pub mod chunk;
pub mod dedup;
pub mod fragment;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::Corpus;
use crate::index::SubstringIndex;
use crate::query::parse_query;
use crate::types::{SearchResult, Work};
use crate::utils::fold_case;

pub use chunk::chunk_positions;
pub use dedup::merge_positions;
pub use fragment::{extract, format_fragment, Window};

/// All match positions of `terms` in `index`, ascending and deduplicated.
///
/// Empty terms are skipped rather than matching everywhere.
pub fn find_positions<I: SubstringIndex + ?Sized>(index: &I, terms: &[String]) -> Vec<usize> {
    merge_positions(
        terms
            .iter()
            .filter(|term| !term.is_empty())
            .map(|term| index.find_all(term.as_bytes())),
    )
}

/// Search one work. `None` when no term occurs in it.
///
/// Terms must already be case-folded (the query parser does this).
pub fn search_work(work: &Work, terms: &[String]) -> Option<SearchResult> {
    let positions = find_positions(work.index(), terms);
    if positions.is_empty() {
        return None;
    }

    let fragments = chunk_positions(&positions)
        .iter()
        .map(|chunk| extract(work.text(), chunk))
        .collect();

    Some(SearchResult {
        work_title: work.title().to_string(),
        fragments,
    })
}

/// Search every work, keeping segmentation order and omitting works without hits.
pub fn search_corpus(corpus: &Corpus, terms: &[String]) -> Vec<SearchResult> {
    if terms.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let results: Vec<SearchResult> = corpus
        .works()
        .par_iter()
        .filter_map(|work| search_work(work, terms))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<SearchResult> = corpus
        .works()
        .iter()
        .filter_map(|work| search_work(work, terms))
        .collect();

    results
}

/// Owns the loaded corpus and answers queries against it.
///
/// Immutable after construction: share it behind an `Arc` and call `search`
/// from as many threads as you like.
#[derive(Debug, Default)]
pub struct Searcher {
    corpus: Corpus,
}

impl Searcher {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Parse `query` and search the whole corpus.
    ///
    /// An empty or whitespace-only query returns no results.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let terms = parse_query(query);
        let results = search_corpus(&self.corpus, &terms);
        tracing::debug!(
            query,
            terms = terms.len(),
            works = results.len(),
            fragments = results.iter().map(|r| r.fragments.len()).sum::<usize>(),
            "search complete"
        );
        results
    }

    /// Search with already-split terms. Terms are case-folded here.
    pub fn search_terms(&self, terms: &[String]) -> Vec<SearchResult> {
        let folded: Vec<String> = terms.iter().map(|t| fold_case(t)).collect();
        search_corpus(&self.corpus, &folded)
    }
}
