// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: raw query string to search terms.
//!
//! Whitespace separates terms, double quotes glue words into a phrase:
//!
//! ```text
//! "blue eyed" man   →  ["blue eyed", "man"]
//! Hello World       →  ["hello", "world"]
//! ```
//!
//! The parser is total. Users type unbalanced quotes all the time, and a search
//! box that answers with an error is worse than one that guesses. An
//! unterminated quote falls back to plain whitespace splitting for whatever
//! followed it. Empty terms are never emitted, since an empty needle would
//! match every position of every work.

use crate::utils::fold_case;

const QUOTE: char = '"';

/// Split `query` into case-folded search terms, honoring quoted phrases.
pub fn parse_query(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for c in query.chars() {
        if c == QUOTE {
            in_quote = !in_quote;
        } else if c.is_whitespace() && !in_quote {
            push_term(&mut terms, &current);
            current.clear();
        } else {
            current.push(c);
        }
    }

    if in_quote {
        // Unterminated phrase: best-effort word split
        for word in current.split_whitespace() {
            push_term(&mut terms, word);
        }
    } else {
        push_term(&mut terms, &current);
    }

    terms
}

fn push_term(terms: &mut Vec<String>, raw: &str) {
    let term = raw.trim();
    if !term.is_empty() {
        terms.push(fold_case(term));
    }
}
