//! The query parser is total and never emits empty terms.

use proptest::prelude::*;
use quarto::{fold_case, parse_query};

proptest! {
    #[test]
    fn prop_never_empty_terms(query in ".{0,80}") {
        for term in parse_query(&query) {
            prop_assert!(!term.is_empty());
            prop_assert_eq!(term.trim(), term.as_str());
        }
    }

    #[test]
    fn prop_unquoted_is_whitespace_split(query in "[a-zA-Z \t]{0,60}") {
        let expected: Vec<String> = query.split_whitespace().map(fold_case).collect();
        prop_assert_eq!(parse_query(&query), expected);
    }

    #[test]
    fn prop_quoted_phrase_is_one_term(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let phrase = words.join(" ");
        let query = format!("\"{phrase}\"");
        prop_assert_eq!(parse_query(&query), vec![phrase]);
    }

    #[test]
    fn prop_terms_are_folded(query in "[a-zA-Z \"]{0,60}") {
        for term in parse_query(&query) {
            prop_assert_eq!(fold_case(&term), term.clone());
            prop_assert!(!term.contains('"'));
        }
    }
}
