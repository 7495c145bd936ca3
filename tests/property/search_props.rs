//! Whole-pipeline properties: coverage, result membership, stability.

use proptest::prelude::*;
use quarto::{Corpus, Searcher};

use super::common::{assert_fragments_formatted, display_to_raw, make_corpus_text, make_verse};

fn works_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c \r\n]{0,80}", 1..8)
}

/// Lines of `a`/`b`, many longer than the 250-byte context radius, with `zounds`
/// spliced in at the given `(line, offset)` spots.
fn long_line_body() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[ab]{0,750}", 1..6),
        prop::collection::vec((any::<prop::sample::Index>(), 0usize..750), 1..6),
    )
        .prop_map(|(mut lines, hits)| {
            for (which, offset) in hits {
                let i = which.index(lines.len());
                let offset = offset.min(lines[i].len());
                lines[i].insert_str(offset, "zounds");
            }
            lines.iter().map(|l| format!("{l}\r\n")).collect::<String>()
        })
}

fn corpus_of(bodies: &[String]) -> Corpus {
    let titles: Vec<String> = (0..bodies.len()).map(|i| format!("W{i}")).collect();
    let works: Vec<(&str, &str)> = titles
        .iter()
        .zip(bodies)
        .map(|(t, b)| (t.as_str(), b.as_str()))
        .collect();
    Corpus::from_text(&make_corpus_text(&works))
}

proptest! {
    /// Dense matches in a short work produce one fragment holding every match.
    #[test]
    fn prop_dense_verse_is_fully_covered(lines in 1usize..30) {
        let searcher = Searcher::new(corpus_of(&[make_verse(lines, "forsooth")]));
        let results = searcher.search("forsooth");

        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(results[0].fragments.len(), 1);
        let raw = display_to_raw(&results[0].fragments[0]);
        prop_assert_eq!(raw.matches("forsooth").count(), lines);
    }

    /// A work is in the results exactly when its body contains the term.
    #[test]
    fn prop_results_are_matching_works(bodies in works_strategy(), term in "[a-c]{1,3}") {
        let searcher = Searcher::new(corpus_of(&bodies));
        let results = searcher.search(&term);

        let expected: Vec<String> = bodies
            .iter()
            .enumerate()
            .filter(|(_, body)| body.contains(term.as_str()))
            .map(|(i, _)| format!("W{i}"))
            .collect();
        let actual: Vec<String> = results.iter().map(|r| r.work_title.clone()).collect();

        prop_assert_eq!(actual, expected);
        assert_fragments_formatted(&results);
    }

    #[test]
    fn prop_search_is_stable(bodies in works_strategy(), query in "[a-c \"]{0,12}") {
        let searcher = Searcher::new(corpus_of(&bodies));
        prop_assert_eq!(searcher.search(&query), searcher.search(&query));
    }

    /// Every match lands in some fragment, however long the lines are.
    #[test]
    fn prop_long_lines_keep_every_match(body in long_line_body()) {
        let searcher = Searcher::new(corpus_of(&[body.clone()]));
        let results = searcher.search("zounds");

        prop_assert_eq!(results.len(), 1);
        assert_fragments_formatted(&results);
        for fragment in &results[0].fragments {
            prop_assert!(fragment.contains("zounds"), "{}", fragment);
        }
        let shown: usize = results[0]
            .fragments
            .iter()
            .map(|f| f.matches("zounds").count())
            .sum();
        prop_assert!(shown >= body.matches("zounds").count());
    }
}
