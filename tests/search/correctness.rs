//! End-to-end search correctness on small hand-checked corpora.

use super::common::{assert_fragments_formatted, searcher_for, three_work_searcher};

#[test]
fn single_term_single_work() {
    let results = three_work_searcher().search("fathom");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].work_title, "THE TEMPEST");
    assert_eq!(
        results[0].fragments,
        vec!["Full fathom five thy father lies;<br>Of his bones are coral made;"]
    );
}

#[test]
fn term_in_several_works_keeps_corpus_order() {
    // "the" occurs in all three works
    let results = three_work_searcher().search("the");
    let titles: Vec<&str> = results.iter().map(|r| r.work_title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["THE SONNETS", "THE TRAGEDY OF MACBETH", "THE TEMPEST"]
    );
    assert_fragments_formatted(&results);
}

#[test]
fn phrase_must_match_contiguously() {
    let searcher = three_work_searcher();
    assert_eq!(searcher.search(r#""coral made""#).len(), 1);
    assert!(searcher.search(r#""made coral""#).is_empty());
}

#[test]
fn substring_matching_inside_words() {
    // "ather" is inside "father"; "ease" inside "increase"
    let results = three_work_searcher().search("ather ease");
    let titles: Vec<&str> = results.iter().map(|r| r.work_title.as_str()).collect();
    assert_eq!(titles, vec!["THE SONNETS", "THE TEMPEST"]);
}

#[test]
fn query_case_does_not_matter() {
    let searcher = three_work_searcher();
    assert_eq!(searcher.search("DAGGER"), searcher.search("dagger"));
    assert_eq!(searcher.search("DaGgEr"), searcher.search("dagger"));
}

#[test]
fn fragments_keep_original_case() {
    let results = searcher_for(&[("KING LEAR", "Blow, WINDS, and crack your cheeks!\r\n")])
        .search("winds");
    assert_eq!(results[0].fragments, vec!["Blow, WINDS, and crack your cheeks!"]);
}

#[test]
fn any_term_is_enough() {
    // OR semantics: a work matches when at least one term occurs
    let results = three_work_searcher().search("dagger nonexistentword");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].work_title, "THE TRAGEDY OF MACBETH");
}

#[test]
fn title_line_is_not_searched() {
    let results = three_work_searcher().search("tempest");
    assert!(results.is_empty());
}

#[test]
fn preamble_is_not_searched() {
    let results = three_work_searcher().search("gutenberg");
    assert!(results.is_empty());
}
