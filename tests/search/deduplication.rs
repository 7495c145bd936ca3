//! Overlapping and repeated terms never duplicate matches or fragments.

use super::common::{searcher_for, three_work_searcher};

#[test]
fn repeated_term_equals_single_term() {
    let searcher = three_work_searcher();
    assert_eq!(searcher.search("dagger dagger dagger"), searcher.search("dagger"));
}

#[test]
fn term_and_its_substring_share_fragment() {
    let searcher = three_work_searcher();
    let combined = searcher.search("dagger agg dag");
    assert_eq!(combined, searcher.search("dagger"));
    assert_eq!(combined[0].fragments.len(), 1);
}

#[test]
fn phrase_and_word_overlap() {
    let searcher = three_work_searcher();
    assert_eq!(
        searcher.search(r#""coral made" coral"#),
        searcher.search("coral")
    );
}

#[test]
fn each_work_appears_once() {
    let results = searcher_for(&[(
        "TWO GENTLEMEN",
        "Who is Silvia? what is she,\r\nThat all our swains commend her?\r\n",
    )])
    .search("is she her s");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].fragments.len(), 1);
}
