//! Proximity merging of nearby matches into one fragment.

use quarto::PRE_SUFFIX_SIZE;

use super::common::{display_to_raw, make_verse, searcher_for};

/// Body with "alpha" at offset 0 and again at offset `gap`.
fn two_hits(gap: usize) -> String {
    let first = "alpha\r\n";
    let filler = "y".repeat(gap - first.len() - 2);
    format!("{first}{filler}\r\nalpha\r\n")
}

#[test]
fn gap_at_threshold_merges() {
    let body = two_hits(PRE_SUFFIX_SIZE);
    assert_eq!(body.rfind("alpha"), Some(PRE_SUFFIX_SIZE));

    let results = searcher_for(&[("W", &body)]).search("alpha");
    assert_eq!(results[0].fragments.len(), 1);
}

#[test]
fn gap_past_threshold_splits() {
    let body = two_hits(PRE_SUFFIX_SIZE + 1);
    assert_eq!(body.rfind("alpha"), Some(PRE_SUFFIX_SIZE + 1));

    let results = searcher_for(&[("W", &body)]).search("alpha");
    assert_eq!(results[0].fragments.len(), 2);
}

#[test]
fn dense_matches_make_one_fragment() {
    let body = make_verse(40, "zounds");
    let results = searcher_for(&[("HENRY IV", &body)]).search("zounds");

    assert_eq!(results[0].fragments.len(), 1);
    let raw = display_to_raw(&results[0].fragments[0]);
    assert_eq!(raw.matches("zounds").count(), 40);
}

#[test]
fn distant_clusters_make_separate_fragments() {
    let filler = make_verse(30, "nothing");
    let body = format!(
        "{filler}Alas, poor Yorick!\r\n{filler}I knew him, Horatio: Yorick\r\n{filler}"
    );
    let results = searcher_for(&[("HAMLET", &body)]).search("yorick");

    assert_eq!(results[0].fragments.len(), 2);
    assert!(results[0].fragments[0].contains("Alas, poor Yorick!"));
    assert!(results[0].fragments[1].contains("I knew him, Horatio: Yorick"));
}

#[test]
fn fragments_from_different_terms_merge_when_close() {
    let body = format!(
        "{}Double, double toil and trouble;\r\nFire burn and cauldron bubble.\r\n{}",
        make_verse(20, "x"),
        make_verse(20, "x")
    );
    let results = searcher_for(&[("MACBETH", &body)]).search("toil cauldron");
    assert_eq!(results[0].fragments.len(), 1);
    assert!(results[0].fragments[0]
        .contains("Double, double toil and trouble;<br>Fire burn and cauldron bubble."));
}
