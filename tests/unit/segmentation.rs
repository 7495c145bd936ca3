//! Corpus segmentation contract.

use super::common::make_corpus_text;
use quarto::{segment, Corpus, SECTION_SEPARATOR, WORK_SEPARATOR};

#[test]
fn two_works_titles_and_bodies() {
    let raw = format!(
        "{sep}  TWELFTH NIGHT \r\nIf music be the food of love, play on;\r\n\
         {sep}\tOTHELLO\r\nO, beware, my lord, of jealousy;\r\n",
        sep = WORK_SEPARATOR
    );
    let segments = segment(&raw);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].title, "TWELFTH NIGHT");
    assert_eq!(segments[0].body, "If music be the food of love, play on;\r\n");
    assert_eq!(segments[1].title, "OTHELLO");
    assert_eq!(segments[1].body, "O, beware, my lord, of jealousy;\r\n");
}

#[test]
fn body_excludes_title_line() {
    let corpus = Corpus::from_text(&make_corpus_text(&[("CORIOLANUS", "Body only\r\n")]));
    assert_eq!(corpus.works()[0].text(), "Body only\r\n");
    assert!(!corpus.works()[0].text().contains("CORIOLANUS"));
}

#[test]
fn section_marks_removed_everywhere() {
    let raw = format!(
        "{w}HENRY V{s}\r\n{s}PROLOGUE\r\nO for a Muse of fire{s}\r\n",
        w = WORK_SEPARATOR,
        s = SECTION_SEPARATOR
    );
    let segments = segment(&raw);
    assert_eq!(segments[0].title, "HENRY V");
    assert!(!segments[0].body.contains(SECTION_SEPARATOR));
    assert_eq!(segments[0].body, "PROLOGUE\r\nO for a Muse of fire\r\n");
}

#[test]
fn malformed_segment_is_title_only() {
    let raw = format!("{w}VENUS AND ADONIS{w}THE PHOENIX\r\nLet the bird\r\n", w = WORK_SEPARATOR);
    let segments = segment(&raw);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].title, "VENUS AND ADONIS");
    assert_eq!(segments[0].body, "");
    assert_eq!(segments[1].title, "THE PHOENIX");
}

#[test]
fn empty_works_are_kept() {
    let raw = format!("{w}{w}\r\n", w = WORK_SEPARATOR);
    let corpus = Corpus::from_text(&raw);
    assert_eq!(corpus.len(), 2);
    assert!(corpus.works().iter().all(|w| w.title().is_empty()));
}
