//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides fixture corpora and a brute-force oracle index.

#![doc(hidden)]

use crate::index::SubstringIndex;
use crate::types::WORK_SEPARATOR;

/// Brute-force substring index: scans every offset. The oracle for differential tests.
#[derive(Debug, Clone)]
pub struct NaiveIndex {
    text: Vec<u8>,
}

impl NaiveIndex {
    pub fn new(text: Vec<u8>) -> Self {
        Self { text }
    }
}

impl SubstringIndex for NaiveIndex {
    fn find_all(&self, needle: &[u8]) -> Vec<usize> {
        if needle.is_empty() || needle.len() > self.text.len() {
            return Vec::new();
        }
        self.text
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle)
            .map(|(i, _)| i)
            .collect()
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

/// Render `(title, body)` pairs in corpus file format, with a preamble and CRLF line breaks.
pub fn make_corpus_text(works: &[(&str, &str)]) -> String {
    let mut raw = String::from("The Project Gutenberg preamble\r\nNot part of any work\r\n");
    for (title, body) in works {
        raw.push(WORK_SEPARATOR);
        raw.push_str(title);
        raw.push_str("\r\n");
        raw.push_str(body);
    }
    raw
}

/// Body text made of `lines` numbered verse lines, each shorter than the proximity threshold.
pub fn make_verse(lines: usize, word: &str) -> String {
    (0..lines)
        .map(|i| format!("Line {i} of the verse, where {word} may be found.\r\n"))
        .collect()
}

/// Three short works. Only the second mentions "dagger".
pub fn three_work_corpus_text() -> String {
    make_corpus_text(&[
        (
            "THE SONNETS",
            "From fairest creatures we desire increase,\r\n\
             That thereby beauty's rose might never die,\r\n",
        ),
        (
            "THE TRAGEDY OF MACBETH",
            "Is this a dagger which I see before me,\r\n\
             The handle toward my hand? Come, let me clutch thee.\r\n",
        ),
        (
            "THE TEMPEST",
            "Full fathom five thy father lies;\r\n\
             Of his bones are coral made;\r\n",
        ),
    ])
}
