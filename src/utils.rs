//! Utility functions for string processing.

/// Lowercase a string without changing its byte length.
///
/// Each char is replaced by its lowercase form only when that form is a
/// single char with the same UTF-8 width. Everything else is kept as is:
/// - "HAMLET" → "hamlet"
/// - "Ægir" → "ægir"
/// - "İ" stays "İ" (its lowercase is two chars)
///
/// Offsets into the folded string are therefore valid offsets into the input.
pub fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
        _ => c,
    }
}

/// Largest char boundary `<= index` (clamped to `text.len()`).
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary `>= index` (clamped to `text.len()`).
pub fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
