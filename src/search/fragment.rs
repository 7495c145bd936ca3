// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fragment extraction and display formatting.
//!
//! A chunk becomes a byte window: `PRE_SUFFIX_SIZE` bytes before its first
//! position through `PRE_SUFFIX_SIZE` bytes after its last, clamped to
//! `[0, len - 1]` (the end is inclusive). The window almost always starts and
//! ends mid-line, so formatting drops those partial lines, trims, and turns raw
//! line breaks into [`DISPLAY_LINE_BREAK`].
//!
//! ```text
//! text:    ...nd Cressida\r\nTROILUS. Peace, you ungracious clamours!\r\nPeace, rude so...
//! window:        [ssida\r\nTROILUS. Peace, you ungracious clamours!\r\nPeace, ru]
//! output:  TROILUS. Peace, you ungracious clamours!
//! ```
//!
//! Two things keep this total:
//! - Window edges snap outward to char boundaries, so multi-byte text never
//!   panics on slicing.
//! - A window that lacks the line breaks needed for trimming, or trims down to
//!   nothing, falls back to the whole window, trimmed and converted.
//!
//! An edge line is dropped only when it was actually cut and holds no match.
//! Windows at the start or end of the text cut nothing, and on long lines the
//! partial line is often the one carrying the hit.

use crate::types::{Chunk, DISPLAY_LINE_BREAK, PRE_SUFFIX_SIZE};
use crate::utils::{ceil_char_boundary, floor_char_boundary};

/// Byte range `[start, end)` of a fragment within a work's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Window around `chunk`, clamped to the text and snapped to char boundaries.
    pub fn around(text: &str, chunk: &Chunk) -> Self {
        if text.is_empty() {
            return Self { start: 0, end: 0 };
        }

        let start = chunk.first().saturating_sub(PRE_SUFFIX_SIZE);
        let last_byte = chunk
            .last()
            .saturating_add(PRE_SUFFIX_SIZE)
            .min(text.len() - 1);

        Self {
            start: floor_char_boundary(text, start),
            end: ceil_char_boundary(text, last_byte + 1),
        }
    }

    /// The raw, unformatted fragment.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// True when the window begins mid-line.
    fn cuts_head(&self, text: &str) -> bool {
        self.start > 0 && !text[..self.start].ends_with('\n')
    }

    /// True when text continues past the window.
    fn cuts_tail(&self, text: &str) -> bool {
        self.end < text.len()
    }
}

/// Extract and format the fragment for one chunk.
///
/// The chunk's first and last match always start inside the kept span.
pub fn extract(text: &str, chunk: &Chunk) -> String {
    let window = Window::around(text, chunk);
    let raw = window.slice(text);
    let first_hit = chunk.first() - window.start;
    let last_hit = chunk.last() - window.start;

    let drop_head =
        window.cuts_head(text) && raw.find('\n').is_some_and(|newline| newline < first_hit);
    let drop_tail =
        window.cuts_tail(text) && raw.rfind('\n').is_some_and(|newline| newline > last_hit);

    format_window(raw, drop_head, drop_tail)
}

/// Format a raw fragment whose both ends may have been cut mid-line.
///
/// Keeps the span between the first and last line break. With fewer than two
/// line breaks, or nothing left between them, the whole fragment is kept.
pub fn format_fragment(raw: &str) -> String {
    format_window(raw, true, true)
}

fn format_window(raw: &str, cut_head: bool, cut_tail: bool) -> String {
    let from = if cut_head {
        raw.find('\n').map(|i| i + 1)
    } else {
        Some(0)
    };
    let to = if cut_tail {
        raw.rfind('\n')
    } else {
        Some(raw.len())
    };

    let kept = match (from, to) {
        (Some(from), Some(to)) if from <= to => raw[from..to].trim(),
        _ => "",
    };
    let kept = if kept.is_empty() { raw.trim() } else { kept };

    to_display_line_breaks(kept)
}

/// Replace `\r\n` and bare `\n` with the display marker.
fn to_display_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', DISPLAY_LINE_BREAK)
}
