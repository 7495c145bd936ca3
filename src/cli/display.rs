// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results and corpus listings.
//!
//! Box drawing with ANSI colors when stdout is a TTY. `NO_COLOR` and pipes get
//! plain text, so `quarto search ... | grep` behaves.

use quarto::{Corpus, SearchResult, DISPLAY_LINE_BREAK};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";
pub const GRAY: &str = "\x1b[90m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(s: &str) -> String {
    styled(&[GRAY], s)
}

/// Visible length, skipping ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ├──────────────────┤
pub fn section_mid() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Split `text` into lines that fit inside a box row (one leading space).
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !current.is_empty() && current.chars().count() + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// One box per work, one block of lines per fragment.
pub fn print_results(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("No matches for {}", styled(&[BOLD], query));
        return;
    }

    for result in results {
        let label = format!("{} ({})", result.work_title, result.fragments.len());
        section_top(&label);
        for (i, fragment) in result.fragments.iter().enumerate() {
            if i > 0 {
                section_mid();
            }
            for line in fragment.split(DISPLAY_LINE_BREAK) {
                for wrapped in wrap(line, BOX_WIDTH - 2) {
                    row(&format!(" {}", wrapped));
                }
            }
        }
        section_bot();
    }

    let fragments: usize = results.iter().map(|r| r.fragments.len()).sum();
    println!(
        "{}",
        styled(
            &[DIM],
            &format!("{} fragments in {} works", fragments, results.len())
        )
    );
}

/// Table of works with their sizes.
pub fn print_works(corpus: &Corpus) {
    section_top(&format!("{} works", corpus.len()));
    for (i, work) in corpus.works().iter().enumerate() {
        let size = styled(&[YELLOW], &format!("{:>10}", format_size(work.text().len())));
        let title: String = work.title().chars().take(BOX_WIDTH - 18).collect();
        row(&format!(" {:>3}  {}  {}", i + 1, size, title));
    }
    section_mid();
    row(&format!(" total  {}", format_size(corpus.total_bytes())));
    section_bot();
}
