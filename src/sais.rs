// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction algorithm.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Shift every byte up by one, append sentinel (0), classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, strictly smallest)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (leftmost S-type) positions: 1, 3, 6
//!
//! Step 3: Induced sort from LMS seeds (bucket tails), then L-type
//!         left-to-right, then S-type right-to-left
//!
//! Step 4: Name LMS substrings; recurse when names collide
//!
//! Step 5: Induce again from the correctly ordered LMS suffixes
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! The byte shift matters: corpus text may legally contain NUL, and a sentinel
//! that collides with real input silently breaks the ordering.
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Unfilled suffix array slot.
const EMPTY: usize = usize::MAX;

/// Build the suffix array of `text`: `sa[i]` is the start of the i-th smallest suffix.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let shifted: Vec<u16> = text
        .iter()
        .map(|&b| u16::from(b) + 1)
        .chain(std::iter::once(0))
        .collect();

    let mut sa = sais(&shifted, 257);
    // The sentinel suffix always sorts first
    debug_assert_eq!(sa.first(), Some(&text.len()));
    sa.remove(0);
    sa
}

/// SA-IS over any integer alphabet whose last symbol is a unique minimum.
fn sais<T>(text: &[T], alphabet_size: usize) -> Vec<usize>
where
    T: Copy + Ord + Into<usize>,
{
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => {
            return if text[0] <= text[1] {
                vec![0, 1]
            } else {
                vec![1, 0]
            }
        }
        _ => {}
    }

    let types = classify(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let buckets = Buckets::new(text, alphabet_size);
    let mut sa = vec![EMPTY; n];
    induced_sort(text, &types, &buckets, &lms_positions, &mut sa);

    // Name LMS substrings in sorted order; equal substrings share a name
    let mut names = vec![EMPTY; n];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;
    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = prev {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        prev = Some(pos);
    }

    let distinct = name + 1;
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| names[pos]).collect();

    let order = if distinct < reduced.len() {
        sais(&reduced, distinct)
    } else {
        // Names are already a permutation: invert it
        let mut order = vec![0usize; reduced.len()];
        for (i, &name) in reduced.iter().enumerate() {
            order[name] = i;
        }
        order
    };

    let sorted_lms: Vec<usize> = order.iter().map(|&i| lms_positions[i]).collect();

    sa.fill(EMPTY);
    induced_sort(text, &types, &buckets, &sorted_lms, &mut sa);
    sa
}

/// Classify each suffix as S-type or L-type, scanning right to left.
fn classify<T: Ord>(text: &[T]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Greater => SuffixType::L,
            std::cmp::Ordering::Less => SuffixType::S,
            std::cmp::Ordering::Equal => types[i + 1],
        };
    }

    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i != EMPTY && i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

/// Symbol counts, from which bucket heads and tails are derived on demand.
struct Buckets {
    sizes: Vec<usize>,
}

impl Buckets {
    fn new<T: Copy + Into<usize>>(text: &[T], alphabet_size: usize) -> Self {
        let mut sizes = vec![0; alphabet_size];
        for &c in text {
            sizes[c.into()] += 1;
        }
        Self { sizes }
    }

    fn heads(&self) -> Vec<usize> {
        let mut sum = 0;
        self.sizes
            .iter()
            .map(|&size| {
                let head = sum;
                sum += size;
                head
            })
            .collect()
    }

    fn tails(&self) -> Vec<usize> {
        let mut sum = 0;
        self.sizes
            .iter()
            .map(|&size| {
                sum += size;
                sum
            })
            .collect()
    }
}

/// Seed `lms` (in the given order) at bucket tails, then induce L and S suffixes.
fn induced_sort<T: Copy + Into<usize>>(
    text: &[T],
    types: &[SuffixType],
    buckets: &Buckets,
    lms: &[usize],
    sa: &mut [usize],
) {
    let mut tails = buckets.tails();
    for &pos in lms.iter().rev() {
        let c = text[pos].into();
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = buckets.heads();
    for i in 0..sa.len() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::L {
            let c = text[j].into();
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = buckets.tails();
    for i in (0..sa.len()).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::S {
            let c = text[j].into();
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Compare two LMS substrings (symbols and types, up to the next LMS position).
fn lms_substrings_equal<T: Eq>(text: &[T], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i || lms_j {
                return lms_i && lms_j;
            }
        }

        k += 1;
    }
}
