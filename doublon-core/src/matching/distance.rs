// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! String Distance
//!
//! Edit-distance based similarity primitive used by the scorer. Not case-
//! or whitespace-aware itself; callers normalize first.

/// Computes the Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions all cost 1. Operates on Unicode
/// scalar values, so accented names compare sensibly.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row rolling version of the standard (|a|+1) x (|b|+1) DP table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Converts edit distance to a normalized similarity in `[0, 1]`.
///
/// `(max_len - distance) / max_len`, which yields 1.0 for identical
/// strings. Two empty strings are defined as similarity 1.0 (they are
/// equal); an empty string against a non-empty one scores
/// `(len - distance) / len`, i.e. 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}
