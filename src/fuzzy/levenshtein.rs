// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! Wine names are short (a few dozen characters at most), so the classic
//! single-row DP is plenty. Distances are measured in characters, never bytes,
//! so "rosé" vs "rose" is one edit before normalization and zero after.

/// Classic Levenshtein distance with unit insert, delete and substitute costs.
///
/// Operates on the strings as given. Callers that want accent/case folding
/// normalize first (see [`super::token_sim`]).
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a.is_empty() {
        return b_len;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != *bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Edit distance scaled into [0, 1]: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are identical, so they score 1.0.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}
