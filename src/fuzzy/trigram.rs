// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trigram shingles and their Jaccard overlap.
//!
//! Trigrams catch transpositions and partial overlaps that edit distance
//! punishes hard: "sauvignon blanc" and "blanc sauvignon" share most of their
//! shingles while being far apart by Levenshtein.

use crate::utils::normalize;
use std::collections::HashSet;

/// The set of length-3 character windows of `normalize(value)`.
///
/// Empty for anything shorter than three characters after normalization.
pub fn trigrams(value: &str) -> HashSet<String> {
    let chars: Vec<char> = normalize(value).chars().collect();
    chars
        .windows(3)
        .map(|window| window.iter().collect::<String>())
        .collect()
}

/// `|A ∩ B| / |A ∪ B|` over trigram sets, or 0.0 when either set is empty.
pub fn trigram_jaccard(a: &str, b: &str) -> f64 {
    let grams_a = trigrams(a);
    let grams_b = trigrams(b);
    if grams_a.is_empty() || grams_b.is_empty() {
        return 0.0;
    }

    let shared = grams_a.intersection(&grams_b).count();
    let union = grams_a.len() + grams_b.len() - shared;
    shared as f64 / union as f64
}
