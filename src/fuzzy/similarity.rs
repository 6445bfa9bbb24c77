// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one similarity function everything else is built on.
//!
//! `token_sim` folds three measures into a single [0, 1] number and takes the
//! most generous. Exact and prefix matches short-circuit before any DP runs.

use super::levenshtein::levenshtein_similarity;
use super::trigram::trigram_jaccard;
use crate::contracts::check_similarity_bounded;
use crate::utils::normalize;

/// Similarity for an exact match after normalization.
pub const EXACT_SIM: f64 = 1.0;

/// Similarity when one string is a prefix of the other ("cab" / "cabernet").
pub const PREFIX_SIM: f64 = 0.9;

/// Floor granted when one string contains the other anywhere.
pub const CONTAINS_SIM: f64 = 0.8;

/// Typo-tolerant similarity of two strings in [0, 1].
///
/// 1. equal after [`normalize`] → 1.0
/// 2. one is a prefix of the other → 0.9
/// 3. otherwise the max of trigram Jaccard, scaled Levenshtein, and 0.8 if
///    either contains the other
///
/// A blank side (absent field, punctuation-free whitespace) scores 0.0, so
/// missing data never looks like a match. Symmetric in its arguments.
pub fn token_sim(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return EXACT_SIM;
    }
    if a.starts_with(&b) || b.starts_with(&a) {
        return PREFIX_SIM;
    }

    let contains = if a.contains(&b) || b.contains(&a) {
        CONTAINS_SIM
    } else {
        0.0
    };

    let sim = trigram_jaccard(&a, &b)
        .max(levenshtein_similarity(&a, &b))
        .max(contains);
    check_similarity_bounded(&a, &b, sim);
    sim
}

/// [`token_sim`] over an optional field; absent fields score 0.0.
pub fn field_sim(field: Option<&str>, value: &str) -> f64 {
    field.map_or(0.0, |f| token_sim(f, value))
}
