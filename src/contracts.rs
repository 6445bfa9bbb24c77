// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking engine.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** during development and in tests
//!
//! # Contracts
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_score_bounded`      | every score is in [0, 1]                   |
//! | `check_similarity_bounded` | every similarity is in [0, 1]              |
//! | `check_ranked_order`       | ranked scores are non-increasing           |
//! | `check_page_in_bounds`     | page index is a valid page of the results  |
//!
//! # Usage
//!
//! ```ignore
//! use sommelier::contracts::*;
//!
//! // In debug builds, this panics if the score escaped [0, 1]
//! check_score_bounded(score);
//!
//! // In release builds, this is a no-op
//! ```

use crate::scoring::{INTENT_MATCH, SCORE_THRESHOLD, STRICT_INTENT_MATCH, STRONG_MATCH};

/// Float slack for weighted averages of values in [0, 1].
const EPSILON: f64 = 1e-9;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The pipeline's facet filter can only be stricter than the scorer's gate,
/// and the acceptance threshold must leave room for a match.
const _: () = {
    assert!(INTENT_MATCH <= STRICT_INTENT_MATCH);
    assert!(STRICT_INTENT_MATCH <= 1.0);
    assert!(SCORE_THRESHOLD > 0.0 && SCORE_THRESHOLD <= 1.0);
    assert!(STRONG_MATCH > 0.0 && STRONG_MATCH <= 1.0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a relevance score is in [0, 1].
///
/// # Panics (debug builds only)
/// Panics if the score is NaN or outside [0, 1].
#[inline]
pub fn check_score_bounded(score: f64) {
    debug_assert!(
        (-EPSILON..=1.0 + EPSILON).contains(&score),
        "Contract violation: score {} outside [0, 1]",
        score
    );
}

/// Check that a similarity is in [0, 1].
///
/// # Panics (debug builds only)
/// Panics if the similarity is NaN or outside [0, 1].
#[inline]
pub fn check_similarity_bounded(a: &str, b: &str, sim: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&sim),
        "Contract violation: similarity({:?}, {:?}) = {} outside [0, 1]",
        a,
        b,
        sim
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that scores never increase down a ranked list.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked_order(scores: &[f64]) {
    for i in 1..scores.len() {
        debug_assert!(
            scores[i - 1] >= scores[i],
            "Contract violation: ranked[{}] score {} < ranked[{}] score {}",
            i - 1,
            scores[i - 1],
            i,
            scores[i]
        );
    }
}

/// Check that a page index is valid for `total` items at `page_size` per page.
///
/// An empty result still has exactly one (empty) page, so index 0 is always valid.
///
/// # Panics (debug builds only)
/// Panics if `index` is past the last page.
#[inline]
pub fn check_page_in_bounds(index: usize, total: usize, page_size: usize) {
    let page_count = total.div_ceil(page_size.max(1)).max(1);
    debug_assert!(
        index < page_count,
        "Contract violation: page {} >= page_count {} (total={}, page_size={})",
        index,
        page_count,
        total,
        page_size
    );
}
