// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: score first, the user's sort key only among ties.
//!
//! The sort dropdown never overrides relevance. Two wines with different
//! scores stay in score order whatever the key; the key only reorders wines
//! the scorer couldn't tell apart (which, for an empty query, is all of them).

use crate::search::SortKey;
use crate::types::ScoredWine;
use std::cmp::Ordering;

/// Compare two scored wines for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Sort key** - `Vintage` newest first, `PriceDesc`/`PriceAsc` by price
///    (absent values count as 0), `Relevance` leaves ties alone
///
/// Returns `Equal` for full ties so a stable sort keeps input order.
pub fn compare_scored(a: &ScoredWine, b: &ScoredWine, sort: SortKey) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => match sort {
            SortKey::Relevance => Ordering::Equal,
            SortKey::Vintage => b
                .wine
                .vintage
                .unwrap_or(0)
                .cmp(&a.wine.vintage.unwrap_or(0)),
            SortKey::PriceDesc => price(b).total_cmp(&price(a)),
            SortKey::PriceAsc => price(a).total_cmp(&price(b)),
        },
        ord => ord,
    }
}

fn price(scored: &ScoredWine) -> f64 {
    scored.wine.price.unwrap_or(0.0)
}
