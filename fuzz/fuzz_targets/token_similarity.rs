// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for token similarity.
//!
//! Checks bounds, symmetry and reflexivity on arbitrary pairs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sommelier::fuzzy::{levenshtein, token_sim};
use sommelier::normalize;

#[derive(Debug, Arbitrary)]
struct Pair {
    a: String,
    b: String,
}

fuzz_target!(|pair: Pair| {
    // Cap lengths to avoid timeouts in the DP
    let a: String = pair.a.chars().take(40).collect();
    let b: String = pair.b.chars().take(40).collect();

    let sim = token_sim(&a, &b);
    assert!((0.0..=1.0).contains(&sim), "token_sim({:?}, {:?}) = {}", a, b, sim);
    assert_eq!(sim, token_sim(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    if !normalize(&a).is_empty() {
        assert_eq!(token_sim(&a, &a), 1.0, "not reflexive for {:?}", a);
    }

    let distance = levenshtein(&a, &b);
    let longest = a.chars().count().max(b.chars().count());
    assert!(distance <= longest, "distance {} exceeds {} for {:?} / {:?}", distance, longest, a, b);
});
