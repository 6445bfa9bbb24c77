// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query normalization and tokenization.
//!
//! Any string a diner can type must normalize and tokenize without panicking,
//! and normalizing must be idempotent.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sommelier::{normalize, tokenize, STOPWORDS};

fuzz_target!(|query: &str| {
    let query: String = query.chars().take(200).collect();

    let once = normalize(&query);
    assert_eq!(normalize(&once), once, "normalize not idempotent for {:?}", query);
    assert_eq!(once.trim(), once, "untrimmed output for {:?}", query);

    for token in tokenize(&query) {
        assert!(token.chars().count() >= 2, "short token {:?} from {:?}", token, query);
        assert!(!STOPWORDS.contains(&token.as_str()), "stopword {:?} from {:?}", token, query);
    }
});
