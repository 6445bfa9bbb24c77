// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance and trigram overlap.
//!
//! Two measures that fail in different ways, combined by taking the best:
//! Levenshtein handles single-character slips, trigrams handle reordered or
//! partially overlapping words. [`token_sim`] is the entry point.

mod levenshtein;
mod similarity;
mod trigram;

pub use levenshtein::*;
pub use similarity::*;
pub use trigram::*;
