// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text canonicalization: the one place strings get folded before comparison.
//!
//! Every comparison in the engine goes through [`normalize`], so "Château",
//! "CHATEAU" and "chateau" are the same string as far as matching is concerned.

use unicode_normalization::UnicodeNormalization;

/// Words that carry no signal in a wine query.
///
/// Articles and connectors across the menu's languages, plus the generic
/// winery vocabulary that appears in half the names on any list.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "wine", "wines", "vineyard", "estate", "cellars", "winery", "and", "of",
    "de", "la", "le", "di", "da", "del", "y", "el", "dos", "das",
];

/// Tokens shorter than this (in characters) are dropped by [`tokenize`].
pub const MIN_TOKEN_CHARS: usize = 2;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables fuzzy matching between ASCII and accented versions:
/// - "Château" → "chateau"
/// - "Rosé" → "rose"
/// - "España" → "espana"
///
/// # Algorithm
///
/// 1. Lowercase (first, so case mappings that emit combining marks get stripped too)
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Filter out combining marks
/// 4. Collapse whitespace, which also trims
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining diacritical mark.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split a query into scoring tokens.
///
/// Splits `normalize(value)` on runs of non-alphanumeric characters, then drops
/// stopwords and anything shorter than [`MIN_TOKEN_CHARS`]. Order is preserved and
/// duplicates are kept.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Is this token a (possibly partial) vintage year: 2 to 4 ASCII digits?
pub fn is_year_token(token: &str) -> bool {
    (2..=4).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
}

/// Whole-word containment: does `needle` appear in `haystack` bounded by spaces?
///
/// Both sides are expected to be normalized already. Used for alias detection so
/// "red" matches "dry red" but not "bored".
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let padded_haystack = format!(" {} ", haystack);
    let padded_needle = format!(" {} ", needle);
    padded_haystack.contains(&padded_needle)
}
