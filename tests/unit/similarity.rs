//! Token similarity: the typo-tolerant comparison behind every score.

use sommelier::fuzzy::{levenshtein, token_sim, trigram_jaccard, trigrams};

#[test]
fn test_levenshtein_classic_cases() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("", "rioja"), 5);
    assert_eq!(levenshtein("rioja", "rioja"), 0);
}

#[test]
fn test_levenshtein_counts_chars_not_bytes() {
    assert_eq!(levenshtein("rosé", "rose"), 1);
}

#[test]
fn test_trigrams_of_short_strings_are_empty() {
    assert!(trigrams("nz").is_empty());
    assert_eq!(trigram_jaccard("nz", "nz"), 0.0);
}

#[test]
fn test_trigram_overlap_survives_reordering() {
    let swapped = trigram_jaccard("sauvignon blanc", "blanc sauvignon");
    assert!(swapped > 0.6, "got {}", swapped);
}

#[test]
fn test_token_sim_ladder() {
    assert_eq!(token_sim("Rioja", "rioja"), 1.0);
    assert_eq!(token_sim("rio", "Rioja"), 0.9);
    assert_eq!(token_sim("napa", "Valley Napa"), 0.8);

    let typo = token_sim("bordeux", "Bordeaux");
    assert!((typo - 0.875).abs() < 1e-9, "got {}", typo);
}

#[test]
fn test_token_sim_short_strings_fall_back_to_edit_distance() {
    // no trigrams on either side: one edit in two characters
    assert_eq!(token_sim("nz", "na"), 0.5);
}

#[test]
fn test_unrelated_words_score_low() {
    assert!(token_sim("chardonnay", "nebbiolo") < 0.5);
    assert!(token_sim("red", "white") < 0.82);
}
