//! Synonyms across languages resolve to the same canonical facets.

use crate::common::{ids, rank_query, sample_menu, server_aliases};

#[test]
fn test_red_in_five_languages() {
    let menu = sample_menu();
    let aliases = server_aliases();
    for query in ["red", "kirmizi", "kırmızı", "rouge", "tinto", "ROSSO"] {
        assert_eq!(ids(&rank_query(&menu, query, &aliases)), ["2", "4", "5", "7"], "{}", query);
    }
}

#[test]
fn test_rose_aliases() {
    let menu = sample_menu();
    let aliases = server_aliases();
    for query in ["rosé", "rosado", "pembe"] {
        assert_eq!(ids(&rank_query(&menu, query, &aliases)), ["6"], "{}", query);
    }
}

#[test]
fn test_sparkling_aliases() {
    let ranked = rank_query(&sample_menu(), "spumante", &server_aliases());
    assert_eq!(ids(&ranked), ["8"]);
}

#[test]
fn test_country_adjectives() {
    let menu = sample_menu();
    let aliases = server_aliases();
    assert_eq!(ids(&rank_query(&menu, "french", &aliases)), ["2", "6"]);
    assert_eq!(ids(&rank_query(&menu, "türkiye", &aliases)), ["7"]);
    assert_eq!(ids(&rank_query(&menu, "italiano", &aliases)), ["5"]);
}

#[test]
fn test_multi_word_country_with_text() {
    let ranked = rank_query(&sample_menu(), "new zealand sauvignon", &server_aliases());
    assert_eq!(ids(&ranked), ["1"]);
}

#[test]
fn test_grape_and_body_from_server_table() {
    let menu = sample_menu();
    let aliases = server_aliases();
    assert_eq!(ids(&rank_query(&menu, "merlot", &aliases)), ["2"]);
    assert_eq!(ids(&rank_query(&menu, "cab sav", &aliases)), ["2", "4"]);
    assert_eq!(ids(&rank_query(&menu, "full bodied", &aliases)), ["2", "4", "5"]);
}

#[test]
fn test_type_and_country_together() {
    let ranked = rank_query(&sample_menu(), "red italian", &server_aliases());
    assert_eq!(ids(&ranked), ["5"]);
}

#[test]
fn test_pet_nat_spellings_agree() {
    let menu = sample_menu();
    for query in ["pet nat", "pet-nat", "pét-nat"] {
        assert_eq!(ids(&rank_query(&menu, query, &server_aliases())), ["8"], "query {:?}", query);
    }
}
