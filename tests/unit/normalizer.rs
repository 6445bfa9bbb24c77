//! Normalization and tokenization of menu text and queries.

use sommelier::{is_year_token, normalize, tokenize, STOPWORDS};

#[test]
fn test_accents_fold_across_languages() {
    assert_eq!(normalize("Côtes du Rhône"), "cotes du rhone");
    assert_eq!(normalize("Grüner Veltliner"), "gruner veltliner");
    assert_eq!(normalize("Penedès"), "penedes");
    assert_eq!(normalize("PÉT-NAT"), "pet-nat");
}

#[test]
fn test_query_tokens_keep_years_and_order() {
    assert_eq!(
        tokenize("Barolo, 2013 — Giacomo Conterno"),
        vec!["barolo", "2013", "giacomo", "conterno"]
    );
}

#[test]
fn test_generic_winery_words_are_dropped() {
    assert_eq!(tokenize("Estate Winery Cellars of Napa"), vec!["napa"]);
    for word in STOPWORDS {
        assert!(tokenize(word).is_empty(), "{} should be dropped", word);
    }
}

#[test]
fn test_degenerate_queries_have_no_tokens() {
    for query in ["", "   ", "!!!", "a", "-- / --", "the wine"] {
        assert!(tokenize(query).is_empty(), "{:?}", query);
    }
}

#[test]
fn test_year_tokens() {
    let years: Vec<String> = tokenize("merlot 15 2015 19 20150")
        .into_iter()
        .filter(|t| is_year_token(t))
        .collect();
    assert_eq!(years, vec!["15", "2015", "19"]);
}
