//! Score always wins; the sort key only breaks ties.

use crate::common::{ids, rank_sorted, sample_menu};
use sommelier::{default_alias_table, rank, rank_scored, SearchState, SortKey, WineRecord};

#[test]
fn test_tied_reds_follow_sort_key() {
    let menu = sample_menu();
    assert_eq!(ids(&rank_sorted(&menu, "rosso", SortKey::Relevance)), ["2", "4", "5", "7"]);
    assert_eq!(ids(&rank_sorted(&menu, "rosso", SortKey::PriceAsc)), ["7", "4", "5", "2"]);
    assert_eq!(ids(&rank_sorted(&menu, "rosso", SortKey::PriceDesc)), ["2", "5", "4", "7"]);
    assert_eq!(ids(&rank_sorted(&menu, "rosso", SortKey::Vintage)), ["7", "4", "2", "5"]);
}

#[test]
fn test_empty_query_sorts_whole_menu() {
    let menu = sample_menu();
    assert_eq!(
        ids(&rank_sorted(&menu, "", SortKey::PriceAsc)),
        ["7", "8", "3", "6", "1", "4", "5", "2"]
    );
}

#[test]
fn test_missing_vintage_sorts_last() {
    let menu = sample_menu();
    assert_eq!(
        ids(&rank_sorted(&menu, "", SortKey::Vintage)),
        ["6", "1", "7", "3", "4", "2", "5", "8"]
    );
}

#[test]
fn test_score_beats_cheaper_price() {
    let wines = vec![
        WineRecord::new("cheap", "Clos du Roy")
            .with_type("Red")
            .with_region("Bordeaux Supérieur")
            .with_price(20.0),
        WineRecord::new("exact", "Château Margaux")
            .with_type("Red")
            .with_region("Bordeaux")
            .with_country("France")
            .with_price(500.0),
    ];
    let state = SearchState::with_query("rouge bordeaux").with_sort(SortKey::PriceAsc);
    let scored = rank_scored(&wines, &state, &default_alias_table());

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].wine.id, "exact");
    assert!(scored[0].score > scored[1].score);
    assert!((scored[1].score - 3.36 / 3.6).abs() < 1e-9, "got {}", scored[1].score);
}

#[test]
fn test_equal_prices_keep_menu_order() {
    let wines: Vec<WineRecord> = ["a", "b", "c"]
        .iter()
        .map(|id| WineRecord::new(*id, "House Red").with_type("Red").with_price(30.0))
        .collect();
    let state = SearchState::with_query("red").with_sort(SortKey::PriceDesc);
    assert_eq!(ids(&rank(&wines, &state, &default_alias_table())), ["a", "b", "c"]);
}

#[test]
fn test_ranking_is_deterministic() {
    let menu = sample_menu();
    let state = SearchState::with_query("red 2015").with_sort(SortKey::Vintage);
    let aliases = default_alias_table();
    assert_eq!(rank(&menu, &state, &aliases), rank(&menu, &state, &aliases));
}
