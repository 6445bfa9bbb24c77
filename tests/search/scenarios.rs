//! The headline behaviors: category gates, exact names, vintages, typos.

use crate::common::{ids, names, rank_query, sample_menu, server_aliases};
use sommelier::scoring::Gate;
use sommelier::{default_alias_table, explain, rank, score, SearchState, WineRecord};

#[test]
fn test_red_never_surfaces_white() {
    let wines = vec![
        WineRecord::new("1", "Red Mountain Chardonnay").with_type("White"),
        WineRecord::new("2", "Napa Cabernet").with_type("Red"),
    ];
    let aliases = default_alias_table();

    assert_eq!(score(&wines[0], "red", &aliases), 0.0);
    assert_eq!(ids(&rank_query(&wines, "red", &aliases)), ["2"]);
}

#[test]
fn test_margaux_2015() {
    let wines = vec![
        WineRecord::new("1", "Cloudy Bay Sauvignon Blanc").with_type("White").with_vintage(2021),
        WineRecord::new("2", "Château Margaux").with_type("Red").with_vintage(2015),
    ];
    let ranked = rank_query(&wines, "margaux 2015", &default_alias_table());
    assert_eq!(names(&ranked), ["Château Margaux"]);
}

#[test]
fn test_exact_name_scores_high_and_ranks_first() {
    let menu = sample_menu();
    let aliases = server_aliases();
    for wine in menu.iter().filter(|w| w.id != "3") {
        let s = score(wine, &wine.name, &aliases);
        assert!(s >= 0.9, "{} scored {}", wine.name, s);

        let ranked = rank_query(&menu, &wine.name, &aliases);
        assert_eq!(ranked[0].id, wine.id, "query {:?}", wine.name);
    }
}

#[test]
fn test_exact_name_with_type_word_is_gated_by_type() {
    let menu = sample_menu();
    let aliases = server_aliases();
    let chardonnay = &menu[2];
    assert_eq!(chardonnay.name, "Red Mountain Chardonnay");

    let explanation = explain(chardonnay, &chardonnay.name, &aliases);
    assert_eq!(explanation.gate, Some(Gate::Type));
    assert_eq!(explanation.score, 0.0);

    let ranked = rank_query(&menu, &chardonnay.name, &aliases);
    assert!(ranked.iter().all(|w| w.wine_type.as_deref() == Some("Red")));
    assert!(!ids(&ranked).contains(&"3".to_string()));
}

#[test]
fn test_empty_query_returns_everything_in_menu_order() {
    let menu = sample_menu();
    let ranked = rank(&menu, &SearchState::new(), &server_aliases());
    assert_eq!(ids(&ranked), ids(&menu));
}

#[test]
fn test_unscorable_queries_return_nothing() {
    let menu = sample_menu();
    for query in ["?!", "x", "the wine"] {
        assert!(rank_query(&menu, query, &server_aliases()).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_vintage_year_component() {
    let wine = WineRecord::new("1", "Château Margaux").with_vintage(2015);
    let aliases = default_alias_table();
    assert_eq!(score(&wine, "2015", &aliases), 1.0);
    assert!((score(&wine, "15", &aliases) - 0.85).abs() < 1e-9);
}

#[test]
fn test_partial_year_filters_the_list() {
    let ranked = rank_query(&sample_menu(), "201", &server_aliases());
    // 2015, 2018, 2019, 2013
    assert_eq!(ids(&ranked), ["2", "3", "4", "5"]);
}

#[test]
fn test_region_typo_still_finds_wine() {
    let ranked = rank_query(&sample_menu(), "bordeux", &server_aliases());
    assert_eq!(ranked[0].name, "Château Margaux");

    let ranked = rank_query(&sample_menu(), "piedmnt", &server_aliases());
    assert_eq!(ranked[0].name, "Barolo Riserva");
}

#[test]
fn test_unrelated_query_returns_nothing() {
    assert!(rank_query(&sample_menu(), "zinfandel lodi", &server_aliases()).is_empty());
}

#[test]
fn test_exclusion_is_explained() {
    let wine = WineRecord::new("1", "Red Mountain Chardonnay").with_type("White");
    let explanation = explain(&wine, "tinto", &default_alias_table());
    assert_eq!(explanation.score, 0.0);
    assert!(explanation.gate.is_some());
    assert!(explanation.contributions.is_empty());
}
