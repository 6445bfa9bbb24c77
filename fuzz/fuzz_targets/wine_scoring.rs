// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scoring and ranking.
//!
//! Arbitrary queries against arbitrary wines: scores stay in [0, 1], the
//! ranking never grows the list, and scores come out non-increasing.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sommelier::{
    default_alias_table, paginate, rank_scored, score, SearchState, SortKey, WineRecord,
    PAGE_SIZE,
};

#[derive(Debug, Arbitrary)]
struct FuzzWine {
    name: String,
    wine_type: Option<String>,
    body: Option<String>,
    country: Option<String>,
    region: Option<String>,
    vintage: Option<u16>,
    grapes: Vec<String>,
    price: Option<u16>,
}

#[derive(Debug, Arbitrary)]
struct ScoringInput {
    query: String,
    wines: Vec<FuzzWine>,
    sort: u8,
    page: u8,
}

fn cap(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: ScoringInput| {
    let wines: Vec<WineRecord> = input
        .wines
        .iter()
        .take(30)
        .enumerate()
        .map(|(i, w)| {
            let mut wine = WineRecord::new(i.to_string(), cap(&w.name));
            wine.wine_type = w.wine_type.as_deref().map(cap);
            wine.body = w.body.as_deref().map(cap);
            wine.country = w.country.as_deref().map(cap);
            wine.region = w.region.as_deref().map(cap);
            wine.vintage = w.vintage;
            wine.grapes = w.grapes.iter().take(4).map(|g| cap(g)).collect();
            wine.price = w.price.map(f64::from);
            wine
        })
        .collect();

    let query = cap(&input.query);
    let aliases = default_alias_table();

    for wine in &wines {
        let s = score(wine, &query, &aliases);
        assert!((0.0..=1.0).contains(&s), "score {} for {:?} against {:?}", s, query, wine);
    }

    let sort = match input.sort % 4 {
        0 => SortKey::Relevance,
        1 => SortKey::Vintage,
        2 => SortKey::PriceDesc,
        _ => SortKey::PriceAsc,
    };
    let state = SearchState::with_query(&query).with_sort(sort);
    let ranked = rank_scored(&wines, &state, &aliases);

    assert!(ranked.len() <= wines.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking out of order for {:?}", query);
    }

    let page = paginate(ranked.len(), usize::from(input.page), PAGE_SIZE);
    assert!(page.index < page.page_count);
    assert!(page.range_end <= ranked.len());
});
