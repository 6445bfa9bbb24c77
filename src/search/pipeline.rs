// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score → filter → threshold → sort → paginate.
//!
//! One pure pass over the menu per recomputation. The menu is small (tens to
//! low hundreds of wines), so everything is recomputed from scratch each time
//! and nothing is cached between calls.

use super::filters::{passes_facet_filters, passes_query_filter};
use super::paging::{paginate, Page, PAGE_SIZE};
use super::state::SearchState;
use crate::contracts::check_ranked_order;
use crate::scoring::ranking::compare_scored;
use crate::scoring::{QueryPlan, SCORE_THRESHOLD};
use crate::synonyms::AliasTable;
use crate::types::{ScoredWine, WineRecord};
use tracing::debug;

/// The visible slice of a ranking plus where it sits in the whole.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPage {
    pub page: Page,
    pub wines: Vec<WineRecord>,
}

/// Rank `wines` for `state`, keeping scores.
///
/// Wines must pass the query's implied facets and the filter panel. For any
/// non-blank query, wines below [`SCORE_THRESHOLD`] are dropped, so a query
/// with nothing scorable in it ("?!", "the wine") keeps nothing. A blank query
/// keeps every filter survivor, in input order unless the sort key says
/// otherwise.
pub fn rank_scored(wines: &[WineRecord], state: &SearchState, aliases: &AliasTable) -> Vec<ScoredWine> {
    let plan = QueryPlan::new(state.query(), aliases);
    let thresholded = !plan.is_empty();

    let mut ranked: Vec<ScoredWine> = wines
        .iter()
        .filter(|wine| passes_query_filter(&plan, wine) && passes_facet_filters(state.filters(), wine))
        .map(|wine| ScoredWine {
            score: plan.score(wine),
            wine: wine.clone(),
        })
        .filter(|scored| !thresholded || scored.score >= SCORE_THRESHOLD)
        .collect();

    // stable: full ties keep menu order
    ranked.sort_by(|a, b| compare_scored(a, b, state.sort()));

    if cfg!(debug_assertions) {
        let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
        check_ranked_order(&scores);
    }

    debug!(
        query = state.query(),
        sort = %state.sort(),
        candidates = wines.len(),
        kept = ranked.len(),
        thresholded,
        "ranked menu"
    );
    ranked
}

/// Rank `wines` for `state`, best first.
pub fn rank(wines: &[WineRecord], state: &SearchState, aliases: &AliasTable) -> Vec<WineRecord> {
    rank_scored(wines, state, aliases)
        .into_iter()
        .map(|scored| scored.wine)
        .collect()
}

/// Rank and cut out the requested page (clamped to the last one).
pub fn rank_page(wines: &[WineRecord], state: &SearchState, aliases: &AliasTable) -> RankedPage {
    page_of(rank(wines, state, aliases), state.page())
}

/// Cut page `requested` out of an already ranked list.
pub fn page_of(ranked: Vec<WineRecord>, requested: usize) -> RankedPage {
    let page = paginate(ranked.len(), requested, PAGE_SIZE);
    let wines = page.slice(&ranked).to_vec();
    RankedPage { page, wines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FacetFilters, SortKey};
    use crate::synonyms::default_alias_table;

    fn menu() -> Vec<WineRecord> {
        vec![
            WineRecord::new("1", "Red Mountain Chardonnay").with_type("White").with_price(30.0),
            WineRecord::new("2", "Napa Cabernet")
                .with_type("Red")
                .with_country("USA")
                .with_region("Napa Valley")
                .with_price(80.0),
            WineRecord::new("3", "Barolo Riserva")
                .with_type("Red")
                .with_country("Italy")
                .with_region("Piedmont")
                .with_price(60.0),
        ]
    }

    fn ids(wines: &[WineRecord]) -> Vec<&str> {
        wines.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_menu_order() {
        let ranked = rank(&menu(), &SearchState::new(), &default_alias_table());
        assert_eq!(ids(&ranked), ["1", "2", "3"]);
    }

    #[test]
    fn test_red_excludes_white() {
        let ranked = rank(&menu(), &SearchState::with_query("red"), &default_alias_table());
        assert_eq!(ids(&ranked), ["2", "3"]);
    }

    #[test]
    fn test_sort_key_orders_ties() {
        let state = SearchState::with_query("rosso").with_sort(SortKey::PriceAsc);
        let ranked = rank(&menu(), &state, &default_alias_table());
        assert_eq!(ids(&ranked), ["3", "2"]);
    }

    #[test]
    fn test_filters_apply_without_query() {
        let state = SearchState::new().with_filters(FacetFilters {
            country: "ita".into(),
            ..Default::default()
        });
        let ranked = rank(&menu(), &state, &default_alias_table());
        assert_eq!(ids(&ranked), ["3"]);
    }

    #[test]
    fn test_unscorable_query_keeps_nothing() {
        let aliases = default_alias_table();
        for query in ["the wine", "?!", "x"] {
            let ranked = rank(&menu(), &SearchState::with_query(query), &aliases);
            assert!(ranked.is_empty(), "{:?} kept {} wines", query, ranked.len());
        }
    }

    #[test]
    fn test_scores_are_kept() {
        let scored = rank_scored(&menu(), &SearchState::with_query("napa cabernet"), &default_alias_table());
        assert_eq!(scored[0].wine.id, "2");
        assert!(scored[0].score >= 0.9);
    }

    #[test]
    fn test_rank_page_clamps() {
        let wines: Vec<WineRecord> = (0..25)
            .map(|i| WineRecord::new(i.to_string(), format!("Wine {}", i)))
            .collect();
        let state = SearchState::new().with_page(10);
        let result = rank_page(&wines, &state, &default_alias_table());
        assert_eq!(result.page.index, 2);
        assert_eq!(result.wines.len(), 5);
        assert_eq!(result.wines[0].id, "20");
    }
}
