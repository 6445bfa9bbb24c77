//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sommelier::{
    default_alias_table, merge_alias_tables, rank, AliasTable, Facet, FacetFilters, SearchState,
    SortKey, WineRecord,
};

// Re-export canonical test utilities from sommelier::testing
pub use sommelier::testing::{make_typed_wine, make_wine, sample_menu, synthetic_menu};

// ============================================================================
// ALIAS TABLES
// ============================================================================

/// Built-in defaults plus the body and grape labels a server would send.
pub fn server_aliases() -> AliasTable {
    let overrides = AliasTable::new()
        .with(Facet::Body, "Full", ["full", "full bodied", "dolgun"])
        .with(Facet::Body, "Light", ["light", "hafif"])
        .with(Facet::Grape, "Merlot", ["merlot", "merlo"])
        .with(Facet::Grape, "Cabernet Sauvignon", ["cabernet sauvignon", "cab sav"])
        .with(Facet::Grape, "Nebbiolo", ["nebbiolo"]);
    merge_alias_tables(&default_alias_table(), &overrides)
}

// ============================================================================
// RANKING SHORTHANDS
// ============================================================================

/// Rank `wines` for an applied `query` with default filters and sort.
pub fn rank_query(wines: &[WineRecord], query: &str, aliases: &AliasTable) -> Vec<WineRecord> {
    rank(wines, &SearchState::with_query(query), aliases)
}

pub fn rank_sorted(wines: &[WineRecord], query: &str, sort: SortKey) -> Vec<WineRecord> {
    let state = SearchState::with_query(query).with_sort(sort);
    rank(wines, &state, &server_aliases())
}

pub fn rank_filtered(wines: &[WineRecord], query: &str, filters: FacetFilters) -> Vec<WineRecord> {
    let state = SearchState::with_query(query).with_filters(filters);
    rank(wines, &state, &server_aliases())
}

/// Ids of `wines`, in order.
pub fn ids(wines: &[WineRecord]) -> Vec<String> {
    wines.iter().map(|w| w.id.clone()).collect()
}

/// Names of `wines`, in order.
pub fn names(wines: &[WineRecord]) -> Vec<String> {
    wines.iter().map(|w| w.name.clone()).collect()
}
