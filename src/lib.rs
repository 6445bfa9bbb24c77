// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search and ranking for restaurant wine lists.
//!
//! Given a free-text query, a set of filters and an in-memory wine list, this
//! crate produces an ordered page of wines. It tolerates typos ("merlit"),
//! multilingual synonyms ("kirmizi" → Red), partial vintages ("15" → 2015)
//! and matches across several fields, while keeping category correctness: a
//! query for "red" never surfaces a white wine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//! │  utils.rs   │──▶│  synonyms/   │──▶│  scoring/   │
//! │ (normalize, │   │ (AliasTable, │   │ (QueryPlan, │
//! │  tokenize)  │   │ find_intents)│   │ score, gate)│
//! └─────────────┘   └──────────────┘   └─────────────┘
//!        │                                    ▲  │
//!        ▼                                    │  ▼
//! ┌─────────────┐                      ┌─────────────┐
//! │   fuzzy/    │──────────────────────│   search/   │
//! │ (token_sim, │                      │ (rank, Page,│
//! │ levenshtein)│                      │ SearchState)│
//! └─────────────┘                      └─────────────┘
//!                                             ▲
//!                                  ┌──────────┴──────────┐
//!                                  │       source/       │
//!                                  │ (MenuSource, HTTP,  │
//!                                  │ load_menu, MenuView)│
//!                                  └─────────────────────┘
//! ```
//!
//! Everything left of `source` is pure and synchronous. `source` is the only
//! async code and the only code that can fail; its failures turn into
//! fallbacks before they reach ranking.
//!
//! # Usage
//!
//! ```ignore
//! use sommelier::{default_alias_table, rank, SearchState, WineRecord};
//!
//! let wines = vec![WineRecord::new("1", "Château Margaux").with_type("Red").with_vintage(2015)];
//! let aliases = default_alias_table();
//!
//! let state = SearchState::new().type_draft("margaux 2015").submit();
//! let ranked = rank(&wines, &state, &aliases);
//! ```

pub mod contracts;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod source;
pub mod synonyms;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use scoring::{explain, score, QueryPlan, ScoreExplanation};
pub use search::{
    facet_options, paginate, rank, rank_page, rank_scored, FacetFilters, FacetOptions, Page,
    QueryPhase, RankedPage, SearchState, SortKey, PAGE_SIZE,
};
pub use source::{
    load_menu, FileMenuSource, HttpMenuSource, MenuSnapshot, MenuSource, MenuView, SearchConfig,
    SourceError, ViewLiveness,
};
pub use synonyms::{default_alias_table, find_intents, merge_alias_tables, AliasTable, Facet};
pub use types::{
    GrapeValue, NumberOrString, RawWine, Restaurant, RestaurantMenu, ScoredWine, WineRecord,
};
pub use utils::{is_year_token, normalize, tokenize, STOPWORDS};
