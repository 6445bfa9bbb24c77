// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The view's search state, as an immutable value.
//!
//! Every user action returns a new [`SearchState`]; nothing here is mutated
//! in place. The query box runs a small state machine:
//!
//! ```text
//!   Idle ──type──▶ Typing ──submit──▶ Applied ──clear──▶ Idle
//!    ▲               │  ▲                │
//!    └──submit("")───┘  └─────type───────┘
//! ```
//!
//! Only `submit` changes the active query, so keystrokes never trigger a
//! re-rank. Filter and sort changes bypass the machine entirely: they apply
//! immediately and leave the query phase alone. Anything that changes the
//! ranking inputs sends the view back to page 0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SORT KEY
// =============================================================================

/// Tiebreaker among equally scored wines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep input order among ties.
    #[default]
    Relevance,
    /// Newest vintage first.
    Vintage,
    PriceDesc,
    PriceAsc,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Vintage => "vintage",
            SortKey::PriceDesc => "price-desc",
            SortKey::PriceAsc => "price-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key {0:?} (expected vintage, price-desc or price-asc)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    /// The empty string is the dropdown's "no sort" entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "relevance" => Ok(SortKey::Relevance),
            "vintage" => Ok(SortKey::Vintage),
            "price-desc" => Ok(SortKey::PriceDesc),
            "price-asc" => Ok(SortKey::PriceAsc),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

// =============================================================================
// FACET FILTERS
// =============================================================================

/// Explicit filters from the filter panel. All of them must hold.
///
/// `types` and `bodies` are multi-selects matched exactly against the wine's
/// label. The text filters match as prefixes: normalized for company,
/// country and region, and literal for the vintage year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetFilters {
    pub types: Vec<String>,
    pub bodies: Vec<String>,
    pub company: String,
    pub country: String,
    pub region: String,
    pub vintage: String,
}

impl FacetFilters {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.bodies.is_empty()
            && self.company.trim().is_empty()
            && self.country.trim().is_empty()
            && self.region.trim().is_empty()
            && self.vintage.trim().is_empty()
    }
}

// =============================================================================
// SEARCH STATE
// =============================================================================

/// Where the query box is in its edit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// No active query and nothing being typed.
    #[default]
    Idle,
    /// The user is editing; `draft` is not yet part of the ranking.
    Typing { draft: String },
    /// A non-empty query is active.
    Applied,
}

/// Everything the view knows about the current search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    query: String,
    phase: QueryPhase,
    filters: FacetFilters,
    sort: SortKey,
    page: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state with `query` already applied. Handy outside an interactive view.
    pub fn with_query(query: &str) -> Self {
        Self::new().type_draft(query).submit()
    }

    /// The active query: what ranking runs against.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// What the query box shows: the draft while typing, else the active query.
    pub fn input(&self) -> &str {
        match &self.phase {
            QueryPhase::Typing { draft } => draft,
            _ => &self.query,
        }
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    pub fn filters(&self) -> &FacetFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Requested page index. The pipeline clamps it to the last valid page.
    pub fn page(&self) -> usize {
        self.page
    }

    // ---- transitions ----

    /// Edit the draft. The active query and page are untouched.
    pub fn type_draft(&self, draft: &str) -> Self {
        Self {
            phase: QueryPhase::Typing {
                draft: draft.to_string(),
            },
            ..self.clone()
        }
    }

    /// Snapshot the draft into the active query and go back to page 0.
    ///
    /// A blank draft clears the query (`Idle`). Submitting outside `Typing`
    /// re-applies the current query unchanged.
    pub fn submit(&self) -> Self {
        let query = self.input().trim().to_string();
        let phase = if query.is_empty() {
            QueryPhase::Idle
        } else {
            QueryPhase::Applied
        };
        Self {
            query,
            phase,
            page: 0,
            ..self.clone()
        }
    }

    /// Drop the active query and any draft.
    pub fn clear_query(&self) -> Self {
        Self {
            query: String::new(),
            phase: QueryPhase::Idle,
            page: 0,
            ..self.clone()
        }
    }

    pub fn with_filters(&self, filters: FacetFilters) -> Self {
        Self {
            filters,
            page: 0,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 0,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Whether moving from `self` to `next` changes the ranked list.
    ///
    /// Draft edits and page turns don't; the view only re-slices for those.
    pub fn needs_rerank(&self, next: &SearchState) -> bool {
        self.query != next.query || self.filters != next.filters || self.sort != next.sort
    }
}
