// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean filters applied alongside scoring.
//!
//! Two independent checks, both strict AND:
//!
//! - [`passes_query_filter`]: facets and years the *query* asked for, at a
//!   stricter threshold than the scorer's gates
//! - [`passes_facet_filters`]: whatever the filter panel says
//!
//! Neither looks at the score.

use super::state::FacetFilters;
use crate::scoring::{body_sim, gate_passes, grape_sim, place_sim, type_sim, QueryPlan, STRICT_INTENT_MATCH};
use crate::synonyms::Facet;
use crate::types::WineRecord;
use crate::utils::normalize;

/// Does `wine` satisfy every facet and year the query implied?
///
/// Type, body, country and grape intents each need one intent at
/// [`STRICT_INTENT_MATCH`]. Year tokens need the vintage to start with one of
/// them, or end with a two-digit one. A wine without a vintage fails any year.
pub fn passes_query_filter(plan: &QueryPlan, wine: &WineRecord) -> bool {
    gate_passes(plan.intents(Facet::Type), STRICT_INTENT_MATCH, |t| type_sim(wine, t))
        && gate_passes(plan.intents(Facet::Body), STRICT_INTENT_MATCH, |b| body_sim(wine, b))
        && gate_passes(plan.intents(Facet::Country), STRICT_INTENT_MATCH, |c| place_sim(wine, c))
        && gate_passes(plan.intents(Facet::Grape), STRICT_INTENT_MATCH, |g| grape_sim(wine, g))
        && passes_year_filter(plan.year_tokens(), &wine.vintage_string())
}

fn passes_year_filter(years: &[String], vintage: &str) -> bool {
    if years.is_empty() {
        return true;
    }
    if vintage.is_empty() {
        return false;
    }
    years
        .iter()
        .any(|y| vintage.starts_with(y.as_str()) || (y.len() == 2 && vintage.ends_with(y.as_str())))
}

/// Does `wine` satisfy the filter panel?
pub fn passes_facet_filters(filters: &FacetFilters, wine: &WineRecord) -> bool {
    in_selection(&filters.types, wine.wine_type.as_deref())
        && in_selection(&filters.bodies, wine.body.as_deref())
        && normalized_prefix(&filters.company, wine.producer.as_deref())
        && normalized_prefix(&filters.country, wine.country.as_deref())
        && normalized_prefix(&filters.region, wine.region.as_deref())
        && wine.vintage_string().starts_with(filters.vintage.trim())
}

/// Empty selection means "any". Otherwise the label must be selected verbatim.
fn in_selection(selected: &[String], value: Option<&str>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.iter().any(|s| s == v))
}

fn normalized_prefix(filter: &str, value: Option<&str>) -> bool {
    let prefix = normalize(filter);
    prefix.is_empty() || normalize(value.unwrap_or_default()).starts_with(&prefix)
}

// =============================================================================
// FACET OPTIONS
// =============================================================================

/// Choices for the type and body multi-selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetOptions {
    pub types: Vec<String>,
    pub bodies: Vec<String>,
}

/// Distinct type and body labels present in `wines`, in first-seen order.
pub fn facet_options(wines: &[WineRecord]) -> FacetOptions {
    let mut options = FacetOptions::default();
    for wine in wines {
        push_distinct(&mut options.types, wine.wine_type.as_deref());
        push_distinct(&mut options.bodies, wine.body.as_deref());
    }
    options
}

fn push_distinct(into: &mut Vec<String>, value: Option<&str>) {
    if let Some(v) = value {
        if !v.trim().is_empty() && !into.iter().any(|seen| seen == v) {
            into.push(v.to_string());
        }
    }
}
