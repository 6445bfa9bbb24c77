// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Intent detection: which canonical facet values does a query mention?

use super::table::FacetMap;
use crate::utils::{contains_word, normalize};

/// Every label in `facet_map` whose label or any alias appears in the query as
/// a whole word (space-delimited after normalization).
///
/// Returns all hits in table order, not just the best one: a query can
/// legitimately imply several values for one facet.
pub fn find_intents(facet_map: &FacetMap, query: &str) -> Vec<String> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    facet_map
        .iter()
        .filter(|entry| {
            contains_word(&query, &normalize(&entry.label))
                || entry.aliases.iter().any(|alias| contains_word(&query, alias))
        })
        .map(|entry| entry.label.clone())
        .collect()
}

/// The normalized label plus every alias for `label`; empty if unknown.
pub fn aliases_for(facet_map: &FacetMap, label: &str) -> Vec<String> {
    match facet_map.get(label) {
        Some(entry) => std::iter::once(normalize(&entry.label))
            .chain(entry.aliases.iter().cloned())
            .collect(),
        None => Vec::new(),
    }
}
