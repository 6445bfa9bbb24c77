// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alias tables: canonical facet labels and the words people use for them.
//!
//! A table is built once per view by merging the built-in defaults with
//! whatever the server supplies. Merging is a pure function with two rules:
//! alias sets union, and the override's spelling of a label wins.

use crate::utils::normalize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A structured wine attribute reachable through synonym detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Type,
    Body,
    Grape,
    Country,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Type, Facet::Body, Facet::Grape, Facet::Country];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Type => "type",
            Facet::Body => "body",
            Facet::Grape => "grape",
            Facet::Country => "country",
        }
    }

    pub fn parse(name: &str) -> Option<Facet> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.as_str() == normalize(name))
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical label and its normalized, deduplicated aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    /// Display spelling, e.g. "Rosé".
    pub label: String,
    pub aliases: BTreeSet<String>,
}

/// Canonical label → aliases for a single facet.
///
/// Labels keep insertion order (defaults first, then new server labels) and
/// are unique by normalized spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetMap {
    entries: Vec<LabelEntry>,
}

impl FacetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, aliases)` pairs, merging duplicate labels.
    pub fn from_pairs<L, A, S>(pairs: impl IntoIterator<Item = (L, A)>) -> Self
    where
        L: Into<String>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (label, aliases) in pairs {
            map.insert(label, aliases);
        }
        map
    }

    /// Add aliases under `label`. An existing label with the same normalized
    /// spelling is reused and renamed to this spelling.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        label: impl Into<String>,
        aliases: impl IntoIterator<Item = S>,
    ) {
        let label = label.into();
        let aliases = aliases
            .into_iter()
            .map(|a| normalize(a.as_ref()))
            .filter(|a| !a.is_empty());

        let key = normalize(&label);
        match self.entries.iter_mut().find(|e| normalize(&e.label) == key) {
            Some(entry) => {
                entry.label = label;
                entry.aliases.extend(aliases);
            }
            None => self.entries.push(LabelEntry {
                label,
                aliases: aliases.collect(),
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&LabelEntry> {
        let key = normalize(label);
        self.entries.iter().find(|e| normalize(&e.label) == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Facet → canonical label → aliases. Immutable once built for a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    facets: BTreeMap<Facet, FacetMap>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The map for `facet`; empty if the table never mentioned it.
    pub fn facet(&self, facet: Facet) -> &FacetMap {
        static EMPTY: FacetMap = FacetMap {
            entries: Vec::new(),
        };
        self.facets.get(&facet).unwrap_or(&EMPTY)
    }

    pub fn facet_mut(&mut self, facet: Facet) -> &mut FacetMap {
        self.facets.entry(facet).or_default()
    }

    /// Chainable insert for building tables in code.
    pub fn with<S: AsRef<str>>(
        mut self,
        facet: Facet,
        label: &str,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.facet_mut(facet).insert(label, aliases);
        self
    }

    /// Total number of canonical labels across all facets.
    pub fn label_count(&self) -> usize {
        self.facets.values().map(FacetMap::len).sum()
    }
}

/// Union `override_table` onto `base`.
///
/// Per facet and per label (matched by normalized spelling), the alias sets
/// are unioned. When both sides define a label, the override's spelling is
/// kept. Labels only present in the override are appended.
pub fn merge_alias_tables(base: &AliasTable, override_table: &AliasTable) -> AliasTable {
    let mut merged = base.clone();
    for (facet, map) in &override_table.facets {
        let target = merged.facet_mut(*facet);
        for entry in map.iter() {
            target.insert(entry.label.clone(), entry.aliases.iter());
        }
    }
    merged
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

/// Alias table as the search-config endpoint serializes it:
/// `{"type": {"Red": ["red", "rouge"]}, "country": {...}}`.
///
/// Unknown facet names are ignored; `null` alias lists count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawAliasTable(pub BTreeMap<String, BTreeMap<String, Option<Vec<String>>>>);

impl From<RawAliasTable> for AliasTable {
    fn from(raw: RawAliasTable) -> Self {
        let mut table = AliasTable::new();
        for (facet_name, labels) in raw.0 {
            let Some(facet) = Facet::parse(&facet_name) else {
                tracing::debug!(facet = %facet_name, "ignoring unknown synonym facet");
                continue;
            };
            let map = table.facet_mut(facet);
            for (label, aliases) in labels {
                map.insert(label, aliases.unwrap_or_default());
            }
        }
        table
    }
}
