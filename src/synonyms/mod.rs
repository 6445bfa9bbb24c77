// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym resolution: from free text to canonical facet values.
//!
//! "kirmizi", "rouge" and "tinto" all mean Red. The alias table records that,
//! and [`find_intents`] reads a query against it. Detected intents become hard
//! gates in scoring, which is what keeps a search for "red" from ever showing
//! a white wine.

mod defaults;
mod intents;
mod table;

pub use defaults::default_alias_table;
pub use intents::{aliases_for, find_intents};
pub use table::{merge_alias_tables, AliasTable, Facet, FacetMap, LabelEntry, RawAliasTable};
