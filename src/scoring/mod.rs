// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how wines get their numbers and their order.
//!
//! Category correctness comes before relevance. Facet intents act as hard
//! gates, and only wines that pass every gate are averaged over the remaining
//! signals. Ranking then orders by score, with the user's sort key as a
//! tiebreaker only.

mod core;
pub mod ranking;

pub use self::core::*;
