// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A loaded menu plus its current search.

use super::MenuSnapshot;
use crate::search::{facet_options, page_of, rank, FacetOptions, RankedPage, SearchState};
use crate::types::{Restaurant, WineRecord};
use tracing::debug;

/// Holds the snapshots for one menu view and the ranked list for its state.
///
/// [`apply`](Self::apply) replaces the state wholesale and re-ranks only when
/// the query, filters or sort changed. Draft edits and page turns reuse the
/// last ranking.
#[derive(Debug, Clone)]
pub struct MenuView {
    snapshot: MenuSnapshot,
    state: SearchState,
    ranked: Vec<WineRecord>,
}

impl MenuView {
    pub fn new(snapshot: MenuSnapshot) -> Self {
        let state = SearchState::new();
        let ranked = rank(&snapshot.wines, &state, &snapshot.aliases);
        Self {
            snapshot,
            state,
            ranked,
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.snapshot.restaurant
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Every wine that survived the current search, best first.
    pub fn ranked(&self) -> &[WineRecord] {
        &self.ranked
    }

    /// Move to `next`. Returns whether the list was re-ranked.
    pub fn apply(&mut self, next: SearchState) -> bool {
        let rerank = self.state.needs_rerank(&next);
        if rerank {
            self.ranked = rank(&self.snapshot.wines, &next, &self.snapshot.aliases);
        } else {
            debug!("search state changed without touching ranking inputs");
        }
        self.state = next;
        rerank
    }

    /// The page the state asks for, clamped to the last one.
    pub fn current_page(&self) -> RankedPage {
        page_of(self.ranked.clone(), self.state.page())
    }

    /// Choices for the type and body filters, from the whole menu.
    pub fn facet_options(&self) -> FacetOptions {
        facet_options(&self.snapshot.wines)
    }
}
