// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The filter/sort pipeline: what the menu view actually renders.
//!
//! Everything upstream produces numbers. This module turns them into an
//! ordered, filtered, paginated list driven by an immutable [`SearchState`].
//! [`rank`] is the single entry point a presentation layer needs.

mod filters;
mod paging;
mod pipeline;
mod state;

pub use filters::{facet_options, passes_facet_filters, passes_query_filter, FacetOptions};
pub use paging::{page_count, paginate, Page, PAGE_SIZE};
pub use pipeline::{page_of, rank, rank_page, rank_scored, RankedPage};
pub use state::{FacetFilters, ParseSortKeyError, QueryPhase, SearchState, SortKey};
