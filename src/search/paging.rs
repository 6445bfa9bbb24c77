// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size pages over a ranked list.

use crate::contracts::check_page_in_bounds;
use std::fmt;
use std::ops::Range;

/// Wines per page.
pub const PAGE_SIZE: usize = 10;

/// One page of a ranked list.
///
/// There is always at least one page: an empty list has a single empty one.
/// `range_start..=range_end` are 1-based positions of the visible items, both
/// 0 when the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub page_count: usize,
    pub total: usize,
    pub range_start: usize,
    pub range_end: usize,
}

impl Page {
    /// Is there a page after this one?
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Zero-based item range of this page, for slicing.
    pub fn item_range(&self) -> Range<usize> {
        if self.total == 0 {
            0..0
        } else {
            self.range_start - 1..self.range_end
        }
    }

    /// The items of `items` on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// Pager text, e.g. `Pg 1/4 • 1-10 / 37`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pg {}/{} • {}-{} / {}",
            self.index + 1,
            self.page_count,
            self.range_start,
            self.range_end,
            self.total
        )
    }
}

/// Number of pages for `total` items: `ceil(total / page_size)`, at least 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Resolve `requested` against `total` items, clamping past-the-end requests
/// to the last page.
pub fn paginate(total: usize, requested: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let page_count = page_count(total, page_size);
    let index = requested.min(page_count - 1);
    check_page_in_bounds(index, total, page_size);

    let (range_start, range_end) = if total == 0 {
        (0, 0)
    } else {
        (index * page_size + 1, ((index + 1) * page_size).min(total))
    };

    Page {
        index,
        page_count,
        total,
        range_start,
        range_end,
    }
}
