//! Paper capacity calculation
//!
//! Maps a paper preset plus a uniform item size to the number of items a
//! single page can hold, after fixed margins and inter-item spacing.

use crate::constants::{ITEM_SPACING_PX, PAGE_MARGIN_PX};
use crate::types::{ItemSize, PaperSize};

/// Grid dimensions of one page for a given paper preset and item size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCapacity {
    /// Items per row
    pub per_row: usize,
    /// Rows per page
    pub per_col: usize,
}

impl PageCapacity {
    /// Total items one page can hold. Zero means the item does not fit;
    /// callers must treat that as a configuration error, never divide by it.
    pub fn total(&self) -> usize {
        self.per_row * self.per_col
    }
}

/// Compute how many items of `item` size fit on one sheet of `paper`.
///
/// The page is converted to pixels at screen density, a fixed margin is
/// reserved on every edge, and each item occupies its own size plus the
/// inter-item spacing.
pub fn page_capacity(paper: PaperSize, item: ItemSize) -> PageCapacity {
    let (paper_w_px, paper_h_px) = paper.dimensions_px();

    let avail_w = paper_w_px - 2.0 * PAGE_MARGIN_PX;
    let avail_h = paper_h_px - 2.0 * PAGE_MARGIN_PX;

    let per_row = (avail_w / (item.width_px + ITEM_SPACING_PX)).max(0.0) as usize;
    let per_col = (avail_h / (item.height_px + ITEM_SPACING_PX)).max(0.0) as usize;

    PageCapacity { per_row, per_col }
}

// =============================================================================
// Tests
// =============================================================================
