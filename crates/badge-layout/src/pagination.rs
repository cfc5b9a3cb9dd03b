//! Pagination planning
//!
//! Partitions an ordered item list into fixed-capacity pages. Assignment
//! strictly follows source order: no sorting, no balancing, no drops.

use crate::types::{LayoutError, Result};

/// Half-open item range `[start, end)` assigned to one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// Page ordinal (0-based)
    pub page: usize,
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The complete page plan for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    /// Items per page used to build the plan
    pub capacity: usize,
    /// Real entries from the source list
    pub item_count: usize,
    /// Trailing blank rows appended after the real entries
    pub blank_rows: usize,
    pub ranges: Vec<PageRange>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.ranges.len()
    }

    /// Total slots across all pages, real entries plus blanks
    pub fn total_items(&self) -> usize {
        self.item_count + self.blank_rows
    }
}

/// Partition `item_count` entries (plus `blank_rows` trailing blanks) into
/// pages of `capacity` items.
///
/// Zero total items is a valid empty plan. Zero capacity is a configuration
/// error; it is never clamped to a single page.
pub fn paginate(item_count: usize, capacity: usize, blank_rows: usize) -> Result<PagePlan> {
    if capacity == 0 {
        return Err(LayoutError::Config(
            "Page capacity is 0: the item does not fit on the selected paper".to_string(),
        ));
    }

    let total = item_count + blank_rows;
    let page_count = (total + capacity - 1) / capacity;

    let ranges = (0..page_count)
        .map(|page| PageRange {
            page,
            start: page * capacity,
            end: ((page + 1) * capacity).min(total),
        })
        .collect();

    Ok(PagePlan {
        capacity,
        item_count,
        blank_rows,
        ranges,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_items_capacity_two() {
        let plan = paginate(7, 2, 0).unwrap();

        assert_eq!(plan.page_count(), 4);
        let ranges: Vec<(usize, usize)> = plan.ranges.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(ranges, vec![(0, 2), (2, 4), (4, 6), (6, 7)]);
    }

    #[test]
    fn test_ranges_cover_source_exactly() {
        // Concatenating all page ranges in order must reproduce 0..N with no
        // gaps, overlaps, or reordering.
        for (n, c, b) in [(0, 1, 0), (1, 1, 0), (7, 2, 0), (10, 5, 0), (23, 7, 4)] {
            let plan = paginate(n, c, b).unwrap();
            let total = n + b;

            assert_eq!(plan.page_count(), (total + c - 1) / c);

            let mut flat = Vec::new();
            for range in &plan.ranges {
                assert!(range.len() <= c);
                flat.extend(range.start..range.end);
            }
            let expected: Vec<usize> = (0..total).collect();
            assert_eq!(flat, expected);
        }
    }

    #[test]
    fn test_empty_document_is_valid() {
        let plan = paginate(0, 4, 0).unwrap();
        assert_eq!(plan.page_count(), 0);
        assert!(plan.ranges.is_empty());
    }

    #[test]
    fn test_blank_rows_extend_final_pages() {
        // 3 real entries + 5 blanks at 4 per page = 2 pages
        let plan = paginate(3, 4, 5).unwrap();
        assert_eq!(plan.page_count(), 2);
        assert_eq!(plan.total_items(), 8);
        assert_eq!(plan.ranges[1].start, 4);
        assert_eq!(plan.ranges[1].end, 8);
    }

    #[test]
    fn test_zero_capacity_is_an_error() {
        let result = paginate(10, 0, 0);
        assert!(matches!(result, Err(LayoutError::Config(_))));
    }
}
