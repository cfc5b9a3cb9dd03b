use crate::layout::page_capacity;
use crate::options::DocumentOptions;
use crate::types::*;

/// Summary of the document a configuration would produce
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentStatistics {
    /// Real entries from the source list
    pub source_items: usize,
    /// Trailing blank rows added by the plan
    pub blank_rows: usize,
    /// Items per row (1 for the tabular attendance style)
    pub per_row: usize,
    /// Rows per page
    pub per_col: usize,
    /// Items per page
    pub capacity: usize,
    pub page_count: usize,
}

/// Calculate statistics for one document configuration
pub fn calculate_statistics(
    options: &DocumentOptions,
    item_count: usize,
) -> Result<DocumentStatistics> {
    let plan = options.plan(item_count)?;

    let (per_row, per_col) = if options.style.is_grid() {
        let grid = page_capacity(options.paper_size, options.item_size);
        (grid.per_row, grid.per_col)
    } else {
        (1, plan.capacity)
    };

    Ok(DocumentStatistics {
        source_items: item_count,
        blank_rows: plan.blank_rows,
        per_row,
        per_col,
        capacity: plan.capacity,
        page_count: plan.page_count(),
    })
}
