use crate::constants::{ATTENDANCE_ROWS_PER_PAGE, DEFAULT_BADGE_SIZE_PX};
use crate::layout::page_capacity;
use crate::pagination::{PagePlan, paginate};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Document-level layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentOptions {
    pub style: DocumentStyle,
    pub paper_size: PaperSize,
    pub item_size: ItemSize,
    /// Trailing blank rows appended after the real entries.
    /// Only the attendance style reads this; grid styles ignore it.
    pub blank_rows: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        let (width_px, height_px) = DEFAULT_BADGE_SIZE_PX;
        Self {
            style: DocumentStyle::Badge,
            paper_size: PaperSize::A4,
            item_size: ItemSize::new(width_px, height_px),
            blank_rows: 0,
        }
    }
}

impl DocumentOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let ItemSize {
            width_px,
            height_px,
        } = self.item_size;

        if !(width_px.is_finite() && height_px.is_finite()) || width_px <= 0.0 || height_px <= 0.0
        {
            return Err(LayoutError::Config(format!(
                "Item dimensions must be positive, got {}x{}",
                width_px, height_px
            )));
        }

        Ok(())
    }

    /// Blank rows that actually take part in pagination
    pub fn effective_blank_rows(&self) -> usize {
        match self.style {
            DocumentStyle::Attendance => self.blank_rows,
            _ => 0,
        }
    }

    /// Resolve the active page capacity.
    ///
    /// Grid styles derive it from paper and item geometry; the attendance
    /// table uses a fixed row count. A grid item too large for the paper is
    /// a configuration error, never a one-item page.
    pub fn capacity(&self) -> Result<usize> {
        self.validate()?;

        if !self.style.is_grid() {
            return Ok(ATTENDANCE_ROWS_PER_PAGE);
        }

        let capacity = page_capacity(self.paper_size, self.item_size).total();
        if capacity == 0 {
            return Err(LayoutError::Config(format!(
                "Item {}x{}px does not fit on {} paper",
                self.item_size.width_px,
                self.item_size.height_px,
                self.paper_size.name()
            )));
        }

        Ok(capacity)
    }

    /// Build the page plan for `item_count` entries under these options.
    pub fn plan(&self, item_count: usize) -> Result<PagePlan> {
        paginate(item_count, self.capacity()?, self.effective_blank_rows())
    }
}
