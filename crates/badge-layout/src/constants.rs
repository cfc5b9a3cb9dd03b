//! Shared constants for document layout
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout and pagination process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Pixels per millimeter at screen density (96 px per inch, 25.4 mm per inch)
pub const PX_PER_MM: f32 = 96.0 / 25.4; // ≈ 3.7795

/// Convert millimeters to pixels
#[inline]
pub fn mm_to_px(mm: f32) -> f32 {
    mm * PX_PER_MM
}

/// Convert pixels to millimeters
#[inline]
pub fn px_to_mm(px: f32) -> f32 {
    px / PX_PER_MM
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Margin around the item grid on each page edge (pixels)
pub const PAGE_MARGIN_PX: f32 = 48.0;

/// Spacing between adjacent items in the grid (pixels)
pub const ITEM_SPACING_PX: f32 = 32.0;

// =============================================================================
// Item Defaults
// =============================================================================

/// Default badge dimensions (width, height) in pixels
pub const DEFAULT_BADGE_SIZE_PX: (f32, f32) = (350.0, 500.0);

/// Default name-holder dimensions (width, height) in pixels
pub const DEFAULT_HOLDER_SIZE_PX: (f32, f32) = (250.0, 100.0);

// =============================================================================
// Logos
// =============================================================================

/// Maximum number of logos a document may carry
pub const MAX_LOGOS: usize = 3;

// =============================================================================
// Attendance Table
// =============================================================================

/// Rows per page for the tabular attendance style.
/// Tabular capacity is a fixed constant, not derived from item geometry.
pub const ATTENDANCE_ROWS_PER_PAGE: usize = 20;
