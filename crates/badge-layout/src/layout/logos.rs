//! Logo placement
//!
//! Positions each document-wide logo inside an item's header container.
//! Placement is a pure function of the logo list, the item width, and the
//! style's logo frame; identical inputs yield identical output.

use crate::types::{LogoAlignment, LogoSpec};

/// Per-style sizing rules for the logo row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoFrame {
    /// Default logo size as a fraction of the item width
    pub ratio: f32,
    /// Upper bound on the default logo size (pixels)
    pub ceiling_px: f32,
    /// Horizontal and vertical padding inside the item (pixels)
    pub pad_px: f32,
}

impl LogoFrame {
    /// Frame used by the badge template
    pub const BADGE: LogoFrame = LogoFrame {
        ratio: 0.25,
        ceiling_px: 64.0,
        pad_px: 24.0,
    };

    /// Frame used by the name-holder template
    pub const HOLDER: LogoFrame = LogoFrame {
        ratio: 0.15,
        ceiling_px: 48.0,
        pad_px: 12.0,
    };
}

/// Resolved top-left position and rendered size of one logo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    pub left_px: f32,
    pub top_px: f32,
    pub size_px: f32,
}

/// Place the logo at `index` within an item `item_width_px` wide.
///
/// The row width uses a single representative size (the size of the logo
/// being placed) for every slot; per-logo overrides are not summed. Only the
/// `left` and `top` spacing offsets shift the position; `right`/`bottom` are
/// carried for the editor and do not participate here.
pub fn place_logo(
    logos: &[LogoSpec],
    index: usize,
    item_width_px: f32,
    frame: &LogoFrame,
) -> LogoPlacement {
    let logo = &logos[index];

    let size_px = logo
        .size_px
        .unwrap_or_else(|| (item_width_px * frame.ratio).min(frame.ceiling_px));

    let container_width = item_width_px - 2.0 * frame.pad_px;
    let total_width = logos.len() as f32 * size_px;

    let mut left_px = match logo.alignment {
        LogoAlignment::Left => frame.pad_px + index as f32 * size_px,
        LogoAlignment::Center => (container_width - total_width) / 2.0 + index as f32 * size_px,
        LogoAlignment::Right => (container_width - total_width) + index as f32 * size_px,
    };

    let mut top_px = frame.pad_px;

    if let Some(spacing) = &logo.spacing {
        left_px += spacing.left;
        top_px += spacing.top;
    }

    LogoPlacement {
        left_px,
        top_px,
        size_px,
    }
}

/// Place every logo of the document in order.
pub fn place_logos(logos: &[LogoSpec], item_width_px: f32, frame: &LogoFrame) -> Vec<LogoPlacement> {
    (0..logos.len())
        .map(|index| place_logo(logos, index, item_width_px, frame))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
