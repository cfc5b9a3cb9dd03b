use thiserror::Error;

use crate::constants::{self, MAX_LOGOS};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width >= height
    Landscape,
}

/// Supported paper presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
}

impl PaperSize {
    /// Physical dimensions in millimeters (portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
        }
    }

    /// Dimensions converted to pixels at screen density
    pub fn dimensions_px(self) -> (f32, f32) {
        let (w_mm, h_mm) = self.dimensions_mm();
        (constants::mm_to_px(w_mm), constants::mm_to_px(h_mm))
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
        }
    }
}

/// The kind of document being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentStyle {
    /// Conference badges laid out on a page grid
    Badge,
    /// Desk name-holders laid out on a page grid
    Holder,
    /// Tabular attendance sheet with a fixed row count per page
    Attendance,
}

impl DocumentStyle {
    /// Whether page capacity is derived from item geometry (grid styles)
    /// rather than a fixed row constant.
    pub fn is_grid(self) -> bool {
        matches!(self, DocumentStyle::Badge | DocumentStyle::Holder)
    }

    /// Output file name for this style
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentStyle::Badge => "badges.pdf",
            DocumentStyle::Holder => "name-holders.pdf",
            DocumentStyle::Attendance => "attendance-sheet.pdf",
        }
    }

    /// Human-readable document title
    pub fn title(self) -> &'static str {
        match self {
            DocumentStyle::Badge => "Badges",
            DocumentStyle::Holder => "Name Holders",
            DocumentStyle::Attendance => "Attendance Sheet",
        }
    }

    /// Window title used by the print path
    pub fn print_title(self) -> &'static str {
        match self {
            DocumentStyle::Badge => "Print Badges",
            DocumentStyle::Holder => "Print Name Holders",
            DocumentStyle::Attendance => "Print Attendance Sheet",
        }
    }
}

/// Uniform dimensions of one item (badge, holder) in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSize {
    pub width_px: f32,
    pub height_px: f32,
}

impl ItemSize {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Horizontal anchor for a logo row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogoAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Edge of a logo's spacing box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Four-sided spacing around a logo in pixels.
///
/// Placement reads only `left` and `top`; `right` and `bottom` are carried
/// for the editor, which keeps opposite edges mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoSpacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl LogoSpacing {
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Editor-side convenience: set one edge and mirror the value onto the
    /// opposite edge, keeping the spacing box symmetric.
    pub fn set_mirrored(&mut self, edge: SpacingEdge, value: f32) {
        match edge {
            SpacingEdge::Top | SpacingEdge::Bottom => {
                self.top = value;
                self.bottom = value;
            }
            SpacingEdge::Left | SpacingEdge::Right => {
                self.left = value;
                self.right = value;
            }
        }
    }
}

/// One uploaded logo and its placement parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoSpec {
    /// Opaque image reference (file path or URL); the engine never decodes it
    pub source: String,
    pub alignment: LogoAlignment,
    /// Explicit pixel size override; falls back to a fraction of the item width
    pub size_px: Option<f32>,
    pub spacing: Option<LogoSpacing>,
}

impl LogoSpec {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alignment: LogoAlignment::Left,
            size_px: None,
            spacing: None,
        }
    }
}

/// The document-wide logo list, shared read-only by every rendered item.
///
/// Holds at most [`MAX_LOGOS`] entries; mutation is by index so edits apply
/// to all items atomically.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoSet {
    logos: Vec<LogoSpec>,
}

impl LogoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a logo, failing once the document already carries [`MAX_LOGOS`].
    pub fn push(&mut self, logo: LogoSpec) -> Result<()> {
        if self.logos.len() >= MAX_LOGOS {
            return Err(LayoutError::Config(format!(
                "A document holds at most {} logos",
                MAX_LOGOS
            )));
        }
        self.logos.push(logo);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<LogoSpec> {
        if index < self.logos.len() {
            Some(self.logos.remove(index))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LogoSpec> {
        self.logos.get_mut(index)
    }

    pub fn as_slice(&self) -> &[LogoSpec] {
        &self.logos
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}
