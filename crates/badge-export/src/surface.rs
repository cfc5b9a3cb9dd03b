//! Render-surface contract
//!
//! The engine never renders anything itself; the embedding application
//! exposes its rendered pages through [`PageSurface`] and the capture
//! pipeline drives them in document order.

use crate::types::Result;
use image::RgbaImage;

/// Load state of one image-bearing element on a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Loaded,
    Errored,
}

impl AssetState {
    /// Loaded and errored are both terminal: an errored image must not
    /// block capture indefinitely.
    pub fn is_terminal(self) -> bool {
        !matches!(self, AssetState::Pending)
    }
}

/// An ordered sequence of rendered pages the capture pipeline can drive.
///
/// Captures mutate per-page visibility, so a surface is driven one page at
/// a time, never concurrently.
#[allow(async_fn_in_trait)]
pub trait PageSurface {
    /// Number of rendered pages, in document order.
    fn page_count(&self) -> usize;

    /// Suspend until every image on `page` reaches a terminal load state.
    /// Resolution order of the loads must not affect anything but latency.
    async fn wait_for_assets(&mut self, page: usize) -> Result<()>;

    /// Show or hide a page for capture.
    fn set_visible(&mut self, page: usize, visible: bool) -> Result<()>;

    /// Rasterize the page at `magnification` times its logical size.
    /// The page is guaranteed visible for the duration of the call.
    async fn rasterize(&mut self, page: usize, magnification: f32) -> Result<RgbaImage>;
}
