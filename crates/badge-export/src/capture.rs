//! Capture pipeline
//!
//! Walks the rendered pages in order, waits for asset readiness, rasterizes
//! each page, and accumulates the result into a [`RasterDocument`]. Pages are
//! processed strictly sequentially: each capture temporarily mutates the
//! visibility of the page being captured.

use crate::surface::PageSurface;
use crate::types::{ExportError, Result};
use badge_layout::Orientation;
use image::RgbaImage;
use std::time::Duration;

/// Knobs for one capture run
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Raster scale factor; trades fidelity for processing time and memory.
    /// Output page size is independent of it.
    pub magnification: f32,
    /// Upper bound on the per-page asset readiness wait. `None` waits
    /// indefinitely, matching the platform capture behavior.
    pub readiness_timeout: Option<Duration>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            magnification: 2.0,
            readiness_timeout: None,
        }
    }
}

/// One captured page: the raster plus the logical (unscaled) dimensions it
/// must occupy in the output document.
#[derive(Debug, Clone)]
pub struct RasterPage {
    pub image: RgbaImage,
    pub logical_width_px: f32,
    pub logical_height_px: f32,
}

/// The ordered raster pages of one export
#[derive(Debug, Clone, Default)]
pub struct RasterDocument {
    /// Decided by the first page's raw raster; fixed for the whole document.
    pub orientation: Orientation,
    pub pages: Vec<RasterPage>,
}

impl RasterDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Transient state of one export run; owned exclusively by the pipeline and
/// discarded once the document is produced or the run fails.
struct CaptureJob {
    current_page: usize,
    pages: Vec<RasterPage>,
    complete: bool,
}

impl Drop for CaptureJob {
    fn drop(&mut self) {
        if !self.complete {
            log::warn!(
                "Export aborted at page {}; no partial document produced",
                self.current_page
            );
        }
    }
}

/// Exclusive visibility over one page for the duration of a capture.
/// Restores the page to hidden on every exit path, including aborts.
struct VisibilityScope<'a, S: PageSurface> {
    surface: &'a mut S,
    page: usize,
}

impl<'a, S: PageSurface> VisibilityScope<'a, S> {
    fn acquire(surface: &'a mut S, page: usize) -> Result<Self> {
        surface.set_visible(page, true)?;
        Ok(Self { surface, page })
    }

    async fn rasterize(&mut self, magnification: f32) -> Result<RgbaImage> {
        self.surface.rasterize(self.page, magnification).await
    }
}

impl<S: PageSurface> Drop for VisibilityScope<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.surface.set_visible(self.page, false) {
            log::warn!("Failed to restore visibility of page {}: {}", self.page, e);
        }
    }
}

/// Capture every rendered page of `surface` into an ordered raster document.
///
/// Any rasterization failure aborts the whole run; no partial document is
/// returned. A surface with zero pages yields an empty document.
pub async fn capture_document<S: PageSurface>(
    surface: &mut S,
    options: &CaptureOptions,
) -> Result<RasterDocument> {
    if !(options.magnification.is_finite() && options.magnification > 0.0) {
        return Err(ExportError::Capture(format!(
            "Magnification must be positive, got {}",
            options.magnification
        )));
    }

    let page_count = surface.page_count();
    let mut job = CaptureJob {
        current_page: 0,
        pages: Vec::with_capacity(page_count),
        complete: false,
    };
    let mut orientation = Orientation::default();

    for page in 0..page_count {
        job.current_page = page;

        wait_for_assets(surface, page, options.readiness_timeout).await?;

        let mut scope = VisibilityScope::acquire(surface, page)?;
        let raster = scope.rasterize(options.magnification).await?;
        drop(scope);

        if page == 0 {
            orientation = if raster.height() > raster.width() {
                Orientation::Portrait
            } else {
                Orientation::Landscape
            };
        }

        job.pages.push(RasterPage {
            logical_width_px: raster.width() as f32 / options.magnification,
            logical_height_px: raster.height() as f32 / options.magnification,
            image: raster,
        });
        log::debug!("Captured page {} of {}", page + 1, page_count);
    }

    job.complete = true;

    Ok(RasterDocument {
        orientation,
        pages: std::mem::take(&mut job.pages),
    })
}

async fn wait_for_assets<S: PageSurface>(
    surface: &mut S,
    page: usize,
    limit: Option<Duration>,
) -> Result<()> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, surface.wait_for_assets(page))
            .await
            .map_err(|_| ExportError::AssetTimeout {
                page,
                waited_ms: limit.as_millis() as u64,
            })?,
        None => surface.wait_for_assets(page).await,
    }
}
