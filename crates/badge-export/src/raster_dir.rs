//! Directory-backed page surface
//!
//! Treats a directory of pre-rendered page images (one file per page,
//! lexicographic order) as the rendered document. Files on disk are already
//! in a terminal load state, so the readiness barrier is immediate; the
//! native pixel size of each file is its logical page size.

use crate::surface::PageSurface;
use crate::types::{ExportError, Result};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

const PAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub struct RasterDirSurface {
    pages: Vec<PathBuf>,
    visible: Vec<bool>,
}

impl RasterDirSurface {
    /// Scan `dir` for page images, ordered by file name.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_owned();

        let mut pages = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_page = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    PAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                });
            if is_page {
                pages.push(path);
            }
        }
        pages.sort();

        log::debug!("Found {} page images in {}", pages.len(), dir.display());

        let count = pages.len();
        Ok(Self {
            pages,
            visible: vec![false; count],
        })
    }
}

impl PageSurface for RasterDirSurface {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn wait_for_assets(&mut self, page: usize) -> Result<()> {
        // A file either decodes or errors at capture time; both are terminal
        if page >= self.pages.len() {
            return Err(ExportError::Capture(format!("No rendered page {}", page)));
        }
        Ok(())
    }

    fn set_visible(&mut self, page: usize, visible: bool) -> Result<()> {
        if page >= self.visible.len() {
            return Err(ExportError::Capture(format!("No rendered page {}", page)));
        }
        self.visible[page] = visible;
        Ok(())
    }

    async fn rasterize(&mut self, page: usize, magnification: f32) -> Result<RgbaImage> {
        let path = self.pages[page].clone();

        // Decode and resample are CPU-bound, spawn blocking
        let raster = tokio::task::spawn_blocking(move || {
            let img = image::open(&path).map_err(|e| {
                ExportError::Capture(format!("Failed to decode {}: {}", path.display(), e))
            })?;

            let target_w = (img.width() as f32 * magnification).round() as u32;
            let target_h = (img.height() as f32 * magnification).round() as u32;

            let scaled = if (target_w, target_h) == (img.width(), img.height()) {
                img
            } else {
                img.resize_exact(target_w, target_h, FilterType::Triangle)
            };
            Ok::<_, ExportError>(scaled.to_rgba8())
        })
        .await??;

        Ok(raster)
    }
}
