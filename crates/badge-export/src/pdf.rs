//! PDF assembly
//!
//! Embeds captured raster pages into a single PDF. Every page of the output
//! uses the first page's logical dimensions (the document orientation is
//! decided once, from the first raster); each page's image is drawn at its
//! own logical size so output geometry is magnification-independent.

use crate::capture::{CaptureOptions, RasterDocument, RasterPage, capture_document};
use crate::surface::PageSurface;
use crate::types::Result;
use badge_layout::constants::px_to_mm;
use badge_layout::{DocumentStyle, Orientation};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use std::path::Path;

/// Points per pixel at screen density (72 pt per inch, 96 px per inch)
const PT_PER_PX: f32 = 72.0 / 96.0;

/// Pixel density the rasters are declared at when embedded
const EMBED_DPI: f32 = 96.0;

/// Serialize a captured document into PDF bytes.
///
/// Returns `None` for an empty document: zero pages is a valid capture
/// result, not a file.
pub fn assemble_pdf_bytes(document: &RasterDocument, title: &str) -> Result<Option<Vec<u8>>> {
    let Some(first) = document.pages.first() else {
        return Ok(None);
    };

    let (page_w_px, page_h_px) = oriented_page_px(first, document.orientation);
    let page_w_pt = page_w_px * PT_PER_PX;
    let page_h_pt = page_h_px * PT_PER_PX;

    let mut doc = PdfDocument::new(title);
    let mut pages = Vec::with_capacity(document.page_count());

    for raster_page in &document.pages {
        let rgb = image::DynamicImage::ImageRgba8(raster_page.image.clone()).to_rgb8();
        let (raster_w, raster_h) = (rgb.width() as usize, rgb.height() as usize);

        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: raster_w,
            height: raster_h,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        // Native size at the declared density, scaled down to the logical
        // page size (1/magnification).
        let native_w_pt = raster_w as f32 / EMBED_DPI * 72.0;
        let native_h_pt = raster_h as f32 / EMBED_DPI * 72.0;
        let target_w_pt = raster_page.logical_width_px * PT_PER_PX;
        let target_h_pt = raster_page.logical_height_px * PT_PER_PX;

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                // PDF origin is bottom-left; anchor the image to the top
                translate_y: Some(Pt(page_h_pt - target_h_pt)),
                scale_x: Some(target_w_pt / native_w_pt),
                scale_y: Some(target_h_pt / native_h_pt),
                dpi: Some(EMBED_DPI),
                rotate: None,
            },
        }];

        pages.push(PdfPage::new(
            Mm(px_to_mm(page_w_px)),
            Mm(px_to_mm(page_h_px)),
            ops,
        ));
    }

    doc.pages = pages;

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(Some(bytes))
}

/// First-page logical dimensions, swapped if needed to honor the document
/// orientation decided during capture.
fn oriented_page_px(first: &RasterPage, orientation: Orientation) -> (f32, f32) {
    let (w, h) = (first.logical_width_px, first.logical_height_px);
    match orientation {
        Orientation::Portrait if w > h => (h, w),
        Orientation::Landscape if h > w => (h, w),
        _ => (w, h),
    }
}

/// Capture `surface` and write the assembled PDF to `output_path`.
///
/// Returns the number of pages written. An empty surface writes no file and
/// returns 0.
pub async fn export_pdf<S: PageSurface>(
    surface: &mut S,
    options: &CaptureOptions,
    style: DocumentStyle,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let output_path = output_path.as_ref().to_owned();

    let document = capture_document(surface, options).await?;
    let page_count = document.page_count();
    let title = style.title();

    // PDF serialization is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || assemble_pdf_bytes(&document, title)).await??;

    match bytes {
        Some(bytes) => {
            tokio::fs::write(&output_path, bytes).await?;
            log::info!(
                "Wrote {} pages to {}",
                page_count,
                output_path.display()
            );
            Ok(page_count)
        }
        None => {
            log::info!("No rendered pages; skipping {}", output_path.display());
            Ok(0)
        }
    }
}
