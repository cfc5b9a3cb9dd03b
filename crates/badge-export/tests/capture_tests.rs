use badge_export::*;
use badge_layout::{DocumentStyle, Orientation};
use image::RgbaImage;
use std::time::Duration;

/// Scripted surface: fixed page sizes, per-page asset outcomes, optional
/// rasterization failures, and a visibility log.
struct MockSurface {
    /// Logical (width, height) per page
    pages: Vec<(u32, u32)>,
    /// Pages whose rasterization must fail
    fail_raster_on: Option<usize>,
    /// Pages carrying an image that errors instead of loading
    errored_asset_on: Option<usize>,
    /// Pages whose assets never reach a terminal state
    hang_assets_on: Option<usize>,
    visible: Vec<bool>,
    captured_order: Vec<usize>,
}

impl MockSurface {
    fn new(pages: Vec<(u32, u32)>) -> Self {
        let count = pages.len();
        Self {
            pages,
            fail_raster_on: None,
            errored_asset_on: None,
            hang_assets_on: None,
            visible: vec![false; count],
            captured_order: Vec::new(),
        }
    }
}

impl PageSurface for MockSurface {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn wait_for_assets(&mut self, page: usize) -> Result<()> {
        if self.hang_assets_on == Some(page) {
            // Never resolves: models an image stuck in a pending load
            std::future::pending::<()>().await;
        }
        if self.errored_asset_on == Some(page) {
            // The broken image settles as errored: terminal, must not block
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    fn set_visible(&mut self, page: usize, visible: bool) -> Result<()> {
        self.visible[page] = visible;
        Ok(())
    }

    async fn rasterize(&mut self, page: usize, magnification: f32) -> Result<RgbaImage> {
        assert!(self.visible[page], "page {} captured while hidden", page);

        if self.fail_raster_on == Some(page) {
            return Err(ExportError::Capture(format!(
                "canvas conversion failed on page {}",
                page
            )));
        }

        self.captured_order.push(page);
        let (w, h) = self.pages[page];
        Ok(RgbaImage::new(
            (w as f32 * magnification) as u32,
            (h as f32 * magnification) as u32,
        ))
    }
}

#[tokio::test]
async fn test_three_pages_in_source_order() {
    let mut surface = MockSurface::new(vec![(400, 566); 3]);

    let document = capture_document(&mut surface, &CaptureOptions::default())
        .await
        .unwrap();

    assert_eq!(document.page_count(), 3);
    assert_eq!(surface.captured_order, vec![0, 1, 2]);
    assert_eq!(document.orientation, Orientation::Portrait);

    // Logical size recovered from the magnified raster
    let first = &document.pages[0];
    assert_eq!(first.image.width(), 800);
    assert_eq!(first.logical_width_px, 400.0);
    assert_eq!(first.logical_height_px, 566.0);
}

#[tokio::test]
async fn test_errored_image_does_not_abort() {
    let mut surface = MockSurface::new(vec![(400, 566); 3]);
    surface.errored_asset_on = Some(1);

    let document = capture_document(&mut surface, &CaptureOptions::default())
        .await
        .unwrap();

    // Page 2's broken image is terminal; all 3 pages still captured in order
    assert_eq!(document.page_count(), 3);
    assert_eq!(surface.captured_order, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_raster_failure_aborts_and_restores_visibility() {
    let mut surface = MockSurface::new(vec![(400, 566); 3]);
    surface.fail_raster_on = Some(1);

    let result = capture_document(&mut surface, &CaptureOptions::default()).await;

    assert!(matches!(result, Err(ExportError::Capture(_))));
    // Only the page before the failure was captured; nothing after it
    assert_eq!(surface.captured_order, vec![0]);
    // The failing page's visibility was restored on the abort path
    assert!(surface.visible.iter().all(|v| !v));
}

#[tokio::test]
async fn test_raster_failure_writes_no_partial_file() {
    use tempfile::TempDir;

    let mut surface = MockSurface::new(vec![(400, 566); 3]);
    surface.fail_raster_on = Some(2);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("badges.pdf");

    let result = export_pdf(
        &mut surface,
        &CaptureOptions::default(),
        DocumentStyle::Badge,
        &path,
    )
    .await;

    assert!(result.is_err());
    assert!(!path.exists(), "no partial artifact may be written");
}

#[tokio::test]
async fn test_first_page_decides_orientation() {
    // Landscape first page; a later portrait page must not flip the document
    let mut surface = MockSurface::new(vec![(800, 400), (400, 800)]);

    let document = capture_document(&mut surface, &CaptureOptions::default())
        .await
        .unwrap();

    assert_eq!(document.orientation, Orientation::Landscape);
}

#[tokio::test]
async fn test_square_raster_is_landscape() {
    // Orientation is portrait only when height exceeds width
    let mut surface = MockSurface::new(vec![(500, 500)]);

    let document = capture_document(&mut surface, &CaptureOptions::default())
        .await
        .unwrap();

    assert_eq!(document.orientation, Orientation::Landscape);
}

#[tokio::test]
async fn test_empty_surface_yields_empty_document() {
    let mut surface = MockSurface::new(Vec::new());

    let document = capture_document(&mut surface, &CaptureOptions::default())
        .await
        .unwrap();
    assert!(document.is_empty());
}

#[tokio::test]
async fn test_empty_export_writes_no_file() {
    use tempfile::TempDir;

    let mut surface = MockSurface::new(Vec::new());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("badges.pdf");

    let pages = export_pdf(
        &mut surface,
        &CaptureOptions::default(),
        DocumentStyle::Badge,
        &path,
    )
    .await
    .unwrap();

    assert_eq!(pages, 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_readiness_timeout_policy() {
    let mut surface = MockSurface::new(vec![(400, 566); 2]);
    surface.hang_assets_on = Some(1);

    let options = CaptureOptions {
        readiness_timeout: Some(Duration::from_millis(20)),
        ..CaptureOptions::default()
    };

    let result = capture_document(&mut surface, &options).await;
    match result {
        Err(ExportError::AssetTimeout { page, .. }) => assert_eq!(page, 1),
        other => panic!("Expected AssetTimeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_magnification_rejected() {
    let mut surface = MockSurface::new(vec![(400, 566)]);

    for magnification in [0.0, -1.0, f32::NAN] {
        let options = CaptureOptions {
            magnification,
            ..CaptureOptions::default()
        };
        let result = capture_document(&mut surface, &options).await;
        assert!(matches!(result, Err(ExportError::Capture(_))));
    }
}

#[tokio::test]
async fn test_export_pdf_writes_file() {
    use tempfile::TempDir;

    let mut surface = MockSurface::new(vec![(400, 566); 2]);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DocumentStyle::Holder.file_name());

    let pages = export_pdf(
        &mut surface,
        &CaptureOptions::default(),
        DocumentStyle::Holder,
        &path,
    )
    .await
    .unwrap();

    assert_eq!(pages, 2);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_assemble_empty_document_is_none() {
    let document = RasterDocument::default();
    let bytes = assemble_pdf_bytes(&document, "Badges").unwrap();
    assert!(bytes.is_none());
}

#[test]
fn test_assemble_pdf_smoke() {
    let document = RasterDocument {
        orientation: Orientation::Portrait,
        pages: vec![RasterPage {
            image: RgbaImage::new(800, 1132),
            logical_width_px: 400.0,
            logical_height_px: 566.0,
        }],
    };

    let bytes = assemble_pdf_bytes(&document, "Badges").unwrap().unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
