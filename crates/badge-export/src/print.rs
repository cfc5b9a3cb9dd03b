//! Print transform
//!
//! Alternate sink to the PDF path: clones the rendered page subtrees and the
//! active style rules into one standalone document and hands it to the
//! platform print action. No rasterization happens here; page breaks placed
//! by the pagination planner are preserved through fixed print rules.

use crate::types::Result;
use badge_layout::DocumentStyle;
use std::time::Duration;

/// Fixed rules appended after the collected styles: zero page margins, one
/// hard break after each page (none after the last), and chrome hiding.
const PRINT_RULES: &str = "@page { margin: 0; size: auto; }
body { margin: 0.5cm; }
.page { page-break-after: always; break-inside: avoid; }
.page:last-child { page-break-after: avoid; }
.print-preview { width: 100%; height: 100%; }
.no-print { display: none !important; }";

/// A rendered preview the print transform can snapshot
#[allow(async_fn_in_trait)]
pub trait PrintSurface {
    /// Number of rendered pages, in document order.
    fn page_count(&self) -> usize;

    /// Clone of one page's markup subtree.
    fn clone_page_markup(&self, page: usize) -> Result<String>;

    /// Every active style rule, in source order.
    fn style_rules(&self) -> Vec<String>;

    /// Images across the whole preview; zero skips the load wait.
    fn image_count(&self) -> usize;

    /// Suspend until every image in the preview finishes loading.
    async fn wait_for_images(&mut self) -> Result<()>;
}

/// The platform print action
pub trait PrintDispatcher {
    fn print(&mut self, document: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Pause after the last image load (or immediately, with no images)
    /// before dispatching, to let layout settle.
    pub settle_delay: Duration,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(500),
        }
    }
}

/// Assemble the standalone printable document for `surface`.
pub fn build_print_document<S: PrintSurface>(
    surface: &S,
    style: DocumentStyle,
) -> Result<String> {
    let styles = surface.style_rules().join("\n");

    let mut body = String::new();
    for page in 0..surface.page_count() {
        body.push_str(&surface.clone_page_markup(page)?);
        body.push('\n');
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>{title}</title>\n    <style>\n{styles}\n{rules}\n    </style>\n  </head>\n  <body>\n{body}  </body>\n</html>\n",
        title = style.print_title(),
        styles = styles,
        rules = PRINT_RULES,
        body = body,
    ))
}

/// Snapshot `surface` and invoke the dispatcher once every image has loaded
/// and the settle delay has elapsed.
pub async fn print_document<S, D>(
    surface: &mut S,
    dispatcher: &mut D,
    style: DocumentStyle,
    options: &PrintOptions,
) -> Result<()>
where
    S: PrintSurface,
    D: PrintDispatcher,
{
    let document = build_print_document(surface, style)?;

    if surface.image_count() > 0 {
        surface.wait_for_images().await?;
    }
    tokio::time::sleep(options.settle_delay).await;

    dispatcher.print(&document)
}
