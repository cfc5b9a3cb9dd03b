//! Minimal preview markup for the print path
//!
//! Stands in for the application's visual templates: enough markup to carry
//! the engine's geometry (page grid, pagination ranges, logo placement) into
//! a printable snapshot. Not a faithful badge renderer.

use badge_export::{NameEntry, PrintDispatcher, PrintSurface};
use badge_layout::{
    DocumentOptions, DocumentStyle, LogoFrame, LogoSet, page_capacity, place_logos,
};
use std::fmt::Write as _;
use std::path::PathBuf;

pub struct PreviewSurface {
    pages: Vec<String>,
    rules: Vec<String>,
    image_count: usize,
}

impl PreviewSurface {
    pub fn build(
        entries: &[NameEntry],
        logos: &LogoSet,
        company_name: &str,
        options: &DocumentOptions,
    ) -> anyhow::Result<Self> {
        let plan = options.plan(entries.len())?;

        let mut pages = Vec::with_capacity(plan.page_count());
        for range in &plan.ranges {
            let markup = match options.style {
                DocumentStyle::Badge | DocumentStyle::Holder => {
                    grid_page(entries, logos, company_name, options, range.start, range.end)
                }
                DocumentStyle::Attendance => {
                    table_page(entries, range.start, range.end)
                }
            };
            pages.push(markup);
        }

        // Grid items each carry the logo row; the attendance table has none
        let image_count = if options.style.is_grid() {
            entries.len() * logos.len()
        } else {
            0
        };

        Ok(Self {
            pages,
            rules: style_rules(options),
            image_count,
        })
    }
}

impl PrintSurface for PreviewSurface {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn clone_page_markup(&self, page: usize) -> badge_export::Result<String> {
        Ok(self.pages[page].clone())
    }

    fn style_rules(&self) -> Vec<String> {
        self.rules.clone()
    }

    fn image_count(&self) -> usize {
        self.image_count
    }

    async fn wait_for_images(&mut self) -> badge_export::Result<()> {
        // Logo references point at local files; nothing is still loading
        Ok(())
    }
}

fn style_rules(options: &DocumentOptions) -> Vec<String> {
    let mut rules = vec![
        "body { font-family: sans-serif; }".to_string(),
        ".item { position: relative; border: 2px solid #822378; overflow: hidden; }".to_string(),
        ".item img { position: absolute; object-fit: contain; }".to_string(),
        ".item h2 { text-align: center; } .item h3 { text-align: center; }".to_string(),
        "table { width: 100%; border-collapse: collapse; } td, th { border: 1px solid #333; padding: 4px; }"
            .to_string(),
    ];

    if options.style.is_grid() {
        let grid = page_capacity(options.paper_size, options.item_size);
        rules.push(format!(
            ".page {{ display: grid; grid-template-columns: repeat({}, {}px); gap: 32px; justify-content: center; }}",
            grid.per_row.max(1),
            options.item_size.width_px
        ));
        rules.push(format!(
            ".item {{ width: {}px; height: {}px; }}",
            options.item_size.width_px, options.item_size.height_px
        ));
    }

    rules
}

fn grid_page(
    entries: &[NameEntry],
    logos: &LogoSet,
    company_name: &str,
    options: &DocumentOptions,
    start: usize,
    end: usize,
) -> String {
    let frame = match options.style {
        DocumentStyle::Holder => LogoFrame::HOLDER,
        _ => LogoFrame::BADGE,
    };
    let placements = place_logos(logos.as_slice(), options.item_size.width_px, &frame);

    let mut page = String::from("<div class=\"page\">\n");
    for entry in &entries[start..end] {
        page.push_str("  <div class=\"item\">\n");
        for (logo, placed) in logos.as_slice().iter().zip(&placements) {
            let _ = writeln!(
                page,
                "    <img src=\"{}\" style=\"left: {}px; top: {}px; width: {}px; height: {}px;\" alt=\"Company logo\" />",
                logo.source, placed.left_px, placed.top_px, placed.size_px, placed.size_px
            );
        }
        let _ = writeln!(page, "    <h2 dir=\"rtl\">{}</h2>", entry.arabic);
        if !entry.english.is_empty() {
            let _ = writeln!(page, "    <h3>{}</h3>", entry.english);
        }
        if !company_name.is_empty() {
            let _ = writeln!(page, "    <footer>{}</footer>", company_name);
        }
        page.push_str("  </div>\n");
    }
    page.push_str("</div>");
    page
}

fn table_page(entries: &[NameEntry], start: usize, end: usize) -> String {
    let mut page = String::from(
        "<div class=\"page\">\n<table>\n  <tr><th>No.</th><th>Name</th><th>Workplace</th><th>Signature</th></tr>\n",
    );
    for row in start..end {
        // Rows past the roster are the trailing blanks
        let (arabic, english) = entries
            .get(row)
            .map(|e| (e.arabic.as_str(), e.english.as_str()))
            .unwrap_or(("", ""));
        let name = if english.is_empty() {
            arabic.to_string()
        } else if arabic.is_empty() {
            english.to_string()
        } else {
            format!("{} / {}", arabic, english)
        };
        let _ = writeln!(
            page,
            "  <tr><td>{}</td><td>{}</td><td></td><td></td></tr>",
            row + 1,
            name
        );
    }
    page.push_str("</table>\n</div>");
    page
}

/// Writes the snapshot to disk; the platform print dialog takes it from there.
pub struct FileDispatcher {
    pub path: PathBuf,
}

impl PrintDispatcher for FileDispatcher {
    fn print(&mut self, document: &str) -> badge_export::Result<()> {
        std::fs::write(&self.path, document)?;
        Ok(())
    }
}
