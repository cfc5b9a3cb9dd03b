mod preview;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use badge_export::{CaptureOptions, PrintOptions, RasterDirSurface};
use badge_layout::{DocumentOptions, ItemSize, LogoSet, LogoSpec};

#[derive(Parser)]
#[command(name = "badget", about = "Badge and attendance document tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page plan for a roster and configuration
    Plan {
        /// Input CSV file (columns: arabic, english)
        #[arg(short, long)]
        names: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Assemble pre-rendered page images into a single PDF
    Export {
        /// Directory of rendered page images, one file per page
        #[arg(short, long)]
        pages_dir: PathBuf,

        /// Output PDF file (defaults to the style's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document style
        #[arg(long, default_value = "badge", value_enum)]
        style: StyleArg,

        /// Raster scale factor
        #[arg(long, default_value = "2.0")]
        magnification: f32,

        /// Bound the per-page image wait (milliseconds); unbounded if omitted
        #[arg(long)]
        readiness_timeout_ms: Option<u64>,
    },

    /// Write a standalone printable snapshot of the preview
    Print {
        /// Input CSV file (columns: arabic, english)
        #[arg(short, long)]
        names: PathBuf,

        /// Output HTML file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Company name shown on each item
        #[arg(long, default_value = "")]
        company: String,

        /// Logo image path (repeat for up to 3 logos)
        #[arg(long)]
        logo: Vec<PathBuf>,

        /// Settle delay after image load (milliseconds)
        #[arg(long, default_value = "500")]
        settle_ms: u64,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(clap::Args)]
struct ConfigArgs {
    /// Document style
    #[arg(long, default_value = "badge", value_enum)]
    style: StyleArg,

    /// Paper preset
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Item width in pixels
    #[arg(long, default_value = "350")]
    item_width: f32,

    /// Item height in pixels
    #[arg(long, default_value = "500")]
    item_height: f32,

    /// Trailing blank rows (attendance style only)
    #[arg(long, default_value = "0")]
    blank_rows: usize,
}

impl ConfigArgs {
    fn to_options(&self) -> DocumentOptions {
        DocumentOptions {
            style: self.style.into(),
            paper_size: self.paper.into(),
            item_size: ItemSize::new(self.item_width, self.item_height),
            blank_rows: self.blank_rows,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Badge,
    Holder,
    Attendance,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
}

impl From<StyleArg> for badge_layout::DocumentStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Badge => Self::Badge,
            StyleArg::Holder => Self::Holder,
            StyleArg::Attendance => Self::Attendance,
        }
    }
}

impl From<PaperArg> for badge_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { names, config } => {
            let entries = badge_export::load_from_csv(&names).await?;
            let options = config.to_options();

            let stats = badge_layout::calculate_statistics(&options, entries.len())?;
            println!("Document Statistics:");
            println!("  Source entries: {}", stats.source_items);
            if stats.blank_rows > 0 {
                println!("  Blank rows: {}", stats.blank_rows);
            }
            println!("  Grid: {} x {}", stats.per_row, stats.per_col);
            println!("  Items per page: {}", stats.capacity);
            println!("  Pages: {}", stats.page_count);
        }

        Commands::Export {
            pages_dir,
            output,
            style,
            magnification,
            readiness_timeout_ms,
        } => {
            let style: badge_layout::DocumentStyle = style.into();
            let output = output.unwrap_or_else(|| PathBuf::from(style.file_name()));

            let options = CaptureOptions {
                magnification,
                readiness_timeout: readiness_timeout_ms.map(Duration::from_millis),
            };

            let mut surface = RasterDirSurface::open(&pages_dir).await?;
            let page_count = badge_export::export_pdf(&mut surface, &options, style, &output).await?;

            if page_count == 0 {
                println!("No rendered pages in {}; nothing to export", pages_dir.display());
            } else {
                println!("Exported {} pages → {}", page_count, output.display());
            }
        }

        Commands::Print {
            names,
            output,
            company,
            logo,
            settle_ms,
            config,
        } => {
            let entries = badge_export::load_from_csv(&names).await?;
            let options = config.to_options();
            let style = options.style;

            let mut logos = LogoSet::new();
            for path in logo {
                logos.push(LogoSpec::new(path.display().to_string()))?;
            }

            let mut surface = preview::PreviewSurface::build(&entries, &logos, &company, &options)?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from(match style {
                    badge_layout::DocumentStyle::Badge => "badges-print.html",
                    badge_layout::DocumentStyle::Holder => "name-holders-print.html",
                    badge_layout::DocumentStyle::Attendance => "attendance-sheet-print.html",
                })
            });
            let mut dispatcher = preview::FileDispatcher {
                path: output.clone(),
            };

            let print_options = PrintOptions {
                settle_delay: Duration::from_millis(settle_ms),
            };
            badge_export::print_document(&mut surface, &mut dispatcher, style, &print_options)
                .await?;

            println!("Print snapshot → {}", output.display());
        }
    }

    Ok(())
}
