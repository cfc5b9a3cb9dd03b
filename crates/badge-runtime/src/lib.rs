use std::path::PathBuf;

// Re-export types from library crates
pub use badge_export::{CaptureOptions, NameEntry};
pub use badge_layout::{DocumentOptions, DocumentStatistics, DocumentStyle};

mod worker;
pub use worker::worker_task;

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ExportCommand {
    RosterLoad {
        input_path: PathBuf,
    },
    /// Recompute document statistics for the live configuration; queued
    /// duplicates are coalesced, newest wins.
    StatsCalculate {
        options: DocumentOptions,
        item_count: usize,
    },
    PdfExport {
        pages_dir: PathBuf,
        options: DocumentOptions,
        capture: CaptureOptions,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ExportUpdate {
    RosterLoaded {
        entries: Vec<NameEntry>,
    },
    StatsCalculated {
        stats: DocumentStatistics,
    },
    ExportComplete {
        path: PathBuf,
        page_count: usize,
    },
    Error {
        message: String,
    },
}
