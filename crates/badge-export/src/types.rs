use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Layout error: {0}")]
    Layout(#[from] badge_layout::LayoutError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Capture error: {0}")]
    Capture(String),
    #[error("Timed out after {waited_ms}ms waiting for images on page {page}")]
    AssetTimeout { page: usize, waited_ms: u64 },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
