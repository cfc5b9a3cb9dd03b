mod capture;
mod pdf;
mod print;
mod raster_dir;
mod roster;
mod surface;
mod types;

pub use capture::{CaptureOptions, RasterDocument, RasterPage, capture_document};
pub use pdf::{assemble_pdf_bytes, export_pdf};
pub use print::{
    PrintDispatcher, PrintOptions, PrintSurface, build_print_document, print_document,
};
pub use raster_dir::RasterDirSurface;
pub use roster::{NameEntry, load_from_csv};
pub use surface::{AssetState, PageSurface};
pub use types::{ExportError, Result};
