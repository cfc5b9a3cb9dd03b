use crate::{ExportCommand, ExportUpdate};
use badge_export::RasterDirSurface;
use badge_layout::calculate_statistics;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Async worker task that processes export commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ExportCommand>,
    update_tx: mpsc::UnboundedSender<ExportUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: ExportCommand,
    command_rx: &mut mpsc::UnboundedReceiver<ExportCommand>,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) {
    match cmd {
        ExportCommand::RosterLoad { input_path } => {
            handle_roster_load(input_path, update_tx).await;
        }
        ExportCommand::StatsCalculate {
            mut options,
            mut item_count,
        } => {
            // Drain any queued stats commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let ExportCommand::StatsCalculate {
                    options: new_options,
                    item_count: new_count,
                } = next_cmd
                {
                    log::debug!("Discarding queued stats calculation, using newer request");
                    options = new_options;
                    item_count = new_count;
                } else {
                    // Non-stats command found; it cannot be put back, so
                    // process it now before the stats request
                    Box::pin(process_command(next_cmd, command_rx, update_tx)).await;
                }
            }

            match calculate_statistics(&options, item_count) {
                Ok(stats) => {
                    let _ = update_tx.send(ExportUpdate::StatsCalculated { stats });
                }
                Err(e) => {
                    let _ = update_tx.send(ExportUpdate::Error {
                        message: format!("Failed to calculate statistics: {e}"),
                    });
                }
            }
        }
        ExportCommand::PdfExport {
            pages_dir,
            options,
            capture,
            output_path,
        } => {
            handle_pdf_export(pages_dir, options, capture, output_path, update_tx).await;
        }
    }
}

async fn handle_roster_load(
    input_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) {
    match badge_export::load_from_csv(&input_path).await {
        Ok(entries) => {
            let _ = update_tx.send(ExportUpdate::RosterLoaded { entries });
        }
        Err(e) => {
            let _ = update_tx.send(ExportUpdate::Error {
                message: format!("Failed to load roster: {e}"),
            });
        }
    }
}

async fn handle_pdf_export(
    pages_dir: PathBuf,
    options: badge_layout::DocumentOptions,
    capture: badge_export::CaptureOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ExportUpdate>,
) {
    // An unusable item size refuses the whole export up front
    if let Err(e) = options.capacity() {
        let _ = update_tx.send(ExportUpdate::Error {
            message: format!("Refusing export: {e}"),
        });
        return;
    }

    let mut surface = match RasterDirSurface::open(&pages_dir).await {
        Ok(surface) => surface,
        Err(e) => {
            let _ = update_tx.send(ExportUpdate::Error {
                message: format!("Failed to open rendered pages: {e}"),
            });
            return;
        }
    };

    match badge_export::export_pdf(&mut surface, &capture, options.style, &output_path).await {
        Ok(page_count) => {
            let _ = update_tx.send(ExportUpdate::ExportComplete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(ExportUpdate::Error {
                message: format!("Failed to export PDF: {e}"),
            });
        }
    }
}
