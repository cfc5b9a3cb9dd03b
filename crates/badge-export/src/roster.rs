use crate::types::Result;
use std::path::Path;

/// One bilingual roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub arabic: String,
    pub english: String,
}

/// Load the name roster from a two-column CSV file (arabic, english).
///
/// The first row is a header. Rows missing one side of the pair are kept
/// with an empty string on the missing side so row-to-person correspondence
/// survives the import; rows empty on both sides are skipped.
pub async fn load_from_csv(path: impl AsRef<Path>) -> Result<Vec<NameEntry>> {
    let path = path.as_ref().to_owned();

    // Read file async
    let contents = tokio::fs::read_to_string(&path).await?;

    // CSV parsing is CPU-bound, spawn blocking
    let entries = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents.as_bytes());
        let mut entries = Vec::new();

        for result in reader.records() {
            let record = result?;
            let arabic = record.get(0).unwrap_or("").to_string();
            let english = record.get(1).unwrap_or("").to_string();

            if arabic.is_empty() && english.is_empty() {
                continue;
            }
            entries.push(NameEntry { arabic, english });
        }
        Ok::<_, crate::types::ExportError>(entries)
    })
    .await??;

    Ok(entries)
}
