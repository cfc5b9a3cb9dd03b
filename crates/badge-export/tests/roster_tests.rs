use badge_export::load_from_csv;
use std::io::Write;
use tempfile::NamedTempFile;

async fn load(contents: &str) -> Vec<badge_export::NameEntry> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    load_from_csv(file.path()).await.unwrap()
}

#[tokio::test]
async fn test_load_two_column_roster() {
    let entries = load("arabic,english\nمحمد أحمد,Mohammed Ahmed\nفاطمة علي,Fatima Ali\n").await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].arabic, "محمد أحمد");
    assert_eq!(entries[0].english, "Mohammed Ahmed");
    assert_eq!(entries[1].english, "Fatima Ali");
}

#[tokio::test]
async fn test_missing_side_kept_with_empty_string() {
    // Row 2 has no english cell at all, row 3 an empty one; both entries
    // must survive so row-to-person correspondence is preserved.
    let entries = load("arabic,english\nمحمد,\nعلي\n,Sara\n").await;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].arabic, "محمد");
    assert_eq!(entries[0].english, "");
    assert_eq!(entries[1].arabic, "علي");
    assert_eq!(entries[1].english, "");
    assert_eq!(entries[2].arabic, "");
    assert_eq!(entries[2].english, "Sara");
}

#[tokio::test]
async fn test_order_preserved() {
    let entries = load("arabic,english\nا,A\nب,B\nج,C\nد,D\n").await;

    let order: Vec<&str> = entries.iter().map(|e| e.english.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);
}

#[tokio::test]
async fn test_header_only_file_is_empty() {
    let entries = load("arabic,english\n").await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_fully_blank_rows_skipped() {
    let entries = load("arabic,english\nمحمد,Mo\n,\nسارة,Sara\n").await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].english, "Sara");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = load_from_csv("/no/such/roster.csv").await;
    assert!(matches!(result, Err(badge_export::ExportError::Io(_))));
}
