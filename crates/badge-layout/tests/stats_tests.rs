use badge_layout::*;

#[test]
fn test_grid_statistics() {
    let mut options = DocumentOptions::default();
    options.style = DocumentStyle::Holder;
    options.paper_size = PaperSize::A4;
    options.item_size = ItemSize::new(250.0, 100.0);

    let stats = calculate_statistics(&options, 30).unwrap();

    // A4: 793.7 x 1122.5px, minus 96px margin = 697.7 x 1026.5.
    // Holders occupy 282x132px including spacing.
    assert_eq!(stats.per_row, 2);
    assert_eq!(stats.per_col, 7);
    assert_eq!(stats.capacity, 14);
    assert_eq!(stats.source_items, 30);
    assert_eq!(stats.blank_rows, 0);
    assert_eq!(stats.page_count, 3);
}

#[test]
fn test_attendance_statistics() {
    let mut options = DocumentOptions::default();
    options.style = DocumentStyle::Attendance;
    options.blank_rows = 5;

    let stats = calculate_statistics(&options, 37).unwrap();

    assert_eq!(stats.per_row, 1);
    assert_eq!(stats.capacity, constants::ATTENDANCE_ROWS_PER_PAGE);
    assert_eq!(stats.blank_rows, 5);
    // 37 + 5 = 42 rows at 20 per page
    assert_eq!(stats.page_count, 3);
}

#[test]
fn test_empty_roster_statistics() {
    let options = DocumentOptions::default();
    let stats = calculate_statistics(&options, 0).unwrap();

    assert_eq!(stats.source_items, 0);
    assert_eq!(stats.page_count, 0);
}

#[test]
fn test_statistics_reject_unusable_size() {
    let mut options = DocumentOptions::default();
    options.item_size = ItemSize::new(10_000.0, 10_000.0);

    assert!(calculate_statistics(&options, 10).is_err());
}
