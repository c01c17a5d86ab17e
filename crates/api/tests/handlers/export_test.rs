use pretty_assertions::assert_eq;
use timetable_api::{export, render};
use timetable_core::errors::TimetableError;
use timetable_core::models::grid::{CellContent, DayRow, TimetableGrid};
use timetable_core::time_label::SlotClock;

fn sample_grid() -> TimetableGrid {
    TimetableGrid {
        slots_per_day: 4,
        lunch_after_slot: 3,
        rows: vec![DayRow {
            day: "Monday".to_string(),
            cells: vec![
                CellContent::Assigned {
                    subject: "<b>Math</b>".to_string(),
                    teacher: "Smith & Co".to_string(),
                },
                CellContent::FreePeriod,
                CellContent::FreePeriod,
                CellContent::Lunch,
                CellContent::FreePeriod,
            ],
        }],
    }
}

#[test]
fn test_table_has_blank_corner_and_one_header_per_column() {
    let grid = sample_grid();
    let labels = SlotClock::default().labels(grid.column_count());

    let html = render::timetable_table(&grid, &labels).into_string();

    assert_eq!(html.matches("<th>").count(), 6);
    assert!(html.contains("<th></th>"));
    assert!(html.contains("<th>8:50 AM - 9:40 AM</th>"));
    assert!(html.contains("<th>12:10 PM - 1:00 PM</th>"));
    assert!(html.contains(r#"<td class="day">Monday</td>"#));
    assert!(html.contains(r#"<td class="lunch">LUNCH</td>"#));
    assert_eq!(html.matches("Free Period").count(), 3);
}

#[test]
fn test_cell_text_is_escaped() {
    let grid = sample_grid();
    let html = render::timetable_table(&grid, &[]).into_string();

    assert!(html.contains("&lt;b&gt;Math&lt;/b&gt; (Smith &amp; Co)"));
    assert!(!html.contains("<b>Math"));
}

#[test]
fn test_export_wraps_table_under_heading() {
    let table = render::timetable_table(&sample_grid(), &[]).into_string();

    let document = export::export_section("1", Some(&table)).expect("export should succeed");

    assert_eq!(document.file_name, "Timetable_Section1.html");
    assert!(document.body.starts_with("<!DOCTYPE html>"));
    assert!(document.body.contains(r#"<h1 class="heading">Timetable for Section 1</h1>"#));
    assert!(document.body.contains(&table));
    assert!(document.body.contains("size: A4"));
}

#[test]
fn test_export_without_table_is_missing_target() {
    match export::export_section("2", None) {
        Err(TimetableError::MissingExportTarget(section)) => assert_eq!(section, "2"),
        other => panic!("expected missing export target, got {:?}", other),
    }
}

#[test_log::test]
fn test_write_to_replaces_previous_export() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let first = export::export_section("A", Some("<table></table>")).expect("export");
    let second = export::export_section("A", Some("<table><tr></tr></table>")).expect("export");

    let path = first.write_to(dir.path()).expect("first write");
    let again = second.write_to(dir.path()).expect("second write");

    assert_eq!(path, again);
    assert_eq!(path, dir.path().join("Timetable_SectionA.html"));
    assert_eq!(std::fs::read_to_string(&path).expect("read export"), second.body);
}

#[test]
fn test_write_failure_is_encoding_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("no-such-dir");
    let document = export::export_section("1", Some("<table></table>")).expect("export");

    assert!(matches!(
        document.write_to(&missing),
        Err(TimetableError::ExportEncodingFailure(_))
    ));
}
