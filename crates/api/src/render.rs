//! HTML rendering of timetable grids.
//!
//! The table has one header cell per rendered column preceded by a blank
//! cell above the day names. All cell text is escaped by `maud`.

use maud::{html, Markup};
use timetable_core::models::grid::{CellContent, TimetableGrid};

pub const LUNCH_TEXT: &str = "LUNCH";
pub const FREE_PERIOD_TEXT: &str = "Free Period";

/// Renders `grid` as a `<table>` with `time_labels` as column headers.
pub fn timetable_table(grid: &TimetableGrid, time_labels: &[String]) -> Markup {
    html! {
        table.timetable {
            thead {
                tr {
                    th {}
                    @for label in time_labels {
                        th { (label) }
                    }
                }
            }
            tbody {
                @for row in &grid.rows {
                    tr {
                        td.day { (row.day) }
                        @for cell in &row.cells {
                            (timetable_cell(cell))
                        }
                    }
                }
            }
        }
    }
}

fn timetable_cell(cell: &CellContent) -> Markup {
    match cell {
        CellContent::Assigned { subject, teacher } => html! {
            td.assigned { (subject) " (" (teacher) ")" }
        },
        CellContent::Lunch => html! {
            td.lunch { (LUNCH_TEXT) }
        },
        CellContent::FreePeriod => html! {
            td.free { (FREE_PERIOD_TEXT) }
        },
    }
}
