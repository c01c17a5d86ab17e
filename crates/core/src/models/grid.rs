use std::fmt;

use serde::{Deserialize, Serialize};

use super::pair::SubjectTeacherPair;

/// The weekdays a timetable covers, in display order.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Contents of a single timetable cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Assigned { subject: String, teacher: String },
    Lunch,
    FreePeriod,
}

impl CellContent {
    pub fn assigned(pair: &SubjectTeacherPair) -> Self {
        CellContent::Assigned {
            subject: pair.subject.clone(),
            teacher: pair.teacher.clone(),
        }
    }

    pub fn is_lunch(&self) -> bool {
        matches!(self, CellContent::Lunch)
    }

    pub fn is_free(&self) -> bool {
        matches!(self, CellContent::FreePeriod)
    }

    /// The pair placed in this cell, if any.
    pub fn pair(&self) -> Option<SubjectTeacherPair> {
        match self {
            CellContent::Assigned { subject, teacher } => {
                Some(SubjectTeacherPair::new(subject.clone(), teacher.clone()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellContent::Assigned { subject, teacher } => write!(f, "{} ({})", subject, teacher),
            CellContent::Lunch => f.write_str("LUNCH"),
            CellContent::FreePeriod => f.write_str("Free Period"),
        }
    }
}

/// One day of a timetable: the day name and its cells left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRow {
    pub day: String,
    pub cells: Vec<CellContent>,
}

impl DayRow {
    /// Cells that hold a subject slot, lunch excluded.
    pub fn instructional_cells(&self) -> impl Iterator<Item = &CellContent> {
        self.cells.iter().filter(|cell| !cell.is_lunch())
    }

    /// Column of the lunch cell, if this day has one.
    pub fn lunch_column(&self) -> Option<usize> {
        self.cells.iter().position(CellContent::is_lunch)
    }
}

/// A generated weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableGrid {
    pub slots_per_day: usize,
    pub lunch_after_slot: usize,
    pub rows: Vec<DayRow>,
}

impl TimetableGrid {
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.day.as_str())
    }

    pub fn row(&self, day: &str) -> Option<&DayRow> {
        self.rows.iter().find(|row| row.day == day)
    }

    /// Number of rendered columns, day-name column excluded.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }
}
