use serde::{Deserialize, Serialize};

use super::grid::TimetableGrid;
use super::pair::SubjectTeacherPair;
use crate::errors::{TimetableError, TimetableResult};

/// The timetable most recently generated for a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionTimetable {
    pub section: String,
    pub grid: TimetableGrid,
    /// Header label for each rendered column, indexed by column.
    pub time_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTimetableResponse {
    #[serde(flatten)]
    pub timetable: SectionTimetable,
    /// How many submitted pairs were new to the shared registry.
    pub pairs_added: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairsResponse {
    pub pairs: Vec<SubjectTeacherPair>,
}

/// Checks that a section identifier is safe to use in routes and file names.
pub fn validate_section_id(section: &str) -> TimetableResult<()> {
    let valid = !section.is_empty()
        && section.len() <= 64
        && section
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(TimetableError::InvalidInput(format!(
            "section identifier {:?} may only contain letters, digits, '-' and '_'",
            section
        )))
    }
}
