//! # Timetable Generator
//!
//! Fills each day independently. A day starts with every distinct pair
//! available; each instructional slot draws one of the remaining pairs
//! uniformly and removes it, so a pair appears at most once per day. Once the
//! day runs out of pairs the remaining slots become free periods.
//!
//! The lunch break is emitted once per day, immediately before instructional
//! slot `lunch_after_slot`. Days with `slots_per_day <= lunch_after_slot` get
//! no lunch cell.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::grid::{CellContent, DayRow, TimetableGrid, WEEKDAYS};
use crate::models::pair::SubjectTeacherPair;
use crate::random::RandomSource;

/// Lunch follows the third instructional slot unless configured otherwise.
pub const DEFAULT_LUNCH_AFTER_SLOT: usize = 3;

/// Upper bound on instructional slots accepted from a submission.
pub const MAX_SLOTS_PER_DAY: usize = 24;

/// Fixed parameters of generation shared by every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub days: Vec<String>,
    pub lunch_after_slot: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            days: WEEKDAYS.iter().map(|day| day.to_string()).collect(),
            lunch_after_slot: DEFAULT_LUNCH_AFTER_SLOT,
        }
    }
}

impl GeneratorSettings {
    pub fn generate<R>(
        &self,
        slots_per_day: usize,
        pairs: &[SubjectTeacherPair],
        rng: &mut R,
    ) -> TimetableGrid
    where
        R: RandomSource + ?Sized,
    {
        generate(&self.days, slots_per_day, self.lunch_after_slot, pairs, rng)
    }
}

/// Builds a timetable for `days`, drawing from `pairs` with `rng`.
pub fn generate<D, R>(
    days: &[D],
    slots_per_day: usize,
    lunch_after_slot: usize,
    pairs: &[SubjectTeacherPair],
    rng: &mut R,
) -> TimetableGrid
where
    D: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let candidates = distinct(pairs);

    let rows = days
        .iter()
        .map(|day| {
            let cells = fill_day(slots_per_day, lunch_after_slot, &candidates, rng);
            debug!(
                day = day.as_ref(),
                columns = cells.len(),
                free = cells.iter().filter(|cell| cell.is_free()).count(),
                "filled day"
            );
            DayRow {
                day: day.as_ref().to_string(),
                cells,
            }
        })
        .collect();

    TimetableGrid {
        slots_per_day,
        lunch_after_slot,
        rows,
    }
}

fn fill_day<R>(
    slots_per_day: usize,
    lunch_after_slot: usize,
    candidates: &[&SubjectTeacherPair],
    rng: &mut R,
) -> Vec<CellContent>
where
    R: RandomSource + ?Sized,
{
    let mut remaining: Vec<&SubjectTeacherPair> = candidates.to_vec();
    let capacity = slots_per_day.min(MAX_SLOTS_PER_DAY).saturating_add(1);
    let mut cells = Vec::with_capacity(capacity);

    for slot in 0..slots_per_day {
        if slot == lunch_after_slot {
            cells.push(CellContent::Lunch);
        }

        if remaining.is_empty() {
            cells.push(CellContent::FreePeriod);
        } else {
            let index = rng.pick_index(remaining.len()) % remaining.len();
            let pair = remaining.remove(index);
            cells.push(CellContent::assigned(pair));
        }
    }

    cells
}

/// First occurrence of each pair, in input order.
fn distinct(pairs: &[SubjectTeacherPair]) -> Vec<&SubjectTeacherPair> {
    let mut seen = HashSet::new();
    pairs.iter().filter(|pair| seen.insert(*pair)).collect()
}
