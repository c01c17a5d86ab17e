use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Start time and length of the first instructional slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotClock {
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: u32,
}

impl Default for SlotClock {
    fn default() -> Self {
        Self {
            start_hour: 8,
            start_minute: 50,
            duration_minutes: 50,
        }
    }
}

impl SlotClock {
    pub fn new(start_hour: u32, start_minute: u32, duration_minutes: u32) -> TimetableResult<Self> {
        if start_hour > 23 || start_minute > 59 {
            return Err(TimetableError::InvalidInput(format!(
                "invalid start time {}:{:02}",
                start_hour, start_minute
            )));
        }
        if duration_minutes == 0 {
            return Err(TimetableError::InvalidInput(
                "slot duration must be positive".to_string(),
            ));
        }
        Ok(Self {
            start_hour,
            start_minute,
            duration_minutes,
        })
    }

    /// Parses a 24-hour `H:MM` start time.
    pub fn parse_start(text: &str, duration_minutes: u32) -> TimetableResult<Self> {
        let time = NaiveTime::parse_from_str(text.trim(), "%H:%M").map_err(|_| {
            TimetableError::InvalidInput(format!("invalid start time {:?}", text))
        })?;
        Self::new(time.hour(), time.minute(), duration_minutes)
    }

    /// Label for slot `slot_index`, e.g. `"8:50 AM - 9:40 AM"`.
    pub fn label(&self, slot_index: usize) -> String {
        let duration = self.duration_minutes as u64 % MINUTES_PER_DAY;
        let start = (self.start_offset() + (slot_index as u64 % MINUTES_PER_DAY) * duration)
            % MINUTES_PER_DAY;
        let end = start + self.duration_minutes as u64;
        format!("{} - {}", clock_text(start), clock_text(end))
    }

    /// Labels for slots `0..count`, indexed by slot.
    pub fn labels(&self, count: usize) -> Vec<String> {
        (0..count).map(|slot| self.label(slot)).collect()
    }

    fn start_offset(&self) -> u64 {
        self.start_hour as u64 * 60 + self.start_minute as u64
    }
}

/// Label for `slot_index` with the default 8:50 start and 50 minute slots.
pub fn format_slot_label(slot_index: usize) -> String {
    SlotClock::default().label(slot_index)
}

fn clock_text(minutes: u64) -> String {
    let seconds = (minutes % MINUTES_PER_DAY) as u32 * 60;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
