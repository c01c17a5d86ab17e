use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pair::SubjectTeacherPair;
use crate::errors::{TimetableError, TimetableResult};
use crate::generator::MAX_SLOTS_PER_DAY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairInput {
    pub subject: String,
    pub teacher: String,
}

/// A section form submission: the slot count field plus the subject and
/// teacher fields, in form order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSubmission {
    #[serde(default)]
    pub time_slots: Option<Value>,
    #[serde(default)]
    pub pairs: Vec<PairInput>,
}

impl SectionSubmission {
    /// Parses the slot count field.
    ///
    /// Accepts a JSON integer or a string holding one, in
    /// `0..=MAX_SLOTS_PER_DAY`.
    pub fn slot_count(&self) -> TimetableResult<usize> {
        let value = self
            .time_slots
            .as_ref()
            .ok_or_else(|| TimetableError::InvalidInput("time_slots is required".to_string()))?;

        let slots = match value {
            Value::Number(number) => number
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    TimetableError::InvalidInput(format!(
                        "time_slots must be a non-negative integer, got {}",
                        number
                    ))
                })?,
            Value::String(text) => text.trim().parse::<usize>().map_err(|_| {
                TimetableError::InvalidInput(format!(
                    "time_slots must be a non-negative integer, got {:?}",
                    text
                ))
            })?,
            other => {
                return Err(TimetableError::InvalidInput(format!(
                    "time_slots must be a non-negative integer, got {}",
                    other
                )));
            }
        };

        if slots > MAX_SLOTS_PER_DAY {
            return Err(TimetableError::InvalidInput(format!(
                "time_slots must be at most {}, got {}",
                MAX_SLOTS_PER_DAY, slots
            )));
        }

        Ok(slots)
    }

    /// Validated pairs in form order. Both fields of every pair are required.
    pub fn subject_teacher_pairs(&self) -> TimetableResult<Vec<SubjectTeacherPair>> {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                if input.subject.trim().is_empty() {
                    return Err(TimetableError::InvalidInput(format!(
                        "subject {} is empty",
                        i + 1
                    )));
                }
                if input.teacher.trim().is_empty() {
                    return Err(TimetableError::InvalidInput(format!(
                        "teacher {} is empty",
                        i + 1
                    )));
                }
                Ok(SubjectTeacherPair::new(
                    input.subject.clone(),
                    input.teacher.clone(),
                ))
            })
            .collect()
    }
}
