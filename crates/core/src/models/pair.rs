use std::fmt;

use serde::{Deserialize, Serialize};

/// A subject together with the teacher who delivers it.
///
/// Equality is exact on both fields: `"Math"` and `"math "` are different
/// subjects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectTeacherPair {
    pub subject: String,
    pub teacher: String,
}

impl SubjectTeacherPair {
    pub fn new(subject: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
        }
    }
}

impl fmt::Display for SubjectTeacherPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.subject, self.teacher)
    }
}
