use std::collections::HashSet;

use crate::models::pair::SubjectTeacherPair;

/// Append-ordered, deduplicated collection of subject/teacher pairs.
///
/// One registry is shared by every section of a session, so pairs entered for
/// one section are also scheduled for the others.
#[derive(Debug, Default, Clone)]
pub struct PairRegistry {
    pairs: Vec<SubjectTeacherPair>,
    seen: HashSet<SubjectTeacherPair>,
}

impl PairRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `pair` unless an equal pair is already registered.
    ///
    /// Returns `true` when the pair was newly added.
    pub fn add_if_absent(&mut self, pair: SubjectTeacherPair) -> bool {
        if self.seen.contains(&pair) {
            return false;
        }
        self.seen.insert(pair.clone());
        self.pairs.push(pair);
        true
    }

    /// Adds every pair in order, returning how many were new.
    pub fn extend<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = SubjectTeacherPair>,
    {
        pairs
            .into_iter()
            .filter(|pair| self.add_if_absent(pair.clone()))
            .count()
    }

    pub fn all_pairs(&self) -> &[SubjectTeacherPair] {
        &self.pairs
    }

    pub fn contains(&self, pair: &SubjectTeacherPair) -> bool {
        self.seen.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
