//! Per-student score history

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Student identifier → scores in play order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLedger {
    students: BTreeMap<String, Vec<u32>>,
}

impl ScoreLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores recorded for `student`, oldest first
    #[must_use]
    pub fn history(&self, student: &str) -> Option<&[u32]> {
        self.students.get(student).map(Vec::as_slice)
    }

    /// Replace a student's whole history
    pub fn set_history(&mut self, student: &str, scores: Vec<u32>) {
        self.students.insert(student.to_string(), scores);
    }

    /// Students in alphabetical order with their histories
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.students
            .iter()
            .map(|(student, scores)| (student.as_str(), scores.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
