// CLASSIFICATION: COMMUNITY
// Filename: replay.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{OracleError, ValidityOracle};
use crate::dataset::{load_expected_outcomes, Configuration};
use crate::env::Environment;
use crate::Result;

/// Answers from a previously recorded outcome table, one entry per call in
/// call order. Lets two recorded runs of the same corpus be diffed.
///
/// The cursor only moves forward, so an instance serves exactly one pass.
#[derive(Debug)]
pub struct ReplayOracle {
    outcomes: Vec<bool>,
    cursor: AtomicUsize,
}

impl ReplayOracle {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self {
            outcomes,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_expected_outcomes(path).map(Self::new)
    }

    /// Number of answers handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed).min(self.outcomes.len())
    }
}

impl ValidityOracle for ReplayOracle {
    fn validate(&self, _: &Configuration, _: &Environment) -> Result<bool, OracleError> {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.outcomes.get(idx).copied().ok_or_else(|| {
            OracleError::Backend(format!(
                "replay table exhausted after {} records",
                self.outcomes.len()
            ))
        })
    }
}
