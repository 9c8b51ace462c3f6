// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Validation runner.
//!
//! Walks configurations and expected outcomes in lock-step, asks the oracle
//! about each configuration, and yields a [`MismatchRecord`] whenever the
//! live answer differs from the recorded one. Records come out in input
//! order. The first oracle failure ends the stream.

use log::{debug, warn};
use serde::Serialize;

use crate::dataset::Configuration;
use crate::env::Environment;
use crate::oracle::ValidityOracle;
use crate::{HarnessError, Result};

/// A configuration whose live outcome disagrees with the recorded one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MismatchRecord {
    /// 0-based position in the input tables.
    pub index: usize,
    pub configuration: Configuration,
    pub expected: bool,
    pub actual: bool,
}

/// Start a comparison run.
///
/// Fails immediately with [`HarnessError::DatasetSizeMismatch`] when the two
/// tables differ in length; no oracle call is made in that case. Otherwise
/// returns a lazy stream that performs one oracle call per step.
pub fn run<'a, O>(
    configs: &'a [Configuration],
    expected: &'a [bool],
    environment: &'a Environment,
    oracle: &'a O,
) -> Result<Mismatches<'a, O>>
where
    O: ValidityOracle + ?Sized,
{
    if configs.len() != expected.len() {
        return Err(HarnessError::DatasetSizeMismatch {
            configurations: configs.len(),
            expected: expected.len(),
        });
    }
    Ok(Mismatches {
        configs,
        expected,
        environment,
        oracle,
        next: 0,
        halted: false,
    })
}

/// Lazy stream of mismatches produced by [`run`].
///
/// Yields `Err` at most once, for the first oracle failure, and is exhausted
/// afterwards. Single pass; call [`run`] again to repeat.
pub struct Mismatches<'a, O: ?Sized> {
    configs: &'a [Configuration],
    expected: &'a [bool],
    environment: &'a Environment,
    oracle: &'a O,
    next: usize,
    halted: bool,
}

impl<'a, O> Mismatches<'a, O>
where
    O: ValidityOracle + ?Sized,
{
    /// Number of records checked so far (equals oracle calls made).
    pub fn checked(&self) -> usize {
        self.next
    }

    /// Total number of records in the run.
    pub fn total(&self) -> usize {
        self.configs.len()
    }
}

impl<'a, O> Iterator for Mismatches<'a, O>
where
    O: ValidityOracle + ?Sized,
{
    type Item = Result<MismatchRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        while self.next < self.configs.len() {
            let index = self.next;
            self.next += 1;
            let configuration = &self.configs[index];
            let expected = self.expected[index];
            let actual = match self.oracle.validate(configuration, self.environment) {
                Ok(actual) => actual,
                Err(source) => {
                    warn!("oracle failed on record {index}: {source}");
                    self.halted = true;
                    return Some(Err(HarnessError::OracleInvocation { index, source }));
                }
            };
            if actual != expected {
                debug!("mismatch at {index}: expected={expected} actual={actual}");
                return Some(Ok(MismatchRecord {
                    index,
                    configuration: configuration.clone(),
                    expected,
                    actual,
                }));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            (0, Some(0))
        } else {
            (0, Some(self.configs.len() - self.next))
        }
    }
}

impl<'a, O> std::iter::FusedIterator for Mismatches<'a, O> where O: ValidityOracle + ?Sized {}
