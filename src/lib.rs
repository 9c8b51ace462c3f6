// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Collision-check regression harness.
//!
//! Replays a recorded corpus of (configuration, expected validity) pairs
//! against a live [`oracle::ValidityOracle`] and streams every record whose
//! outcome drifted.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Dataset loader for configuration and expected-outcome tables
pub mod dataset;
/// Obstacle scenes evaluated by the oracle
pub mod env;
/// Validity oracle interface and bundled backends
pub mod oracle;
/// Lock-step comparison of recorded and live outcomes
pub mod runner;
/// Mismatch report sinks
pub mod report;
/// Harness configuration layering
pub mod config;
/// Command-line entry point
pub mod cli;

pub use dataset::{load_configurations, load_expected_outcomes, Configuration};
pub use env::{build_default_environment, Environment, EnvironmentBuilder, Sphere};
pub use oracle::{OracleError, ValidityOracle};
pub use runner::{run, MismatchRecord, Mismatches};

/// Errors surfaced by the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A field in an input table could not be parsed.
    #[error("{}", describe_malformed(.origin, .line, .field, .token, .reason))]
    MalformedInput {
        origin: String,
        /// 1-based line number.
        line: usize,
        /// 1-based field number; `None` for single-column tables.
        field: Option<usize>,
        token: String,
        reason: String,
    },
    /// Configuration and expected-outcome tables have different lengths.
    #[error(
        "dataset size mismatch: {configurations} configurations but {expected} expected outcomes"
    )]
    DatasetSizeMismatch { configurations: usize, expected: usize },
    /// The oracle failed while checking record `index` (0-based).
    #[error("oracle failed on record {index}: {source}")]
    OracleInvocation {
        index: usize,
        #[source]
        source: OracleError,
    },
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scene {}: {detail}", .path.display())]
    Scene { path: PathBuf, detail: String },
    #[error("config: {0}")]
    Config(String),
}

fn describe_malformed(
    origin: &str,
    line: &usize,
    field: &Option<usize>,
    token: &str,
    reason: &str,
) -> String {
    match field {
        Some(field) => format!("{origin}:{line}: field {field} '{token}': {reason}"),
        None => format!("{origin}:{line}: '{token}': {reason}"),
    }
}

/// Crate result alias.
pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
