// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Collision-validity oracles.
//!
//! The harness never decides validity itself; it asks a [`ValidityOracle`].
//! Any closure with the right signature is an oracle, which keeps test
//! stubs one line long.

mod ball;
mod deadline;
#[cfg(feature = "rapier")]
mod rapier;
mod replay;

use std::time::Duration;

use thiserror::Error;

use crate::dataset::Configuration;
use crate::env::Environment;

pub use ball::BallRobot;
pub use deadline::Deadline;
#[cfg(feature = "rapier")]
pub use rapier::RapierBallRobot;
pub use replay::ReplayOracle;

/// Failure of a single oracle query. Distinct from a validity verdict.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OracleError {
    #[error("configuration has {actual} values, oracle expects {expected}")]
    Dimension { expected: usize, actual: usize },
    #[error("no answer within {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Backend(String),
    #[error("oracle worker exited without answering")]
    Disconnected,
}

/// Decides whether a configuration is collision-free in an environment.
///
/// Implementations must be deterministic for a fixed pair within one run.
pub trait ValidityOracle {
    /// `Ok(true)` if `configuration` is valid (collision-free).
    fn validate(
        &self,
        configuration: &Configuration,
        environment: &Environment,
    ) -> Result<bool, OracleError>;
}

impl<F> ValidityOracle for F
where
    F: Fn(&Configuration, &Environment) -> Result<bool, OracleError>,
{
    fn validate(
        &self,
        configuration: &Configuration,
        environment: &Environment,
    ) -> Result<bool, OracleError> {
        self(configuration, environment)
    }
}

/// Oracle backends selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleKind {
    Ball,
    Replay,
    Rapier,
}

impl std::str::FromStr for OracleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ball" => Ok(Self::Ball),
            "replay" => Ok(Self::Replay),
            "rapier" => Ok(Self::Rapier),
            other => Err(format!("unknown oracle '{other}' (expected ball, replay or rapier)")),
        }
    }
}

fn point3(configuration: &Configuration) -> Result<[f64; 3], OracleError> {
    match configuration.values() {
        &[x, y, z] => Ok([x, y, z]),
        other => Err(OracleError::Dimension {
            expected: 3,
            actual: other.len(),
        }),
    }
}
