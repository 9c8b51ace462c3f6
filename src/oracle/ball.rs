// CLASSIFICATION: COMMUNITY
// Filename: ball.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use super::{point3, OracleError, ValidityOracle};
use crate::dataset::Configuration;
use crate::env::Environment;

/// Free-floating spherical robot. Its configuration is the centre `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallRobot {
    pub radius: f64,
}

impl BallRobot {
    pub const DEFAULT_RADIUS: f64 = 0.05;

    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for BallRobot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl ValidityOracle for BallRobot {
    fn validate(
        &self,
        configuration: &Configuration,
        environment: &Environment,
    ) -> Result<bool, OracleError> {
        let center = point3(configuration)?;
        Ok(!environment.collides_ball(center, self.radius))
    }
}
