// CLASSIFICATION: COMMUNITY
// Filename: rapier.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Ball robot evaluated through Rapier's geometry layer (parry).

use rapier3d::na::Isometry3;
use rapier3d::parry::query;
use rapier3d::parry::shape::Ball;
use rapier3d::prelude::Real;

use super::{point3, OracleError, ValidityOracle};
use crate::dataset::Configuration;
use crate::env::Environment;

/// Same model as [`super::BallRobot`], answered by parry intersection tests.
#[derive(Debug, Clone, Copy)]
pub struct RapierBallRobot {
    pub radius: f64,
}

impl RapierBallRobot {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

fn isometry([x, y, z]: [f64; 3]) -> Isometry3<Real> {
    Isometry3::translation(x as Real, y as Real, z as Real)
}

impl ValidityOracle for RapierBallRobot {
    fn validate(
        &self,
        configuration: &Configuration,
        environment: &Environment,
    ) -> Result<bool, OracleError> {
        let robot_pos = isometry(point3(configuration)?);
        let robot = Ball::new(self.radius as Real);
        for obstacle in environment {
            let shape = Ball::new(obstacle.radius as Real);
            let hit = query::intersection_test(&robot_pos, &robot, &isometry(obstacle.center), &shape)
                .map_err(|e| {
                    OracleError::Backend(format!("parry query against '{}': {e:?}", obstacle.label))
                })?;
            if hit {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
