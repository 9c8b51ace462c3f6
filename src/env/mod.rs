// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Obstacle scenes.
//!
//! An [`Environment`] is an ordered, immutable set of spherical obstacles.
//! It is built once per run and shared read-only with every oracle call;
//! cloning it shares the same obstacle slice rather than rebuilding it.

mod scene;

use std::sync::Arc;

use serde::Serialize;

pub use scene::{SceneFile, SceneSphere};

/// Radius shared by every obstacle of the default catalog.
pub const DEFAULT_RADIUS: f64 = 0.2;

/// Height of the lower obstacle ring.
pub const LOWER_RING_Z: f64 = 0.25;
/// Height of the upper obstacle ring.
pub const UPPER_RING_Z: f64 = 0.8;

const LOWER_RING: [[f64; 2]; 7] = [
    [0.55, 0.0],
    [0.35, 0.35],
    [0.0, 0.55],
    [-0.55, 0.0],
    [-0.35, -0.35],
    [0.0, -0.55],
    [0.35, -0.35],
];

const UPPER_RING: [[f64; 2]; 7] = [
    [0.35, 0.35],
    [0.0, 0.55],
    [-0.35, 0.35],
    [-0.55, 0.0],
    [-0.35, -0.35],
    [0.0, -0.55],
    [0.35, -0.35],
];

/// A labelled spherical obstacle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sphere {
    pub label: String,
    pub center: [f64; 3],
    pub radius: f64,
}

impl Sphere {
    pub fn new(label: impl Into<String>, center: [f64; 3], radius: f64) -> Self {
        Self {
            label: label.into(),
            center,
            radius,
        }
    }

    /// Inclusive overlap test against a ball; touching counts as contact.
    pub fn touches_ball(&self, center: [f64; 3], radius: f64) -> bool {
        let dx = self.center[0] - center[0];
        let dy = self.center[1] - center[1];
        let dz = self.center[2] - center[2];
        let reach = self.radius + radius;
        dx * dx + dy * dy + dz * dz <= reach * reach
    }
}

/// Immutable obstacle scene shared by all queries of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    obstacles: Arc<[Sphere]>,
}

impl Environment {
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// An environment with no obstacles.
    pub fn empty() -> Self {
        EnvironmentBuilder::default().build()
    }

    pub fn obstacles(&self) -> &[Sphere] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sphere> {
        self.obstacles.iter()
    }

    /// True if a ball at `center` with `radius` touches any obstacle.
    pub fn collides_ball(&self, center: [f64; 3], radius: f64) -> bool {
        self.obstacles
            .iter()
            .any(|sphere| sphere.touches_ball(center, radius))
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a Sphere;
    type IntoIter = std::slice::Iter<'a, Sphere>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}

/// Accumulates obstacles in insertion order.
#[derive(Debug, Default, Clone)]
pub struct EnvironmentBuilder {
    obstacles: Vec<Sphere>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sphere(mut self, label: impl Into<String>, center: [f64; 3], radius: f64) -> Self {
        self.add_sphere(Sphere::new(label, center, radius));
        self
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> &mut Self {
        self.obstacles.push(sphere);
        self
    }

    pub fn build(self) -> Environment {
        Environment {
            obstacles: self.obstacles.into(),
        }
    }
}

/// Build the default two-ring scene: seven spheres at `z = 0.25` and seven
/// at `z = 0.8`, all of radius 0.2, lower ring first.
pub fn build_default_environment() -> Environment {
    let mut builder = EnvironmentBuilder::new();
    for (i, [x, y]) in LOWER_RING.into_iter().enumerate() {
        builder.add_sphere(Sphere::new(
            format!("lower-{i}"),
            [x, y, LOWER_RING_Z],
            DEFAULT_RADIUS,
        ));
    }
    for (i, [x, y]) in UPPER_RING.into_iter().enumerate() {
        builder.add_sphere(Sphere::new(
            format!("upper-{i}"),
            [x, y, UPPER_RING_Z],
            DEFAULT_RADIUS,
        ));
    }
    builder.build()
}
