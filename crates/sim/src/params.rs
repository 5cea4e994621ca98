//! Run configuration for the particle system.
//!
//! Everything the engine consumes is collected here and frozen at
//! construction, so simulations stay instantiable side by side and
//! testable in isolation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics;

/// Axis-aligned rectangle particles are scattered into at startup.
///
/// Sampling is uniform and half-open on both axes: `[min, max)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl SpawnRegion {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x < self.x_max && p.y >= self.y_min && p.y < self.y_max
    }
}

/// Tuning for one simulation run. Immutable once handed to the engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SphParams {
    /// x spans [-half_width, +half_width].
    pub half_width: f32,
    /// Bottom wall of the domain.
    pub floor: f32,
    /// Top wall of the domain.
    pub ceiling: f32,
    /// External force magnitude used until the caller supplies its own.
    pub gravity_magnitude: f32,
    /// External force angle in radians.
    pub gravity_angle: f32,
    /// Neighbor cutoff radius R.
    pub interaction_radius: f32,
    /// Stiffness K of the linear state equation.
    pub stiffness: f32,
    /// Stiffness applied to the cubed-kernel near-density term.
    pub near_stiffness: f32,
    /// Density the state equation relaxes toward.
    pub rest_density: f32,
    /// Viscosity impulse coefficient.
    pub sigma: f32,
    /// Speed above which velocity gets damped.
    pub max_speed: f32,
    /// Proportional factor applied to velocity past `max_speed`.
    pub velocity_damping: f32,
    /// Linear spring constant pulling escaped particles back to the walls.
    pub wall_spring: f32,
}

impl Default for SphParams {
    fn default() -> Self {
        Self {
            half_width: physics::HALF_WIDTH,
            floor: physics::FLOOR,
            ceiling: physics::CEILING,
            gravity_magnitude: physics::GRAVITY_MAGNITUDE,
            gravity_angle: physics::GRAVITY_ANGLE,
            interaction_radius: physics::INTERACTION_RADIUS,
            stiffness: physics::STIFFNESS,
            near_stiffness: physics::NEAR_STIFFNESS,
            rest_density: physics::REST_DENSITY,
            sigma: physics::SIGMA,
            max_speed: physics::MAX_SPEED,
            velocity_damping: physics::VELOCITY_DAMPING,
            wall_spring: physics::WALL_SPRING,
        }
    }
}

impl SphParams {
    /// Default external force vector in Cartesian form.
    pub fn default_gravity(&self) -> Vec2 {
        Vec2::from_angle(self.gravity_angle) * self.gravity_magnitude
    }

    /// The full simulation domain as a spawn region.
    pub fn domain(&self) -> SpawnRegion {
        SpawnRegion::new(-self.half_width, self.half_width, self.floor, self.ceiling)
    }
}
