//! Unified tuning constants for the SPH simulation.
//!
//! Parameter defaults and tests draw from these instead of defining their
//! own copies, so the subsystems cannot drift apart.

use std::f32::consts::PI;

/// Half-width of the simulation domain; x spans [-HALF_WIDTH, HALF_WIDTH].
pub const HALF_WIDTH: f32 = 0.8;
/// Bottom wall of the domain.
pub const FLOOR: f32 = 0.0;
/// Top wall of the domain.
pub const CEILING: f32 = 0.9;

/// Default external force magnitude per tick (gravity analog).
pub const GRAVITY_MAGNITUDE: f32 = 0.02 * 0.25;
/// Default external force angle in radians (straight down).
pub const GRAVITY_ANGLE: f32 = -0.5 * PI;

/// Inter-particle spacing the stiffness values below are tuned for.
pub const SPACING: f32 = 0.12;
/// Pressure stiffness K in the linear state equation.
pub const STIFFNESS: f32 = SPACING / 1000.0;
/// Near-pressure stiffness, 10x K to resist clumping at short range.
pub const NEAR_STIFFNESS: f32 = STIFFNESS * 10.0;
/// Density the state equation relaxes toward.
pub const REST_DENSITY: f32 = 1.0;
/// Neighbor cutoff radius.
pub const INTERACTION_RADIUS: f32 = SPACING * 1.25;
/// Viscosity impulse coefficient.
pub const SIGMA: f32 = 0.2;
/// Speed threshold above which velocity is damped.
pub const MAX_SPEED: f32 = 2.0;
/// Proportional scale-down applied to velocity past MAX_SPEED.
pub const VELOCITY_DAMPING: f32 = 0.5;
/// Linear spring constant of the soft walls.
pub const WALL_SPRING: f32 = 1.0;
