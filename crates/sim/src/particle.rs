//! Fluid particles for the SPH step.
//!
//! Each particle carries its true position, the display-clamped visual
//! position, and the per-step force/density accumulators. Velocity is
//! rebuilt from position history every step, never trusted across steps.

use glam::Vec2;
use rand::Rng;

use crate::params::SpawnRegion;

/// A fluid particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Continuous position, unconstrained.
    pub position: Vec2,
    /// Position at the start of the current step.
    pub previous_position: Vec2,
    /// Position clamped to the domain box. Display only, never fed back
    /// into the physics.
    pub visual_position: Vec2,
    /// Derived from the position delta each step.
    pub velocity: Vec2,
    /// Force accumulator, reset to the external vector every step.
    pub force: Vec2,
    /// Kernel-weighted neighbor count, rebuilt every step.
    pub density: f32,
    /// Cubed-kernel density term, rebuilt every step.
    pub near_density: f32,
    /// Linear state equation output.
    pub pressure: f32,
    pub near_pressure: f32,
}

impl Particle {
    /// Create a particle at rest with the given starting force.
    pub fn new(position: Vec2, initial_force: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            visual_position: position,
            velocity: Vec2::ZERO,
            force: initial_force,
            density: 0.0,
            near_density: 0.0,
            pressure: 0.0,
            near_pressure: 0.0,
        }
    }
}

/// Particle collection. Size is fixed for the lifetime of a run; there is
/// no add/remove path.
pub struct Particles {
    pub list: Vec<Particle>,
}

impl Particles {
    /// Scatter `count` particles uniformly into `region`.
    pub fn scatter(
        count: usize,
        region: SpawnRegion,
        initial_force: Vec2,
        rng: &mut impl Rng,
    ) -> Self {
        let mut list = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.gen_range(region.x_min..region.x_max);
            let y = rng.gen_range(region.y_min..region.y_max);
            list.push(Particle::new(Vec2::new(x, y), initial_force));
        }
        Self { list }
    }

    /// Place particles at exact positions (deterministic setups).
    pub fn at_positions(positions: &[Vec2], initial_force: Vec2) -> Self {
        Self {
            list: positions
                .iter()
                .map(|&p| Particle::new(p, initial_force))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.list.iter()
    }
}
