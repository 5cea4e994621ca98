//! SPH particle system.
//!
//! Double-density relaxation in the style of Clavet et al. 2005
//! ("Particle-based Viscoelastic Fluid Simulation"): a linear kernel
//! q = 1 - d/R feeds a squared density and a cubed near-density, and the
//! near-pressure term strongly resists clumping at short range.
//!
//! One `update` runs, in order:
//! 1. Predictive integration + force reset + soft wall response
//! 2. Pairwise density accumulation and neighbor recording
//! 3. Linear state equation (density -> pressure)
//! 4. Pressure forces over recorded pairs
//! 5. Viscosity impulses between approaching pairs

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::params::{SpawnRegion, SphParams};
use crate::particle::Particles;

/// Owns the particle collection and advances it one tick at a time.
pub struct SphSimulation {
    pub params: SphParams,
    pub particles: Particles,
    // Per-step neighbor scratch in CSR form: the neighbors of particle i
    // live at neighbor_list[neighbor_offsets[i]..neighbor_offsets[i + 1]].
    // Rebuilt from scratch every update, never carried across steps.
    neighbor_offsets: Vec<u32>,
    neighbor_list: Vec<u32>,
}

impl SphSimulation {
    /// Scatter `count` particles uniformly into `region`.
    pub fn new(params: SphParams, count: usize, region: SpawnRegion) -> Self {
        Self::with_rng(params, count, region, &mut rand::thread_rng())
    }

    /// Reproducible construction for tests and diagnostics.
    pub fn with_seed(params: SphParams, count: usize, region: SpawnRegion, seed: u64) -> Self {
        Self::with_rng(params, count, region, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(
        params: SphParams,
        count: usize,
        region: SpawnRegion,
        rng: &mut impl Rng,
    ) -> Self {
        let particles = Particles::scatter(count, region, params.default_gravity(), rng);
        Self::from_particles(params, particles)
    }

    /// Exact placement; all other state starts at rest.
    pub fn from_positions(params: SphParams, positions: &[Vec2]) -> Self {
        let particles = Particles::at_positions(positions, params.default_gravity());
        Self::from_particles(params, particles)
    }

    fn from_particles(params: SphParams, particles: Particles) -> Self {
        let count = particles.len();
        Self {
            params,
            particles,
            neighbor_offsets: Vec::with_capacity(count + 1),
            neighbor_list: Vec::new(),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Advance the simulation by one tick under the given external force
    /// (polar form: non-negative magnitude, angle in radians).
    pub fn update(&mut self, gravity_magnitude: f32, gravity_angle: f32) {
        self.integrate(gravity_magnitude, gravity_angle);
        self.accumulate_density();
        self.compute_pressure();
        self.apply_pressure_forces();
        self.apply_viscosity();
    }

    /// Display-clamped positions in stable particle order.
    pub fn visual_positions(&self) -> Vec<Vec2> {
        self.particles.iter().map(|p| p.visual_position).collect()
    }

    /// Predictive integration, force reset, and soft wall response.
    ///
    /// The explicit velocity is never trusted across steps: it is rebuilt
    /// from the position delta after integration. The force accumulator is
    /// reset to the external vector here; the wall springs add onto the
    /// fresh value so spring + gravity + the later pressure terms all
    /// survive into the next integration.
    fn integrate(&mut self, gravity_magnitude: f32, gravity_angle: f32) {
        let p = self.params;
        let gravity = Vec2::from_angle(gravity_angle) * gravity_magnitude;

        self.particles.list.par_iter_mut().for_each(|pt| {
            pt.previous_position = pt.position;
            pt.velocity += pt.force;
            pt.position += pt.velocity;
            pt.visual_position = pt.position;

            pt.force = gravity;

            pt.velocity = pt.position - pt.previous_position;
            if pt.velocity.length() > p.max_speed {
                pt.velocity *= p.velocity_damping;
            }

            // Soft walls: a spring proportional to penetration depth pulls
            // the true position back over the following steps, while the
            // visual position is clamped to the box immediately.
            if pt.position.x < -p.half_width {
                pt.force.x -= (pt.position.x + p.half_width) * p.wall_spring;
                pt.visual_position.x = -p.half_width;
            }
            if pt.position.x > p.half_width {
                pt.force.x -= (pt.position.x - p.half_width) * p.wall_spring;
                pt.visual_position.x = p.half_width;
            }
            if pt.position.y < p.floor {
                pt.force.y -= (pt.position.y - p.floor) * p.wall_spring;
                pt.visual_position.y = p.floor;
            }
            if pt.position.y > p.ceiling {
                pt.force.y -= (pt.position.y - p.ceiling) * p.wall_spring;
                pt.visual_position.y = p.ceiling;
            }

            pt.density = 0.0;
            pt.near_density = 0.0;
        });
    }

    /// Pairwise density accumulation and neighbor recording.
    ///
    /// Every unordered pair within the cutoff is visited exactly once
    /// (i < j); kernel contributions land symmetrically on both particles
    /// and j joins i's neighbor run for the force passes.
    fn accumulate_density(&mut self) {
        let radius = self.params.interaction_radius;
        let offsets = &mut self.neighbor_offsets;
        let neighbors = &mut self.neighbor_list;
        let list = &mut self.particles.list;
        let count = list.len();

        offsets.clear();
        neighbors.clear();

        for i in 0..count {
            offsets.push(neighbors.len() as u32);
            let mut density = 0.0;
            let mut near_density = 0.0;
            for j in (i + 1)..count {
                let dist = list[i].position.distance(list[j].position);
                if dist < radius {
                    let q = 1.0 - dist / radius;
                    density += q * q;
                    near_density += q * q * q;
                    list[j].density += q * q;
                    list[j].near_density += q * q * q;
                    neighbors.push(j as u32);
                }
            }
            list[i].density += density;
            list[i].near_density += near_density;
        }
        offsets.push(neighbors.len() as u32);
    }

    /// Linear state equation relating density to pressure.
    fn compute_pressure(&mut self) {
        let p = self.params;
        self.particles.list.par_iter_mut().for_each(|pt| {
            pt.pressure = p.stiffness * (pt.density - p.rest_density);
            pt.near_pressure = p.near_stiffness * pt.near_density;
        });
    }

    /// Pressure forces over the recorded pairs.
    ///
    /// The push on j is applied immediately; the reaction on i is summed
    /// across i's whole neighbor run and applied once (accumulate-then-
    /// apply keeps total force conserved per step).
    fn apply_pressure_forces(&mut self) {
        let radius = self.params.interaction_radius;
        let offsets = &self.neighbor_offsets;
        let neighbors = &self.neighbor_list;
        let list = &mut self.particles.list;

        for i in 0..list.len() {
            let run = &neighbors[offsets[i] as usize..offsets[i + 1] as usize];
            let mut reaction = Vec2::ZERO;
            for &j in run {
                let j = j as usize;
                let delta = list[j].position - list[i].position;
                let dist = delta.length();
                // Co-located pair: no direction, no force.
                if dist == 0.0 {
                    continue;
                }
                let q = 1.0 - dist / radius;
                let combined = (list[i].pressure + list[j].pressure) * (q * q)
                    + (list[i].near_pressure + list[j].near_pressure) * (q * q * q);
                let push = delta * (combined / dist);
                list[j].force += push;
                reaction += push;
            }
            list[i].force -= reaction;
        }
    }

    /// Viscosity impulses between approaching pairs.
    ///
    /// The relative velocity is projected onto the separation axis; only
    /// an approaching pair (positive projection) is damped, with equal and
    /// opposite impulses. Separating or co-located pairs are untouched.
    fn apply_viscosity(&mut self) {
        let radius = self.params.interaction_radius;
        let sigma = self.params.sigma;
        let offsets = &self.neighbor_offsets;
        let neighbors = &self.neighbor_list;
        let list = &mut self.particles.list;

        for i in 0..list.len() {
            let run = &neighbors[offsets[i] as usize..offsets[i + 1] as usize];
            for &j in run {
                let j = j as usize;
                let delta = list[j].position - list[i].position;
                let dist = delta.length();
                if dist == 0.0 {
                    continue;
                }
                let normal = delta / dist;
                let approach = (list[i].velocity - list[j].velocity).dot(normal);
                if approach > 0.0 {
                    let impulse = normal * ((1.0 - dist / radius) * sigma * approach * 0.5);
                    list[i].velocity -= impulse;
                    list[j].velocity += impulse;
                }
            }
        }
    }
}
