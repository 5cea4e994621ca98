//! SPH fluid engine for an LED matrix display.
//!
//! Particle-based 2D fluid approximation with:
//! - Verlet-style integration (velocity rebuilt from position history)
//! - Pairwise density with a steeper near-density term against clumping
//! - Soft wall springs and a display-clamped visual position per particle
//! - A quantizer that bins visual positions into a brightness frame
//!
//! This crate is transport-agnostic - it handles simulation and
//! quantization only. Use the `lamp` crate for driving a display.

pub mod grid;
pub mod params;
pub mod particle;
pub mod physics;
pub mod sph;

pub use grid::{Frame, GridError, LedGrid};
pub use params::{SpawnRegion, SphParams};
pub use particle::{Particle, Particles};
pub use sph::SphSimulation;
