//! Tilt input contract.
//!
//! The accelerometer transport lives outside this workspace; the loop
//! only needs a non-blocking poll that may or may not yield a fresh
//! packet.

use serde::{Deserialize, Serialize};

/// One sensor packet: direction in degrees plus a unitless magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltReading {
    pub angle_degrees: f32,
    pub magnitude: f32,
}

/// Non-blocking source of tilt packets. `None` means nothing new arrived
/// and the caller keeps steering with the previous gravity vector.
pub trait TiltSource {
    fn poll(&mut self) -> Option<TiltReading>;
}

/// Fixed tilt for bench runs without a sensor attached.
pub struct ConstantTilt(pub TiltReading);

impl TiltSource for ConstantTilt {
    fn poll(&mut self) -> Option<TiltReading> {
        Some(self.0)
    }
}

/// How a sensor reading becomes the (magnitude, angle) pair fed to the
/// engine.
///
/// The angle always passes through (degrees to radians). Magnitude
/// scaling is a separate, opt-in knob, so both the angle-only and the
/// sensor-scaled behavior are reachable by configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltMapping {
    /// Multiplier on the sensor magnitude when `scale_magnitude` is set.
    pub magnitude_gain: f32,
    /// Scale the configured gravity magnitude by the sensor reading.
    pub scale_magnitude: bool,
}

impl Default for TiltMapping {
    fn default() -> Self {
        Self {
            magnitude_gain: 1.0,
            scale_magnitude: false,
        }
    }
}

impl TiltMapping {
    /// Map a reading onto engine inputs, given the configured base
    /// gravity magnitude.
    pub fn apply(&self, reading: TiltReading, base_magnitude: f32) -> (f32, f32) {
        let angle = reading.angle_degrees.to_radians();
        let magnitude = if self.scale_magnitude {
            base_magnitude * reading.magnitude * self.magnitude_gain
        } else {
            base_magnitude
        };
        (magnitude, angle)
    }
}
