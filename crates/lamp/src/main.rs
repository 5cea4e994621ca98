//! LED matrix fluid lamp driver.
//!
//! Polls the tilt source, advances the SPH simulation one tick, quantizes
//! the particle positions into a brightness frame, and hands the frame to
//! the sink. Pass a JSON config path as the first argument to override
//! the built-in tuning.

mod config;
mod display;
mod input;

use config::LampConfig;
use display::{FrameSink, TerminalSink};
use glam::Vec2;
use input::{ConstantTilt, TiltReading, TiltSource};
use sim::{LedGrid, SphSimulation};
use std::path::Path;
use std::time::{Duration, Instant};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match LampConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => LampConfig::default(),
    };

    let grid = match LedGrid::new(
        config.grid.rows,
        config.grid.cols,
        config.grid.cell_size,
        Vec2::new(-config.sim.half_width, config.sim.floor),
        config.grid.levels,
    ) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let mut sim = SphSimulation::new(config.sim, config.particle_count, config.spawn);

    // Stand-ins for the external sensor and matrix transports.
    let mut tilt: Box<dyn TiltSource> = Box::new(ConstantTilt(TiltReading {
        angle_degrees: config.sim.gravity_angle.to_degrees(),
        magnitude: 1.0,
    }));
    let mut sink = TerminalSink::new();

    log::info!(
        "starting: {} particles, {}x{} matrix, {} levels",
        config.particle_count,
        config.grid.rows,
        config.grid.cols,
        config.grid.levels
    );

    let mut gravity = (config.sim.gravity_magnitude, config.sim.gravity_angle);
    let mut frames = 0u32;
    let mut last_report = Instant::now();

    loop {
        // A missed poll keeps the previous gravity vector.
        if let Some(reading) = tilt.poll() {
            gravity = config.tilt.apply(reading, config.sim.gravity_magnitude);
        }

        sim.update(gravity.0, gravity.1);
        let frame = grid.quantize(&sim.visual_positions());
        if let Err(err) = sink.present(&frame) {
            log::error!("frame sink failed: {err}");
            std::process::exit(1);
        }

        frames += 1;
        let elapsed = last_report.elapsed();
        if elapsed >= Duration::from_secs(1) {
            log::info!("fps: {:.1}", frames as f32 / elapsed.as_secs_f32());
            frames = 0;
            last_report = Instant::now();
        }

        if config.tick_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.tick_delay_ms));
        }
    }
}
