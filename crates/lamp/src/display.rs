//! Frame output contract.
//!
//! A sink receives one frame per tick. The real implementation frames and
//! ships the bytes to the matrix hardware; that layer lives outside this
//! workspace and the core never sees it.

use sim::Frame;
use std::io::{self, Write};

pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Terminal stand-in for the matrix: shades each cell on stdout. Rows are
/// printed top-down while the simulation's y axis grows upward, so the
/// highest row comes first.
pub struct TerminalSink {
    out: io::Stdout,
}

const RAMP: &[u8] = b" .:-=+*#%@";

impl TerminalSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out)?;
        for row in (0..frame.rows()).rev() {
            for col in 0..frame.cols() {
                let shade = RAMP[frame.get(row, col) as usize * (RAMP.len() - 1) / 255];
                // Two chars per cell keeps the aspect ratio roughly square.
                out.write_all(&[shade, shade])?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}
