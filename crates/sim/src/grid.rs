//! LED brightness grid.
//!
//! Bins particle visual positions into a rows x cols byte frame for the
//! matrix transport. Quantization is pure with respect to its inputs: the
//! same positions and geometry always produce the same frame.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Fewer than two intensity levels leaves the brightness mapping
    /// without a divisor.
    #[error("at least 2 intensity levels required, got {0}")]
    TooFewLevels(u32),
}

/// One quantized frame: row-major, one brightness byte per LED.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Frame {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    /// Flat row-major view for the wire transport.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Maps world positions onto the LED matrix.
#[derive(Clone, Copy, Debug)]
pub struct LedGrid {
    rows: usize,
    cols: usize,
    cell_size: f32,
    origin: Vec2,
    levels: u32,
}

impl LedGrid {
    /// `origin` is the world position of cell (0, 0)'s lower-left corner.
    /// `levels` is the number of distinct brightness values a cell can
    /// take (particle counts saturate at `levels - 1`); fewer than two is
    /// rejected here, before any simulation runs.
    pub fn new(
        rows: usize,
        cols: usize,
        cell_size: f32,
        origin: Vec2,
        levels: u32,
    ) -> Result<Self, GridError> {
        if levels < 2 {
            return Err(GridError::TooFewLevels(levels));
        }
        Ok(Self {
            rows,
            cols,
            cell_size,
            origin,
            levels,
        })
    }

    /// Bin positions into per-cell counts and map counts to brightness.
    ///
    /// Positions whose cell index falls outside the grid contribute to no
    /// cell. Counts saturate at `levels - 1` and map linearly onto 0..=255.
    pub fn quantize(&self, positions: &[Vec2]) -> Frame {
        let mut counts = vec![0u32; self.rows * self.cols];

        for p in positions {
            let col = ((p.x - self.origin.x) / self.cell_size).floor();
            let row = ((p.y - self.origin.y) / self.cell_size).floor();
            if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
                continue;
            }
            counts[row as usize * self.cols + col as usize] += 1;
        }

        let top = self.levels - 1;
        let data = counts
            .iter()
            .map(|&count| {
                let clamped = count.min(top);
                ((clamped * 255) as f32 / top as f32).round() as u8
            })
            .collect();

        Frame {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_indexing_is_row_major() {
        let grid = LedGrid::new(3, 4, 1.0, Vec2::ZERO, 2).unwrap();
        let frame = grid.quantize(&[Vec2::new(2.5, 1.5)]);

        assert_eq!(frame.get(1, 2), 255);
        assert_eq!(frame.as_bytes()[1 * 4 + 2], 255);
        assert_eq!(frame.as_bytes().iter().filter(|&&b| b > 0).count(), 1);
    }

    #[test]
    fn single_level_is_rejected() {
        let err = LedGrid::new(9, 16, 0.1, Vec2::ZERO, 1).unwrap_err();
        assert_eq!(err, GridError::TooFewLevels(1));
        assert!(LedGrid::new(9, 16, 0.1, Vec2::ZERO, 0).is_err());
        assert!(LedGrid::new(9, 16, 0.1, Vec2::ZERO, 2).is_ok());
    }
}
