//! Integration tests for the LED quantizer.
//! Run with: cargo test -p sim
//!
//! These verify the binning and brightness mapping rules:
//! - Saturation and the linear count -> byte formula
//! - Silent dropping of off-grid positions
//! - Purity (no hidden state between calls)

use glam::Vec2;
use sim::{GridError, LedGrid};

const ROWS: usize = 9;
const COLS: usize = 16;
const CELL: f32 = 0.1;

/// Grid matching the default simulation domain: x in [-0.8, 0.8],
/// y in [0, 0.9].
fn matrix(levels: u32) -> LedGrid {
    LedGrid::new(ROWS, COLS, CELL, Vec2::new(-0.8, 0.0), levels).unwrap()
}

/// Center of cell (row, col) in world coordinates.
fn cell_center(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        -0.8 + (col as f32 + 0.5) * CELL,
        (row as f32 + 0.5) * CELL,
    )
}

#[test]
fn rejects_fewer_than_two_levels() {
    let err = LedGrid::new(ROWS, COLS, CELL, Vec2::new(-0.8, 0.0), 1).unwrap_err();
    assert_eq!(err, GridError::TooFewLevels(1));
    assert!(LedGrid::new(ROWS, COLS, CELL, Vec2::new(-0.8, 0.0), 0).is_err());
}

#[test]
fn two_levels_is_binary_on_off() {
    let grid = matrix(2);

    let empty = grid.quantize(&[]);
    assert!(empty.as_bytes().iter().all(|&b| b == 0));

    // One particle lights the cell fully; more particles change nothing.
    let one = grid.quantize(&[cell_center(4, 7)]);
    assert_eq!(one.get(4, 7), 255);

    let three = grid.quantize(&[cell_center(4, 7); 3]);
    assert_eq!(three.get(4, 7), 255);
    assert_eq!(
        one.as_bytes().iter().filter(|&&b| b > 0).count(),
        three.as_bytes().iter().filter(|&&b| b > 0).count()
    );
}

#[test]
fn three_levels_graduate_then_saturate() {
    let grid = matrix(3);
    let spot = cell_center(2, 3);

    assert_eq!(grid.quantize(&[]).get(2, 3), 0);
    // round(1 * 255 / 2) = 128
    assert_eq!(grid.quantize(&[spot]).get(2, 3), 128);
    assert_eq!(grid.quantize(&[spot; 2]).get(2, 3), 255);
    assert_eq!(grid.quantize(&[spot; 5]).get(2, 3), 255);
}

#[test]
fn off_grid_positions_are_dropped() {
    let grid = matrix(2);
    let strays = [
        Vec2::new(0.85, 0.45),  // beyond +half_width
        Vec2::new(-0.85, 0.45), // beyond -half_width
        Vec2::new(0.0, -0.05),  // below the floor
        Vec2::new(0.0, 0.95),   // above the ceiling
        Vec2::new(5.0, 5.0),    // far away
    ];

    let frame = grid.quantize(&strays);
    assert!(
        frame.as_bytes().iter().all(|&b| b == 0),
        "off-grid positions must not light any cell"
    );
}

#[test]
fn edges_bin_by_floor() {
    // Whole-number geometry keeps the edge arithmetic exact.
    let grid = LedGrid::new(4, 4, 0.5, Vec2::ZERO, 2).unwrap();

    // The origin corner belongs to cell (0, 0).
    assert_eq!(grid.quantize(&[Vec2::ZERO]).get(0, 0), 255);
    // An interior cell boundary belongs to the upper cell.
    assert_eq!(grid.quantize(&[Vec2::new(0.5, 0.0)]).get(0, 1), 255);
    // The far edge indexes one past the last cell and is dropped.
    let far = grid.quantize(&[Vec2::new(2.0, 1.0), Vec2::new(1.0, 2.0)]);
    assert!(far.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn frame_layout_is_row_major() {
    let grid = matrix(2);
    let frame = grid.quantize(&[cell_center(6, 2)]);

    assert_eq!(frame.rows(), ROWS);
    assert_eq!(frame.cols(), COLS);
    assert_eq!(frame.as_bytes().len(), ROWS * COLS);
    assert_eq!(frame.as_bytes()[6 * COLS + 2], 255);
}

#[test]
fn quantization_is_pure() {
    let grid = matrix(3);
    let positions: Vec<Vec2> = (0..100)
        .map(|i| {
            let t = i as f32 / 100.0;
            Vec2::new(-0.8 + 1.6 * t, 0.9 * (1.0 - t))
        })
        .collect();

    let first = grid.quantize(&positions);
    let second = grid.quantize(&positions);
    assert_eq!(first, second, "same inputs must produce identical frames");
}

#[test]
fn particles_in_different_cells_accumulate_separately() {
    let grid = matrix(3);
    let frame = grid.quantize(&[
        cell_center(0, 0),
        cell_center(0, 0),
        cell_center(8, 15),
    ]);

    assert_eq!(frame.get(0, 0), 255);
    assert_eq!(frame.get(8, 15), 128);
    assert_eq!(frame.as_bytes().iter().filter(|&&b| b > 0).count(), 2);
}
