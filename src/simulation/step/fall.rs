//! Landing searches for a single grain

use crate::grid::Grid;

/// Farthest free cell straight down the column, at most `velocity` cells away.
///
/// Walks back from `origin + velocity` toward the origin and stops at the
/// first cell that is inside the grid and empty. Cells in between are not
/// inspected, so a fast grain can pass over an occupied cell into a hole
/// behind it. `None` when the walk reaches the origin.
#[inline]
pub(super) fn fall_target(grid: &Grid, row: u32, origin: u32, velocity: u8) -> Option<u32> {
    let mut landing = origin + velocity as u32;
    while landing != origin && (landing >= grid.cols() || !grid.is_empty_idx(grid.index(row, landing))) {
        landing -= 1;
    }
    (landing != origin).then_some(landing)
}

/// Row of the first free diagonal cell at column `col`, trying `row + dir`
/// before `row - dir`.
#[inline]
pub(super) fn lateral_target(grid: &Grid, row: u32, col: u32, dir: i32) -> Option<u32> {
    let row = row as i32;
    let col = col as i32;
    [row + dir, row - dir]
        .into_iter()
        .find(|&side| grid.is_free(side, col))
        .map(|side| side as u32)
}
