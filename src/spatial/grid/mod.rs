//! Grid - Structure of Arrays (SoA) for the sand cells
//!
//! Instead of: Vec<Point>           // one object per cell
//! We have:    hue[], velocity[]    // linear memory, indexed by row * cols + col
//!
//! Columns are the fall axis: a grain at `(row, col)` falls toward `col + 1`.

use crate::domain::grain::{EMPTY_HUE, REST_VELOCITY};

mod indexing;
mod accessors;
mod moves;

/// SoA Grid - every cell property in its own array
pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,

    pub hue: Vec<f32>,      // 0 = empty, (0, 1] = grain color
    pub velocity: Vec<u8>,  // cells per step, REST_VELOCITY while empty
}

/// Largest cell count a grid may hold. Coordinates arrive as `i32` and
/// indices are computed in `u32`, so both must stay representable.
pub const MAX_CELLS: u64 = i32::MAX as u64;

/// Whether a `rows x cols` grid fits the signed coordinate space.
#[inline]
pub fn dimensions_fit(rows: u32, cols: u32) -> bool {
    rows as u64 <= MAX_CELLS && cols as u64 <= MAX_CELLS && (rows as u64) * (cols as u64) <= MAX_CELLS
}

impl Grid {
    /// # Panics
    ///
    /// Panics when the dimensions do not fit (see [`dimensions_fit`]).
    pub fn new(rows: u32, cols: u32) -> Self {
        assert!(dimensions_fit(rows, cols), "grid {}x{} is too large", rows, cols);
        let size = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            size,
            hue: vec![EMPTY_HUE; size],
            velocity: vec![REST_VELOCITY; size],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grain::MAX_VELOCITY;

    #[test]
    fn new_grid_is_empty_at_rest() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.size(), 12);
        assert!(grid.hue.iter().all(|&h| h == EMPTY_HUE));
        assert!(grid.velocity.iter().all(|&v| v == REST_VELOCITY));
    }

    #[test]
    fn index_is_row_major_over_columns() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 2), 2);
        assert_eq!(grid.index(1, 0), 3);
        assert_eq!(grid.index(3, 1), 10);
    }

    #[test]
    fn dimension_limits() {
        assert!(dimensions_fit(125, 125));
        assert!(dimensions_fit(i32::MAX as u32, 1));
        assert!(!dimensions_fit(i32::MAX as u32 + 1, 1));
        assert!(!dimensions_fit(1, u32::MAX));
        assert!(!dimensions_fit(65_536, 65_536));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn oversized_grid_is_rejected() {
        Grid::new(u32::MAX, 2);
    }

    #[test]
    fn index_of_rejects_out_of_bounds() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index_of(-1, 0), None);
        assert_eq!(grid.index_of(0, -1), None);
        assert_eq!(grid.index_of(4, 0), None);
        assert_eq!(grid.index_of(0, 3), None);
        assert_eq!(grid.index_of(3, 2), Some(11));
    }

    #[test]
    fn fall_moves_grain_and_accelerates() {
        let mut grid = Grid::new(1, 5);
        let src = grid.index(0, 0);
        let dst = grid.index(0, 3);
        grid.spawn_grain(src, 0.5);
        grid.fall_grain(src, dst);

        assert!(grid.is_empty_idx(src));
        assert_eq!(grid.velocity[src], REST_VELOCITY);
        assert_eq!(grid.hue[dst], 0.5);
        assert_eq!(grid.velocity[dst], 2);
    }

    #[test]
    fn fall_velocity_is_capped() {
        let mut grid = Grid::new(1, 3);
        let src = grid.index(0, 0);
        let dst = grid.index(0, 1);
        grid.spawn_grain(src, 0.5);
        grid.velocity[src] = MAX_VELOCITY;
        grid.fall_grain(src, dst);
        assert_eq!(grid.velocity[dst], MAX_VELOCITY);
    }

    #[test]
    fn slide_keep_leaves_landing_velocity() {
        let mut grid = Grid::new(2, 2);
        let src = grid.index(0, 0);
        let dst = grid.index(1, 1);
        grid.spawn_grain(src, 0.25);
        grid.velocity[src] = 6;
        grid.slide_grain(src, dst, false);

        assert_eq!(grid.hue[dst], 0.25);
        assert_eq!(grid.velocity[dst], REST_VELOCITY);
        assert!(grid.is_empty_idx(src));
        assert_eq!(grid.velocity[src], REST_VELOCITY);
    }

    #[test]
    fn slide_carry_moves_velocity() {
        let mut grid = Grid::new(2, 2);
        let src = grid.index(0, 0);
        let dst = grid.index(1, 1);
        grid.spawn_grain(src, 0.25);
        grid.velocity[src] = 6;
        grid.slide_grain(src, dst, true);

        assert_eq!(grid.velocity[dst], 6);
        assert_eq!(grid.velocity[src], REST_VELOCITY);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut grid = Grid::new(3, 3);
        for idx in 0..grid.size() {
            grid.spawn_grain(idx, 0.1);
            grid.velocity[idx] = 4;
        }
        grid.clear();
        assert_eq!(grid.count_occupied(), 0);
        assert!(grid.velocity.iter().all(|&v| v == REST_VELOCITY));
    }
}
