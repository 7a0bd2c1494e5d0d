use crate::domain::config::LateralVelocity;

use super::fall::{fall_target, lateral_target};
use super::{PerfTimer, SandCore};

#[derive(Default)]
struct StepCounters {
    cells_scanned: u32,
    grains_checked: u32,
    straight_falls: u32,
    lateral_moves: u32,
    blocked: u32,
}

/// One discrete update.
///
/// Rows are scanned last to first. Within a row the scanned column runs from
/// `cols - 1` down to 1 and the candidate mover sits one column above it,
/// so column 0 is only ever a source, never a landing spot from above.
pub(super) fn step(core: &mut SandCore) {
    let perf_on = core.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let mut counters = StepCounters::default();
    let carry_velocity = core.lateral_velocity == LateralVelocity::Carry;
    let rows = core.grid.rows();
    let cols = core.grid.cols();

    core.dirty = false;

    for row in (0..rows).rev() {
        for col in (1..cols).rev() {
            counters.cells_scanned += 1;

            let origin = col - 1;
            let src = core.grid.index(row, origin);
            if core.grid.is_empty_idx(src) {
                continue;
            }
            counters.grains_checked += 1;

            // Fresh draw per grain check; only consulted when the fall is blocked.
            let dir = core.rng.lateral_dir();
            let velocity = core.grid.velocity_idx(src);

            if let Some(landing) = fall_target(&core.grid, row, origin, velocity) {
                let dst = core.grid.index(row, landing);
                core.grid.fall_grain(src, dst);
                counters.straight_falls += 1;
                core.dirty = true;
                continue;
            }

            match lateral_target(&core.grid, row, col, dir) {
                Some(side) => {
                    let dst = core.grid.index(side, col);
                    core.grid.slide_grain(src, dst, carry_velocity);
                    counters.lateral_moves += 1;
                    core.dirty = true;
                }
                None => counters.blocked += 1,
            }
        }
    }

    if let Some(start) = step_start {
        let stats = &mut core.perf_stats;
        stats.reset();
        stats.cells_scanned = counters.cells_scanned;
        stats.grains_checked = counters.grains_checked;
        stats.straight_falls = counters.straight_falls;
        stats.lateral_moves = counters.lateral_moves;
        stats.blocked = counters.blocked;
        stats.grain_count = core.grain_count;
        stats.grid_size = core.grid.size() as u32;
        stats.step_ms = start.elapsed_ms();
    }

    core.frame += 1;
}
