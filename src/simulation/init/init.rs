use crate::domain::config::{EngineConfig, LateralVelocity};
use crate::domain::error::EngineError;
use crate::domain::grain::HueCursor;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::random::LateralRng;
use super::SandCore;

pub(super) fn create_sand_core(rows: u32, cols: u32, rng: LateralRng) -> SandCore {
    let grid = Grid::new(rows, cols);
    let size = grid.size();
    SandCore {
        grid,
        rng,
        hue_cursor: HueCursor::new(),
        lateral_velocity: LateralVelocity::Keep,
        dirty: false,
        grain_count: 0,
        frame: 0,
        // Filled on demand by `extract_pixels`.
        pixels: vec![0u32; size],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn create_sand_core_from_config(config: &EngineConfig) -> Result<SandCore, EngineError> {
    config.validate()?;
    let rng = match config.seed {
        Some(seed) => LateralRng::seeded(seed),
        None => LateralRng::from_entropy(),
    };
    let mut core = create_sand_core(config.rows, config.cols, rng);
    core.lateral_velocity = config.lateral_velocity;
    Ok(core)
}
