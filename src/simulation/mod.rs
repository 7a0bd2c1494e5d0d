//! SandCore - the falling sand grid engine
//!
//! Owns the SoA grid plus the per-engine state that drives it: the hue
//! cursor handing out grain colors, the lateral RNG, and the dirty flag the
//! driver polls to decide whether another step is worth running.
//!
//! The engine is single-threaded and has no notion of time. Cadence belongs
//! to the caller (see `Session::tick`).

use crate::domain::config::{EngineConfig, LateralVelocity};
use crate::domain::error::EngineError;
use crate::domain::grain::{HueCursor, OUT_OF_BOUNDS};
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/fall.rs"]
mod fall;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "session/session.rs"]
mod session;
mod facade;

pub use facade::SandSim;
pub use perf_stats::PerfStats;
pub use session::Session;

use perf_timer::PerfTimer;
use random::LateralRng;

/// The simulation engine
pub struct SandCore {
    grid: Grid,
    rng: LateralRng,
    hue_cursor: HueCursor,

    // Settings
    lateral_velocity: LateralVelocity,

    // State
    dirty: bool,
    grain_count: u32,
    frame: u64,

    // Render
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SandCore {
    /// Create an engine with an entropy-seeded RNG
    ///
    /// Panics when `rows * cols` does not fit the grid's coordinate space;
    /// use [`SandCore::from_config`] to get an error instead.
    pub fn new(rows: u32, cols: u32) -> Self {
        init::create_sand_core(rows, cols, LateralRng::from_entropy())
    }

    /// Create an engine whose lateral tie-breaks are reproducible
    pub fn with_seed(rows: u32, cols: u32, seed: u64) -> Self {
        init::create_sand_core(rows, cols, LateralRng::seeded(seed))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        init::create_sand_core_from_config(config)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    /// `(rows, cols)`, fixed for the engine's lifetime
    pub fn dimensions(&self) -> (u32, u32) {
        (self.grid.rows(), self.grid.cols())
    }

    pub fn grain_count(&self) -> u32 { self.grain_count }

    pub fn frame(&self) -> u64 { self.frame }

    /// Hue the next activated grain will receive
    pub fn hue_cursor(&self) -> f32 { self.hue_cursor.peek() }

    pub fn lateral_velocity(&self) -> LateralVelocity {
        settings::lateral_velocity(self)
    }

    pub fn set_lateral_velocity(&mut self, policy: LateralVelocity) {
        settings::set_lateral_velocity(self, policy);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Turn an empty in-bounds cell into a grain
    ///
    /// Returns `false` only for out-of-bounds coordinates. Activating an
    /// existing grain is a no-op that still reports `true`.
    pub fn activate(&mut self, row: i32, col: i32) -> bool {
        commands::activate(self, row, col)
    }

    /// Activate a `size`-wide square brush centered on `(center_row, center_col)`
    pub fn activate_region(&mut self, center_row: i32, center_col: i32, size: i32) -> Result<(), EngineError> {
        commands::activate_region(self, center_row, center_col, size)
    }

    /// Empty every cell. The hue cursor keeps going.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by one discrete step
    pub fn step(&mut self) {
        step::step(self);
    }

    /// `true` when the last step (or activation) changed nothing
    pub fn is_static(&self) -> bool {
        !self.dirty
    }

    /// Hue at `(row, col)`: 0 for empty, `-1.0` outside the grid
    pub fn state(&self, row: i32, col: i32) -> f32 {
        self.grid.get_hue(row, col).unwrap_or(OUT_OF_BOUNDS)
    }

    pub fn velocity(&self, row: i32, col: i32) -> Option<u8> {
        self.grid.get_velocity(row, col)
    }

    /// Occupied cells by full grid scan
    pub fn count_occupied(&self) -> usize {
        self.grid.count_occupied()
    }

    /// Get pointer to hue array (for JS rendering)
    pub fn hue_ptr(&self) -> *const f32 {
        self.grid.hue_ptr()
    }

    pub fn hue_len(&self) -> usize {
        self.grid.size()
    }

    /// Fill the ABGR pixel buffer from the grid and return a pointer to it
    pub fn extract_pixels(&mut self) -> *const u32 {
        render_extract::extract_pixels(self)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
