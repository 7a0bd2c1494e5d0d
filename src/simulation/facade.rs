use wasm_bindgen::prelude::*;

use crate::domain::config::{EngineConfig, LateralVelocity};
use crate::domain::error::EngineError;

use super::perf_stats::PerfStats;
use super::{SandCore, Session};

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing handle: one engine plus the session driving it
#[wasm_bindgen]
pub struct SandSim {
    core: SandCore,
    session: Session,
    config: EngineConfig,
}

#[wasm_bindgen]
impl SandSim {
    /// Create a simulation with given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<SandSim, JsValue> {
        let config = EngineConfig { rows, cols, ..EngineConfig::default() };
        let core = SandCore::from_config(&config).map_err(to_js_error)?;
        Ok(Self {
            core,
            session: Session::new(&config),
            config,
        })
    }

    /// Create a simulation from a JSON configuration document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<SandSim, JsValue> {
        let config = EngineConfig::from_json(json).map_err(to_js_error)?;
        let core = SandCore::from_config(&config).map_err(to_js_error)?;
        console_log!("sandfall: {}x{} grid, lateral velocity {:?}", config.rows, config.cols, config.lateral_velocity);
        Ok(Self {
            core,
            session: Session::new(&config),
            config,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn grain_count(&self) -> u32 { self.core.grain_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.session.running() }

    #[wasm_bindgen(getter)]
    pub fn brush_size(&self) -> i32 { self.session.brush_size() }

    #[wasm_bindgen(getter)]
    pub fn cell_scale(&self) -> u32 { self.session.cell_scale() }

    /// Suggested timer cadence for `tick`
    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u32 { self.config.tick_interval_ms }

    /// Effective configuration as JSON
    pub fn config_json(&self) -> String {
        let mut config = self.config.clone();
        config.lateral_velocity = self.core.lateral_velocity();
        config.brush_size = self.session.brush_size();
        config.to_json()
    }

    /// Activate one cell; `tick` starts stepping afterwards
    pub fn activate(&mut self, row: i32, col: i32) -> bool {
        self.session.activate(&mut self.core, row, col)
    }

    pub fn activate_region(&mut self, row: i32, col: i32, size: i32) -> Result<(), JsValue> {
        self.session.activate_region(&mut self.core, row, col, size).map_err(to_js_error)
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn is_static(&self) -> bool {
        self.core.is_static()
    }

    /// Hue at a cell, 0 for empty, -1 outside the grid
    pub fn state(&self, row: i32, col: i32) -> f32 {
        self.core.state(row, col)
    }

    /// Empty the grid and stop ticking (same as `restart`)
    pub fn clear(&mut self) {
        self.session.restart(&mut self.core);
    }

    // === Session ===

    /// Paint with the current brush at grid coordinates
    pub fn paint(&mut self, row: i32, col: i32) -> Result<(), JsValue> {
        self.session.paint(&mut self.core, row, col).map_err(to_js_error)
    }

    /// Paint with the current brush at canvas pixel coordinates
    pub fn paint_at_pixel(&mut self, px: i32, py: i32) -> Result<(), JsValue> {
        self.session.paint_at_pixel(&mut self.core, px, py).map_err(to_js_error)
    }

    /// Timer callback; returns whether the grid changed and needs a redraw
    pub fn tick(&mut self) -> bool {
        self.session.tick(&mut self.core)
    }

    pub fn restart(&mut self) {
        self.session.restart(&mut self.core);
    }

    pub fn set_brush_size(&mut self, size: i32) -> i32 {
        self.session.set_brush_size(size)
    }

    pub fn set_carry_lateral_velocity(&mut self, carry: bool) {
        let policy = if carry { LateralVelocity::Carry } else { LateralVelocity::Keep };
        self.core.set_lateral_velocity(policy);
    }

    // === Rendering ===

    /// Get pointer to hue array (row-major, `rows * cols` f32)
    pub fn hue_ptr(&self) -> *const f32 {
        self.core.hue_ptr()
    }

    pub fn hue_len(&self) -> usize {
        self.core.hue_len()
    }

    /// Refresh the ABGR pixel buffer and return a pointer to it
    pub fn extract_pixels(&mut self) -> *const u32 {
        self.core.extract_pixels()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
