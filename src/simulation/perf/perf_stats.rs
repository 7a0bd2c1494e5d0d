use wasm_bindgen::prelude::*;

/// Snapshot of the most recent step. All zeros while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) cells_scanned: u32,
    pub(super) grains_checked: u32,
    pub(super) straight_falls: u32,
    pub(super) lateral_moves: u32,
    pub(super) blocked: u32,
    pub(super) grain_count: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    /// Grains that changed cell during the step
    pub fn moved(&self) -> u32 {
        self.straight_falls + self.lateral_moves
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_scanned(&self) -> u32 { self.cells_scanned }
    #[wasm_bindgen(getter)]
    pub fn grains_checked(&self) -> u32 { self.grains_checked }
    #[wasm_bindgen(getter)]
    pub fn straight_falls(&self) -> u32 { self.straight_falls }
    #[wasm_bindgen(getter)]
    pub fn lateral_moves(&self) -> u32 { self.lateral_moves }
    #[wasm_bindgen(getter)]
    pub fn blocked(&self) -> u32 { self.blocked }
    #[wasm_bindgen(getter)]
    pub fn grain_count(&self) -> u32 { self.grain_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
