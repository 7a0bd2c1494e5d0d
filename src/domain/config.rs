//! Engine configuration
//!
//! Loaded from a JSON document handed over by the host page. Every field is
//! optional; missing fields fall back to the canonical 125x125 setup.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::grain::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::grid::dimensions_fit;

pub const MIN_BRUSH_SIZE: i32 = 1;
pub const MAX_BRUSH_SIZE: i32 = 10;
pub const DEFAULT_CELL_SCALE: u32 = 5;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 18;

/// What happens to a grain's velocity when it slides sideways instead of falling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateralVelocity {
    /// Only the hue moves. The landing cell keeps its own velocity, which is
    /// the rest velocity for any empty cell.
    #[default]
    Keep,
    /// The grain's accumulated velocity moves with it.
    Carry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub rows: u32,
    pub cols: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub lateral_velocity: LateralVelocity,
    pub brush_size: i32,
    pub cell_scale: u32,
    pub tick_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            lateral_velocity: LateralVelocity::Keep,
            brush_size: MIN_BRUSH_SIZE,
            cell_scale: DEFAULT_CELL_SCALE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !dimensions_fit(self.rows, self.cols) {
            return Err(EngineError::InvalidConfig(format!(
                "grid {}x{} is too large",
                self.rows, self.cols
            )));
        }
        if self.cell_scale == 0 {
            return Err(EngineError::InvalidConfig("cellScale must be positive".to_string()));
        }
        Ok(())
    }
}

/// Clamp a user-requested brush size into the supported range.
#[inline]
pub fn clamp_brush_size(requested: i32) -> i32 {
    requested.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}
