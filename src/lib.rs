//! Sandfall Engine - falling sand grid simulation in WASM
//!
//! Architecture:
//! - core/        - Macros shared by every module
//! - spatial/     - SoA grid storage
//! - domain/      - Grain constants, configuration, errors
//! - simulation/  - SandCore engine, session driver, JS facade

// Utils with macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod simulation;

// Compatibility re-exports
pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Sandfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{EngineConfig, LateralVelocity};
pub use domain::error::EngineError;
pub use simulation::{PerfStats, SandCore, SandSim, Session};

// Export grain constants for JS
#[wasm_bindgen]
pub fn max_velocity() -> u8 { domain::grain::MAX_VELOCITY }
#[wasm_bindgen]
pub fn hue_increment() -> f32 { domain::grain::HUE_INCREMENT }
#[wasm_bindgen]
pub fn default_rows() -> u32 { domain::grain::DEFAULT_ROWS }
#[wasm_bindgen]
pub fn default_cols() -> u32 { domain::grain::DEFAULT_COLS }
