use thiserror::Error;

/// Failures surfaced by the engine.
///
/// Out-of-bounds coordinates are not errors: they are routine near the grid
/// edge and come back as sentinels (`false`, `-1.0`, `None`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("region size must be positive, got {size}")]
    InvalidArgument { size: i32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
