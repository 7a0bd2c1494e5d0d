//! Grain constants and the hue cursor
//!
//! A cell is a grain when its hue is non-zero. Hue doubles as the display
//! color sample, so the cursor never hands out an exact 0.

/// Hue of an empty cell.
pub const EMPTY_HUE: f32 = 0.0;

/// Returned by `state` for coordinates outside the grid.
pub const OUT_OF_BOUNDS: f32 = -1.0;

/// Velocity of a grain that just spawned or settled (and of every empty cell).
pub const REST_VELOCITY: u8 = 1;

/// Fall speed cap, in cells per step.
pub const MAX_VELOCITY: u8 = 10;

/// Hue step between two consecutively created grains.
pub const HUE_INCREMENT: f32 = 0.0001;

/// Canonical grid size used when nothing else is configured.
pub const DEFAULT_ROWS: u32 = 125;
pub const DEFAULT_COLS: u32 = 125;

/// Accelerate a falling grain by one cell per step, capped at `MAX_VELOCITY`.
#[inline]
pub fn accelerate(velocity: u8) -> u8 {
    velocity.saturating_add(1).min(MAX_VELOCITY)
}

/// Cycling hue source for new grains.
///
/// Starts at `HUE_INCREMENT` and wraps back to it once the value reaches 1.0,
/// so every emitted hue lies in `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueCursor {
    value: f32,
}

impl HueCursor {
    pub fn new() -> Self {
        Self { value: HUE_INCREMENT }
    }

    #[inline]
    pub fn peek(&self) -> f32 {
        self.value
    }

    /// Return the current hue and advance.
    #[inline]
    pub fn next_hue(&mut self) -> f32 {
        let hue = self.value;
        self.value += HUE_INCREMENT;
        if self.value >= 1.0 {
            self.value = HUE_INCREMENT;
        }
        hue
    }
}

impl Default for HueCursor {
    fn default() -> Self {
        Self::new()
    }
}
