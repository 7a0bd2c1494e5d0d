use super::super::*;

impl Grid {
    // === Place a fresh grain ===
    // New grains start at rest, like the empty cell they replace.
    pub fn spawn_grain(&mut self, idx: usize, hue: f32) {
        debug_assert!(hue > EMPTY_HUE, "spawn_grain: hue {} would read as empty", hue);
        self.hue[idx] = hue;
        self.velocity[idx] = REST_VELOCITY;
    }

    // === Clear single cell ===
    #[inline]
    pub fn clear_cell(&mut self, idx: usize) {
        fast!(self.hue, [idx] = EMPTY_HUE);
        fast!(self.velocity, [idx] = REST_VELOCITY);
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.hue.fill(EMPTY_HUE);
        self.velocity.fill(REST_VELOCITY);
    }
}
