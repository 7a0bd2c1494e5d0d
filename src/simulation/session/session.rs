//! Session - the driver-side state around one engine
//!
//! Mirrors what the host page needs to run the canvas: a brush, the pixel
//! scale used to map pointer positions onto cells, and a `running` flag that
//! goes up on every paint and drops once a step leaves the grid static.

use crate::domain::config::{clamp_brush_size, EngineConfig};
use crate::domain::error::EngineError;

use super::SandCore;

#[derive(Clone, Debug)]
pub struct Session {
    running: bool,
    brush_size: i32,
    cell_scale: u32,
}

impl Session {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            running: false,
            brush_size: clamp_brush_size(config.brush_size),
            cell_scale: config.cell_scale.max(1),
        }
    }

    pub fn running(&self) -> bool { self.running }

    pub fn brush_size(&self) -> i32 { self.brush_size }

    pub fn cell_scale(&self) -> u32 { self.cell_scale }

    /// Clamp into [1, 10] and return the size actually in effect
    pub fn set_brush_size(&mut self, requested: i32) -> i32 {
        self.brush_size = clamp_brush_size(requested);
        self.brush_size
    }

    /// Pointer pixels -> `(row, col)`; rows follow x, columns follow y.
    pub fn pointer_to_cell(&self, px: i32, py: i32) -> (i32, i32) {
        let scale = self.cell_scale as i32;
        (px / scale, py / scale)
    }

    /// Activate one cell; starts running when the cell is inside the grid
    pub fn activate(&mut self, core: &mut SandCore, row: i32, col: i32) -> bool {
        let activated = core.activate(row, col);
        if activated {
            self.running = true;
        }
        activated
    }

    pub fn activate_region(&mut self, core: &mut SandCore, row: i32, col: i32, size: i32) -> Result<(), EngineError> {
        core.activate_region(row, col, size)?;
        self.running = true;
        Ok(())
    }

    /// Drop grains under the brush and start running
    pub fn paint(&mut self, core: &mut SandCore, row: i32, col: i32) -> Result<(), EngineError> {
        self.activate_region(core, row, col, self.brush_size)
    }

    pub fn paint_at_pixel(&mut self, core: &mut SandCore, px: i32, py: i32) -> Result<(), EngineError> {
        let (row, col) = self.pointer_to_cell(px, py);
        self.paint(core, row, col)
    }

    /// One timer tick: step while running, stop once the grid is static.
    ///
    /// Returns whether a step ran (the caller should redraw).
    pub fn tick(&mut self, core: &mut SandCore) -> bool {
        let stepped = self.running;
        if stepped {
            core.step();
        }
        if core.is_static() {
            self.running = false;
        }
        stepped
    }

    pub fn restart(&mut self, core: &mut SandCore) {
        self.running = false;
        core.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_size_is_clamped_on_construction() {
        let config = EngineConfig { brush_size: 25, ..EngineConfig::default() };
        assert_eq!(Session::new(&config).brush_size(), 10);
    }

    #[test]
    fn set_brush_size_clamps_both_ends() {
        let mut session = Session::default();
        assert_eq!(session.set_brush_size(0), 1);
        assert_eq!(session.set_brush_size(11), 10);
        assert_eq!(session.set_brush_size(4), 4);
    }

    #[test]
    fn pointer_maps_through_cell_scale() {
        let session = Session::default();
        assert_eq!(session.pointer_to_cell(0, 0), (0, 0));
        assert_eq!(session.pointer_to_cell(4, 9), (0, 1));
        assert_eq!(session.pointer_to_cell(624, 10), (124, 2));
    }

    #[test]
    fn paint_starts_running_and_tick_stops_when_settled() {
        let mut core = SandCore::with_seed(5, 5, 1);
        let mut session = Session::default();
        assert!(!session.tick(&mut core));

        session.paint(&mut core, 2, 0).unwrap();
        assert!(session.running());

        let mut ticks = 0;
        while session.running() {
            assert!(session.tick(&mut core));
            ticks += 1;
            assert!(ticks < 50, "grain never settled");
        }
        assert!(core.state(2, 4) > 0.0);
        assert!(!session.tick(&mut core));
    }

    #[test]
    fn activate_starts_running_until_settled() {
        let mut core = SandCore::with_seed(5, 5, 1);
        let mut session = Session::default();
        assert!(session.activate(&mut core, 2, 0));
        assert!(session.running());

        assert!(session.tick(&mut core));
        assert_eq!(core.state(2, 0), 0.0);
        assert!(core.state(2, 1) > 0.0);

        let mut ticks = 1;
        while session.tick(&mut core) {
            ticks += 1;
            assert!(ticks < 50, "grain never settled");
        }
        assert!(core.is_static());
        assert!(core.state(2, 4) > 0.0);
    }

    #[test]
    fn activate_outside_grid_does_not_start() {
        let mut core = SandCore::with_seed(5, 5, 1);
        let mut session = Session::default();
        assert!(!session.activate(&mut core, 5, 0));
        assert!(!session.running());
        assert!(!session.tick(&mut core));
    }

    #[test]
    fn activate_region_starts_running_only_on_success() {
        let mut core = SandCore::with_seed(10, 10, 1);
        let mut session = Session::default();
        assert!(session.activate_region(&mut core, 5, 5, 0).is_err());
        assert!(!session.running());

        session.activate_region(&mut core, 5, 2, 2).unwrap();
        assert!(session.running());
        assert!(session.tick(&mut core));
        assert_eq!(core.count_occupied(), 4);
    }

    #[test]
    fn paint_at_pixel_uses_brush() {
        let mut core = SandCore::with_seed(20, 20, 3);
        let mut session = Session::default();
        session.set_brush_size(3);
        session.paint_at_pixel(&mut core, 50, 52).unwrap();
        assert_eq!(core.grain_count(), 9);
        for r in 9..=11 {
            for c in 9..=11 {
                assert!(core.state(r, c) > 0.0);
            }
        }
    }

    #[test]
    fn restart_clears_grid_and_stops() {
        let mut core = SandCore::with_seed(10, 10, 9);
        let mut session = Session::default();
        session.paint(&mut core, 5, 5).unwrap();
        session.restart(&mut core);
        assert!(!session.running());
        assert_eq!(core.count_occupied(), 0);
    }
}
