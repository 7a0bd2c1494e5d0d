use super::super::*;

impl Grid {
    // === Get raw pointers for JS interop ===
    pub fn hue_ptr(&self) -> *const f32 {
        self.hue.as_ptr()
    }
}
