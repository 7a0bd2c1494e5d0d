use super::*;
use crate::domain::grain::accelerate;

impl Grid {
    /// Straight fall from `src` to `dst`: hue and velocity travel together,
    /// the grain gains one unit of speed, the origin goes back to rest.
    ///
    /// Caller guarantees `src` holds a grain and `dst` is empty.
    #[inline]
    pub fn fall_grain(&mut self, src: usize, dst: usize) {
        debug_assert!(!self.is_empty_idx(src) && self.is_empty_idx(dst));
        let hue = *fast!(self.hue, [src]);
        let velocity = *fast!(self.velocity, [src]);
        fast!(self.hue, [dst] = hue);
        fast!(self.velocity, [dst] = accelerate(velocity));
        self.clear_cell(src);
    }

    /// Sideways settle from `src` to `dst`.
    ///
    /// Only the hue is moved unless `carry_velocity` is set; the landing cell
    /// otherwise keeps its own (rest) velocity.
    #[inline]
    pub fn slide_grain(&mut self, src: usize, dst: usize, carry_velocity: bool) {
        debug_assert!(!self.is_empty_idx(src) && self.is_empty_idx(dst));
        let hue = *fast!(self.hue, [src]);
        fast!(self.hue, [dst] = hue);
        if carry_velocity {
            let velocity = *fast!(self.velocity, [src]);
            fast!(self.velocity, [dst] = velocity);
        }
        self.clear_cell(src);
    }
}
