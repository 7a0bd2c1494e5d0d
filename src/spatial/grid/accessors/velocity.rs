use super::super::*;

impl Grid {
    #[inline]
    pub fn velocity_idx(&self, idx: usize) -> u8 {
        *fast!(self.velocity, [idx])
    }

    #[inline]
    pub fn get_velocity(&self, row: i32, col: i32) -> Option<u8> {
        self.index_of(row, col).map(|idx| self.velocity[idx])
    }
}
