use super::super::*;

impl Grid {
    #[inline]
    pub fn is_empty_idx(&self, idx: usize) -> bool {
        *fast!(self.hue, [idx]) == EMPTY_HUE
    }

    /// Empty and inside the grid
    #[inline]
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        match self.index_of(row, col) {
            Some(idx) => self.is_empty_idx(idx),
            None => false,
        }
    }

    #[inline]
    pub fn get_hue(&self, row: i32, col: i32) -> Option<f32> {
        self.index_of(row, col).map(|idx| self.hue[idx])
    }

    /// Full scan, independent of any incremental counter
    pub fn count_occupied(&self) -> usize {
        self.hue.iter().filter(|&&h| h != EMPTY_HUE).count()
    }
}
