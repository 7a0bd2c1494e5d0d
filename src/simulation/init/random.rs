use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the lateral tie-break for grains that cannot fall straight.
///
/// One generator per engine, seeded once. The direction carries no physical
/// meaning; it only keeps piles from leaning to one side.
pub(crate) struct LateralRng {
    inner: SmallRng,
}

impl LateralRng {
    pub(crate) fn from_entropy() -> Self {
        Self { inner: SmallRng::from_entropy() }
    }

    pub(crate) fn seeded(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed) }
    }

    /// -1 or +1 with equal probability
    #[inline]
    pub(crate) fn lateral_dir(&mut self) -> i32 {
        if self.inner.gen::<bool>() { 1 } else { -1 }
    }
}
