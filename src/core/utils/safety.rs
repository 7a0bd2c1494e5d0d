//! Zero-cost indexing macro for the hot scan loop
//!
//! Debug builds keep normal bounds-checked indexing so a bad index panics
//! with a useful message. Release builds use `get_unchecked`.
//!
//! Usage:
//! ```rust
//! use sandfall_engine::fast;
//!
//! let hue = vec![0.0f32, 0.25, 0.5];
//! // Read: fast!(slice, [index])
//! assert_eq!(*fast!(hue, [1]), 0.25);
//!
//! let mut velocity = vec![1u8; 3];
//! // Write: fast!(slice, [index] = value)
//! fast!(velocity, [2] = 7);
//! assert_eq!(velocity[2], 7);
//! ```

/// Bounds-checked in debug, unchecked in release.
///
/// Callers must guarantee the index is in range; every call site in the
/// engine derives it from `Grid::index` on validated coordinates.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
