//! Grid -> ABGR pixels for a canvas `ImageData` copy
//!
//! Empty cells are opaque black; grains use their hue at fixed saturation
//! and full brightness.

use crate::domain::grain::EMPTY_HUE;

use super::SandCore;

pub(crate) const BG_COLOR: u32 = 0xFF00_0000;
pub(crate) const GRAIN_SATURATION: f32 = 0.8;
pub(crate) const GRAIN_BRIGHTNESS: f32 = 1.0;

pub(super) fn extract_pixels(core: &mut SandCore) -> *const u32 {
    let size = core.grid.size();
    if core.pixels.len() != size {
        core.pixels.resize(size, BG_COLOR);
    }

    for (pixel, &hue) in core.pixels.iter_mut().zip(core.grid.hue.iter()) {
        *pixel = if hue == EMPTY_HUE {
            BG_COLOR
        } else {
            hsb_to_abgr(hue, GRAIN_SATURATION, GRAIN_BRIGHTNESS)
        };
    }

    core.pixels.as_ptr()
}

/// HSB -> packed ABGR (little-endian bytes R, G, B, A), alpha always 255.
///
/// Hue wraps on its fractional part; channels round half up.
pub(crate) fn hsb_to_abgr(hue: f32, saturation: f32, brightness: f32) -> u32 {
    let to_byte = |v: f32| (v * 255.0 + 0.5) as u32;

    let (r, g, b) = if saturation == 0.0 {
        let v = to_byte(brightness);
        (v, v, v)
    } else {
        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        (to_byte(r), to_byte(g), to_byte(b))
    };

    0xFF00_0000 | (b << 16) | (g << 8) | r
}
