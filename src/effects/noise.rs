use crate::buffer::pixel_buffer::PixelBuffer;
use crate::color::lab::blend_lab;
use crate::color::ops::{Rgba8, blend_channel};
use crate::foundation::core::MAXC;
use crate::foundation::math::expand_u8;
use crate::foundation::rng::GlitchRng;

/// Upper bound on how far a pixel moves toward its noise color.
pub const MAX_NOISE_BLEND: f64 = 0.1;

const GAUSSIAN_MEAN: f64 = 128.0;
const GAUSSIAN_STDDEV: f64 = 32.0;
const GAUSSIAN_OPACITY: f64 = 0.35;

/// Tint every pixel toward a random shade of `color`.
///
/// Per pixel, three draws scale the red, green and blue of `color` into a linear-RGB target and
/// a fourth picks the blend amount in `[0, MAX_NOISE_BLEND)`. The blend runs in Lab space; the
/// result is opaque and clamped to gamut.
pub fn noise(buf: &mut PixelBuffer, rng: &mut GlitchRng, color: Rgba8) {
    let tint = [
        f64::from(color[0]) / 255.0,
        f64::from(color[1]) / 255.0,
        f64::from(color[2]) / 255.0,
    ];
    buf.output.map_in_place(|px| {
        let base = straight_srgb(px);
        let target = [
            rng.float64() * tint[0],
            rng.float64() * tint[1],
            rng.float64() * tint[2],
        ];
        let t = rng.float64() * MAX_NOISE_BLEND;
        let [r, g, b] = blend_lab(base, target, t);
        [to_u8(r), to_u8(g), to_u8(b), 255]
    });
}

/// Monochrome gaussian grain at 35% opacity.
///
/// One sample per pixel in row-major order, `N(128, 32)` clamped to `0..=255`.
pub fn gaussian_noise(buf: &mut PixelBuffer, rng: &mut GlitchRng) {
    let opacity = (GAUSSIAN_OPACITY * f64::from(MAXC)).round() as u32;
    buf.output.map_in_place(|px| {
        let grain = (rng.norm_f64() * GAUSSIAN_STDDEV + GAUSSIAN_MEAN)
            .round()
            .clamp(0.0, 255.0) as u8;
        let layer = [grain, grain, grain, 255];
        let mut out = [0u8; 4];
        for i in 0..4 {
            let v = blend_channel(expand_u8(px[i]), expand_u8(layer[i]), opacity);
            out[i] = (v / 0x101).min(255) as u8;
        }
        out
    });
}

fn straight_srgb(px: Rgba8) -> [f64; 3] {
    if px[3] == 0 {
        return [0.0; 3];
    }
    let a = f64::from(px[3]);
    [
        (f64::from(px[0]) / a).min(1.0),
        (f64::from(px[1]) / a).min(1.0),
        (f64::from(px[2]) / a).min(1.0),
    ]
}

fn to_u8(v: f64) -> u8 {
    ((v.clamp(0.0, 1.0) * f64::from(MAXC) + 0.5) as u32 >> 8) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/noise.rs"]
mod tests;
