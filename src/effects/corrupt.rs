use crate::buffer::pixel_buffer::PixelBuffer;
use crate::color::ops::{Rgba8, shift_channels};
use crate::foundation::core::Direction;
use crate::foundation::rng::GlitchRng;

/// Translucent green, premultiplied.
pub const CORRUPTION_COLOR: Rgba8 = [0, 200, 0, 100];

/// Scatter small replaced rectangles over the output.
///
/// Runs `floor(w * h * 0.03) + 1` times. Each rectangle is up to 1% of the image on each side,
/// anchored at a random pixel, and filled with [`CORRUPTION_COLOR`] or, with `shift_color`, the
/// left-rotated source pixel at its anchor.
pub fn random_corruptions(buf: &mut PixelBuffer, rng: &mut GlitchRng, shift_color: bool) {
    let (src, out) = buf.parts_mut();
    let (w, h) = (out.w(), out.h());
    let iterations = (f64::from(h) * f64::from(w) * 0.03) as i64;
    let max_h = (f64::from(h) * 0.01) as i64;
    let max_w = (f64::from(w) * 0.01) as i64;

    for _ in 0..=iterations {
        let rh = rng.intn(max_h) as i32;
        let rw = rng.intn(max_w) as i32;
        let x = rng.intn(i64::from(w)) as i32;
        let y = rng.intn(i64::from(h)) as i32;
        let fill = if shift_color {
            shift_channels(src.at(x, y), Direction::Left)
        } else {
            CORRUPTION_COLOR
        };
        out.fill_rect(x, y, x + rw, y + rh, fill);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/corrupt.rs"]
mod tests;
