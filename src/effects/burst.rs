use crate::buffer::pixel_buffer::PixelBuffer;
use crate::color::ops::over16;
use crate::foundation::core::MAXC;
use crate::foundation::rng::GlitchRng;

const MIN_OFFSET: i32 = 25;

/// Diagonal channel burst.
///
/// Every output pixel is composited over a destination assembled from its four diagonal
/// neighbours at distance `offset`: red from bottom-right, green from bottom-left, blue from
/// top-right, alpha from top-left. Rows are processed in place, so later pixels see earlier
/// results. Neighbours outside the image read as transparent.
pub fn burst(buf: &mut PixelBuffer, rng: &mut GlitchRng) {
    let out = &mut buf.output;
    let (w, h) = (out.w(), out.h());
    let offset = rng.intn(i64::from(h / 10)) as i32 + MIN_OFFSET;
    let alpha = rng.intn(i64::from(MAXC)) as u32;

    for y in 0..h {
        for x in 0..w {
            let src = out.at16(x, y);
            let dst = [
                out.at16(x + offset, y + offset)[0],
                out.at16(x - offset, y + offset)[1],
                out.at16(x + offset, y - offset)[2],
                out.at16(x - offset, y - offset)[3],
            ];
            out.set16(x, y, over16(dst, src, alpha));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/burst.rs"]
mod tests;
