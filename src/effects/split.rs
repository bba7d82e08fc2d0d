//! Band displacement: alternate bands of the source are copied into the output, shifted along
//! the band and wrapped once around the image edge.

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::effects::wrap_once;

/// Horizontal bands of `band` rows; every second band is shifted left by `shift` pixels.
///
/// The first band is skipped. A band that would run past the bottom edge ends the effect.
pub fn split(buf: &mut PixelBuffer, band: i32, shift: i32) {
    if band <= 0 {
        return;
    }
    let (src, out) = buf.parts_mut();
    let (w, h) = (out.w(), out.h());

    let mut cursor = 0;
    let mut displace = false;
    while cursor < h {
        let next = cursor + band;
        if displace {
            if next > h {
                return;
            }
            for y in cursor..next {
                for x in 0..w {
                    out.set(x, y, src.at(wrap_once(x + shift, w), y));
                }
            }
        }
        cursor = next;
        displace = !displace;
    }
}

/// Column-wise twin of [`split`]: vertical bands of `band` columns shifted up by `shift`.
pub fn vertical_split(buf: &mut PixelBuffer, band: i32, shift: i32) {
    if band <= 0 {
        return;
    }
    let (src, out) = buf.parts_mut();
    let (w, h) = (out.w(), out.h());

    let mut cursor = 0;
    let mut displace = false;
    while cursor < w {
        let next = cursor + band;
        if displace {
            if next > w {
                return;
            }
            for x in cursor..next {
                for y in 0..h {
                    out.set(x, y, src.at(x, wrap_once(y + shift, h)));
                }
            }
        }
        cursor = next;
        displace = !displace;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/split.rs"]
mod tests;
