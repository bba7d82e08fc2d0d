use crate::buffer::pixel_buffer::PixelBuffer;
use crate::color::ops::{Rgba16, over16, random_channel, shift_channels};
use crate::effects::channel::copy_channel;
use crate::effects::wrap_once;
use crate::foundation::core::{Direction, MAXC};
use crate::foundation::rng::GlitchRng;

/// Rows darkened by [`scanlines`] repeat with this period.
pub const SCANLINE_PERIOD: usize = 3;

const SCANLINE_SHADE: Rgba16 = [0, 0, 0, 50 * 0x101];

/// Darken every third row with translucent black.
pub fn scanlines(buf: &mut PixelBuffer) {
    let out = &mut buf.output;
    for y in (0..out.h()).step_by(SCANLINE_PERIOD) {
        for x in 0..out.w() {
            out.set16(x, y, over16(out.at16(x, y), SCANLINE_SHADE, MAXC));
        }
    }
}

struct BandGeometry {
    height: i32,
    width: i32,
}

impl BandGeometry {
    /// Band height up to 24% of the image, horizontal shift up to 9% of it.
    fn draw(w: i32, h: i32, rng: &mut GlitchRng) -> Self {
        Self {
            height: h * rng.intn(25) as i32 / 100,
            width: w * rng.intn(10) as i32 / 100,
        }
    }
}

/// Thick displaced bands with per-pixel jitter.
///
/// Bands alternate between skipped and displaced. A displaced band is `height + rand(200)` rows
/// tall; each pixel lands `width + rand(30)` columns to the right, wrapped once. Every third band
/// also rotates its channels left. The effect ends at the first band that would reach the bottom
/// edge.
pub fn big_lines(buf: &mut PixelBuffer, rng: &mut GlitchRng) {
    let (src, out) = buf.parts_mut();
    let (w, h) = (out.w(), out.h());
    let geometry = BandGeometry::draw(w, h, rng);

    let mut cursor = 0;
    let mut displace = false;
    let mut band = 0u32;
    while cursor < h {
        if displace {
            let next = cursor + geometry.height + rng.intn(200) as i32;
            if next >= h {
                return;
            }
            let rotate = band % 3 == 0;
            for y in cursor..=next {
                for x in 0..w {
                    let jitter = rng.intn(30) as i32;
                    let tx = wrap_once(x + geometry.width + jitter, w);
                    let mut px = src.at(x, y);
                    if rotate {
                        px = shift_channels(px, Direction::Left);
                    }
                    out.set(tx, y, px);
                }
            }
            cursor = next;
        } else {
            cursor += geometry.height;
        }
        displace = !displace;
        band += 1;
    }
}

/// Like [`big_lines`], but displaced bands copy a single random channel.
///
/// A channel is drawn on every band, skipped or not. Skipped bands advance by
/// `height + skip_jitter`, where `skip_jitter` is drawn once up front.
pub fn copy_channel_big_lines(buf: &mut PixelBuffer, rng: &mut GlitchRng) {
    let (src, out) = buf.parts_mut();
    let (w, h) = (out.w(), out.h());
    let geometry = BandGeometry::draw(w, h, rng);
    let skip_jitter = rng.intn(100) as i32;

    let mut cursor = 0;
    let mut displace = false;
    while cursor < h {
        let channel = random_channel(rng);
        if displace {
            let next = cursor + geometry.height + rng.intn(200) as i32;
            let jitter = rng.intn(30) as i32;
            if next >= h {
                return;
            }
            for y in cursor..=next {
                for x in 0..w {
                    let tx = wrap_once(x + geometry.width + jitter, w);
                    copy_channel(src, out, (x, y), (tx, y), channel);
                }
            }
            cursor = next;
        } else {
            cursor += geometry.height + skip_jitter;
        }
        displace = !displace;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/lines.rs"]
mod tests;
