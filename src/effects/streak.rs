use crate::buffer::pixel_buffer::PixelBuffer;
use crate::color::ops::{Rgba8, blend_channel};
use crate::foundation::core::{Direction, MAXC};
use crate::foundation::math::{expand_u8, narrow_u16};
use crate::foundation::rng::GlitchRng;

/// Smear `streaks` random pixels horizontally.
///
/// Each streak starts at a random point and carries that pixel's color along the row, mixing
/// 75% carried color with 25% of each pixel it passes. A negative `length` runs to the image
/// edge; otherwise the walk covers `length` further pixels, clamped to the bounds.
pub fn streak(
    buf: &mut PixelBuffer,
    rng: &mut GlitchRng,
    streaks: u32,
    length: i32,
    direction: Direction,
) {
    let out = &mut buf.output;
    let (w, h) = (out.w(), out.h());
    if w == 0 || h == 0 {
        return;
    }

    for _ in 0..streaks {
        let mut x = rng.intn(i64::from(w)) as i32;
        let y = rng.intn(i64::from(h)) as i32;

        let (end, step) = match direction {
            Direction::Left if length < 0 => (0, -1),
            Direction::Left => (x.saturating_sub(length).max(0), -1),
            Direction::Right if length < 0 => (w - 1, 1),
            Direction::Right => (x.saturating_add(length).min(w - 1), 1),
        };

        let mut carried = out.at(x, y);
        loop {
            carried = streak_mix(carried, out.at(x, y));
            out.set(x, y, carried);
            if x == end {
                break;
            }
            x += step;
        }
    }
}

fn streak_mix(carried: Rgba8, px: Rgba8) -> Rgba8 {
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = narrow_u16(blend_channel(
            expand_u8(carried[i]),
            expand_u8(px[i]),
            MAXC / 4,
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/streak.rs"]
mod tests;
