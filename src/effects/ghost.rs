use crate::buffer::codec::jpeg_roundtrip;
use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::error::GlitchResult;
use crate::foundation::math::expand_u8;
use crate::foundation::rng::GlitchRng;

/// Ghost layers are sampled this far down and to the right of the pixel they cover.
pub const GHOST_OFFSET: (i32, i32) = (5, 5);

const MAX_GHOST_QUALITY: i64 = 50;

/// Overlay a low-quality JPEG copy of the output, shifted by [`GHOST_OFFSET`].
///
/// Draws: JPEG quality in `1..50`, then the mask alpha in `0..255`.
pub fn ghost(buf: &mut PixelBuffer, rng: &mut GlitchRng) -> GlitchResult<()> {
    let quality = rng.intn(MAX_GHOST_QUALITY).max(1) as u8;
    let layer = jpeg_roundtrip(&buf.output, quality)?;
    let alpha = rng.intn(255) as u8;
    buf.output.draw_over(&layer, GHOST_OFFSET, expand_u8(alpha));
    Ok(())
}

/// Identical to [`ghost`].
pub fn ghost_tint(buf: &mut PixelBuffer, rng: &mut GlitchRng) -> GlitchResult<()> {
    ghost(buf, rng)
}

/// Stack translucent copies of the output along a random diagonal.
///
/// Copy `j` is offset by `j * (dx, dy)` and drawn over a fresh snapshot of the output, so each
/// layer includes the ones before it.
pub fn ghost_stretch(buf: &mut PixelBuffer, rng: &mut GlitchRng) {
    let (w, h) = (buf.output.w(), buf.output.h());
    let ghosts = rng.intn(i64::from(h / 10)) as i32 + 1;
    let step_w = w / ghosts;
    let step_h = h / ghosts;
    let dx = rng.intn(i64::from(step_w)) as i32 - step_w * 2;
    let dy = rng.intn(i64::from(step_h)) as i32 - step_h * 2;
    let alpha = expand_u8(rng.intn(255 / 2) as u8);

    for j in 1..ghosts {
        let snapshot = buf.output.clone();
        buf.output.draw_over(&snapshot, (dx * j, dy * j), alpha);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/ghost.rs"]
mod tests;
