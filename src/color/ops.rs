use crate::foundation::core::{Channel, Direction, MAXC};
use crate::foundation::error::{GlitchError, GlitchResult};
use crate::foundation::math::mul_div_maxc;
use crate::foundation::rng::GlitchRng;

/// Premultiplied RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// RGBA pixel widened to 16-bit channels (`0..=MAXC`), premultiplied.
pub type Rgba16 = [u32; 4];

/// Parse `#RRGGBB` or `#RGB` into an opaque color.
///
/// The short form expands each nibble by 17 (`#0f0` is `(0, 255, 0)`).
pub fn parse_hex_color(s: &str) -> GlitchResult<Rgba8> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| GlitchError::format(format!("color '{s}' must start with '#'")))?;

    let nibble = |c: u8| -> GlitchResult<u8> {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| GlitchError::format(format!("color '{s}' has a non-hex digit")))
    };

    let bytes = digits.as_bytes();
    match s.len() {
        7 => {
            let mut out = [0u8, 0, 0, 255];
            for (i, pair) in bytes.chunks_exact(2).enumerate() {
                out[i] = nibble(pair[0])? << 4 | nibble(pair[1])?;
            }
            Ok(out)
        }
        4 => {
            let mut out = [0u8, 0, 0, 255];
            for (i, &c) in bytes.iter().enumerate() {
                out[i] = nibble(c)? * 17;
            }
            Ok(out)
        }
        n => Err(GlitchError::format(format!(
            "color '{s}' has length {n}, must be 7 or 4"
        ))),
    }
}

/// Fixed-point blend of two 16-bit channel values.
///
/// `weight` is the share of `b` in `0..=MAXC`; the result is rounded.
pub fn blend_channel(a: u32, b: u32, weight: u32) -> u32 {
    let w2 = u64::from(weight.min(MAXC));
    let w1 = u64::from(MAXC) - w2;
    let num = u64::from(a) * w1 + u64::from(b) * w2;
    ((num + u64::from(MAXC) / 2) / u64::from(MAXC)) as u32
}

/// Porter-Duff source-over through a uniform mask, in premultiplied 16-bit space.
///
/// `out = dst * (1 - src.a * mask) + src * mask`, saturating at `MAXC`.
pub fn over16(dst: Rgba16, src: Rgba16, mask: u32) -> Rgba16 {
    let mask = mask.min(MAXC);
    let inv = MAXC - mul_div_maxc(src[3], mask);
    let mut out = [0u32; 4];
    for i in 0..4 {
        let num = u64::from(dst[i]) * u64::from(inv) + u64::from(src[i]) * u64::from(mask);
        out[i] = ((num / u64::from(MAXC)) as u32).min(MAXC);
    }
    out
}

/// Cyclic R/G/B permutation; alpha is untouched.
///
/// `Right` maps `(r,g,b)` to `(b,r,g)` and `Left` maps it to `(g,b,r)`, so the two directions
/// undo each other.
pub fn shift_channels(px: Rgba8, direction: Direction) -> Rgba8 {
    let [r, g, b, a] = px;
    match direction {
        Direction::Right => [b, r, g, a],
        Direction::Left => [g, b, r, a],
    }
}

/// Pick a color channel from a single uniform draw: red, green and blue a third each.
pub fn random_channel(rng: &mut GlitchRng) -> Channel {
    let r = rng.float32();
    if r < 0.33 {
        Channel::Red
    } else if r < 0.66 {
        Channel::Green
    } else {
        Channel::Blue
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/ops.rs"]
mod tests;
