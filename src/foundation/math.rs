use crate::foundation::core::MAXC;

/// Widen an 8-bit channel to 16 bits (`0xab -> 0xabab`).
pub(crate) fn expand_u8(v: u8) -> u32 {
    u32::from(v) * 0x101
}

/// Narrow a 16-bit channel to 8 bits by dropping the low byte.
pub(crate) fn narrow_u16(v: u32) -> u8 {
    (v.min(MAXC) >> 8) as u8
}

/// `x * y / MAXC` on 16-bit channel values.
pub(crate) fn mul_div_maxc(x: u32, y: u32) -> u32 {
    ((u64::from(x) * u64::from(y)) / u64::from(MAXC)) as u32
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
