use crate::buffer::pixel_buffer::PixelBuffer;
use crate::buffer::raster::Raster;
use crate::color::ops::shift_channels;
use crate::foundation::core::{Channel, Direction, MAXC};
use crate::foundation::math::{expand_u8, mul_div_maxc, narrow_u16};

/// Rotate R/G/B of every output pixel.
pub fn shift_channel(buf: &mut PixelBuffer, direction: Direction) {
    buf.output
        .map_in_place(|px| shift_channels(px, direction));
}

/// Amplify one channel in proportion to how little red the pixel carries.
///
/// In 16-bit space, `boost = MAXC - a * r / MAXC` and the channel becomes
/// `c * (boost + a) / MAXC`, saturating. The factor always reads the red channel, whichever
/// channel is boosted.
pub fn color_boost(buf: &mut PixelBuffer, channel: Channel) {
    let i = channel.index();
    buf.output.map_in_place(|px| {
        let r = expand_u8(px[0]);
        let a = expand_u8(px[3]);
        let c = u64::from(expand_u8(px[i]));
        let boost = u64::from(MAXC - mul_div_maxc(a, r));
        let boosted = (c * (boost + u64::from(a)) / u64::from(MAXC)).min(u64::from(MAXC));
        let mut out = px;
        out[i] = narrow_u16(boosted as u32);
        out
    });
}

/// Copy a single channel of `src` at `from` into `dst` at `to`, keeping the other channels.
pub(crate) fn copy_channel(
    src: &Raster,
    dst: &mut Raster,
    from: (i32, i32),
    to: (i32, i32),
    channel: Channel,
) {
    let i = channel.index();
    let mut px = dst.at(to.0, to.1);
    px[i] = src.at(from.0, from.1)[i];
    dst.set(to.0, to.1, px);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/channel.rs"]
mod tests;
