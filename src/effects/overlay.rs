use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::buffer::raster::Raster;
use crate::foundation::core::MAXC;
use crate::foundation::error::{GlitchError, GlitchResult};

/// Stretch `overlay` to the output extent and composite it on top.
pub fn overlay_image(buf: &mut PixelBuffer, overlay: &Raster) -> GlitchResult<()> {
    let (w, h) = (buf.width(), buf.height());
    if w == 0 || h == 0 {
        return Ok(());
    }
    let scaled = scale_to(overlay, w, h)?;
    buf.output.draw_over(&scaled, (0, 0), MAXC);
    Ok(())
}

/// Bilinear resize, interpolating premultiplied samples directly.
fn scale_to(raster: &Raster, width: u32, height: u32) -> GlitchResult<Raster> {
    if raster.width() == width && raster.height() == height {
        return Ok(raster.clone());
    }
    let img = RgbaImage::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec())
        .ok_or_else(|| GlitchError::overlay_load("overlay buffer does not match its extent"))?;
    let resized = imageops::resize(&img, width, height, FilterType::Triangle);
    Raster::from_premul(width, height, resized.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/overlay.rs"]
mod tests;
