use std::io::{Cursor, Write};
use std::path::Path;

use anyhow::Context;
use image::ImageEncoder as _;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageFormat};

use crate::buffer::raster::Raster;
use crate::foundation::core::{JPEG_QUALITY, OutputFormat};
use crate::foundation::error::{GlitchError, GlitchResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// Decode PNG or JPEG bytes (detected by content) into a premultiplied raster.
pub fn decode_image(bytes: &[u8]) -> GlitchResult<Raster> {
    let format = image::guess_format(bytes)
        .map_err(|e| GlitchError::decode(format!("unrecognized image content: {e}")))?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(GlitchError::decode(format!(
            "unsupported image type {format:?}, expected png or jpeg"
        )));
    }
    decode_with_format(bytes, format).map_err(|e| GlitchError::decode(e.to_string()))
}

/// Load a PNG file from disk, as used for overlays.
pub fn load_png_file(path: &Path) -> GlitchResult<Raster> {
    let bytes = std::fs::read(path).map_err(|e| {
        GlitchError::overlay_load(format!("could not open '{}': {e}", path.display()))
    })?;
    decode_with_format(&bytes, ImageFormat::Png).map_err(|e| {
        GlitchError::overlay_load(format!("could not decode '{}': {e}", path.display()))
    })
}

fn decode_with_format(bytes: &[u8], format: ImageFormat) -> anyhow::Result<Raster> {
    let dyn_img =
        image::load_from_memory_with_format(bytes, format).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    Ok(Raster::from_premul(width, height, data)?)
}

/// Serialize a raster. PNG is lossless; JPEG drops alpha and uses [`JPEG_QUALITY`].
///
/// The writer is flushed before returning, so buffered write failures surface here.
pub fn encode_raster<W: Write>(
    raster: &Raster,
    mut writer: W,
    format: OutputFormat,
) -> GlitchResult<()> {
    match format {
        OutputFormat::Png => encode_png(raster, &mut writer)?,
        OutputFormat::Jpeg => encode_jpeg(raster, &mut writer, JPEG_QUALITY)?,
    }
    writer
        .flush()
        .map_err(|e| GlitchError::encode(format!("flush encoded image: {e}")))
}

/// Straight-alpha RGBA8 bytes suitable for encoders and `image::RgbaImage`.
pub fn to_straight_rgba(raster: &Raster) -> Vec<u8> {
    let mut straight = raster.as_bytes().to_vec();
    unpremultiply_rgba8_in_place(&mut straight);
    straight
}

fn encode_png<W: Write>(raster: &Raster, writer: W) -> GlitchResult<()> {
    let straight = to_straight_rgba(raster);
    PngEncoder::new(writer)
        .write_image(
            &straight,
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| GlitchError::encode(format!("png: {e}")))
}

fn encode_jpeg<W: Write>(raster: &Raster, mut writer: W, quality: u8) -> GlitchResult<()> {
    // Premultiplied color is used as-is, which flattens translucent pixels over black.
    let rgb: Vec<u8> = raster
        .as_bytes()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100))
        .encode(&rgb, raster.width(), raster.height(), ExtendedColorType::Rgb8)
        .map_err(|e| GlitchError::encode(format!("jpeg: {e}")))
}

/// Push a raster through a lossy JPEG encode/decode cycle at `quality`.
pub fn jpeg_roundtrip(raster: &Raster, quality: u8) -> GlitchResult<Raster> {
    let mut buf = Vec::new();
    encode_jpeg(raster, Cursor::new(&mut buf), quality)?;
    decode_with_format(&buf, ImageFormat::Jpeg).map_err(|e| GlitchError::decode(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/codec.rs"]
mod tests;
