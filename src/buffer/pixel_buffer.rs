use std::io::Write;

use crate::buffer::codec::{decode_image, encode_raster};
use crate::buffer::raster::Raster;
use crate::foundation::core::OutputFormat;
use crate::foundation::error::GlitchResult;

/// One frame's worth of pixels: a read-only source and the output every effect mutates.
///
/// Both grids always share the same extent; no effect resizes the buffer.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    source: Raster,
    /// The grid effects write into.
    pub output: Raster,
    format: OutputFormat,
}

impl PixelBuffer {
    /// Decode PNG or JPEG bytes. The output starts as a copy of the source.
    pub fn load(bytes: &[u8]) -> GlitchResult<Self> {
        Ok(Self::from_source(decode_image(bytes)?))
    }

    /// Build a buffer around an already decoded source.
    pub fn from_source(source: Raster) -> Self {
        let output = source.clone();
        Self {
            source,
            output,
            format: OutputFormat::Png,
        }
    }

    /// Set the container used by [`PixelBuffer::encode`].
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Output container hint.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The untouched source grid.
    pub fn source(&self) -> &Raster {
        &self.source
    }

    /// Split borrow: read the source while mutating the output.
    pub fn parts_mut(&mut self) -> (&Raster, &mut Raster) {
        (&self.source, &mut self.output)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.source.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.source.height()
    }

    /// Full-bounds blit of the source into the output.
    pub fn copy_source_to_output(&mut self) -> GlitchResult<()> {
        self.output.copy_from(&self.source)
    }

    /// Serialize the output with the buffer's format.
    pub fn encode<W: Write>(&self, writer: W) -> GlitchResult<()> {
        encode_raster(&self.output, writer, self.format)
    }

    /// Consume the buffer, keeping only the output grid.
    pub fn into_output(self) -> Raster {
        self.output
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel_buffer.rs"]
mod tests;
