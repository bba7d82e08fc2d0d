use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::buffer::codec::to_straight_rgba;
use crate::buffer::raster::Raster;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GlitchError, GlitchResult};

/// Encoder output held in memory until the animation is complete.
#[derive(Clone, Default)]
struct EncodedBytes(Arc<Mutex<Vec<u8>>>);

impl EncodedBytes {
    fn take(&self) -> io::Result<Vec<u8>> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| io::Error::other("GIF buffer lock poisoned"))?;
        Ok(std::mem::take(&mut *bytes))
    }
}

impl Write for EncodedBytes {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("GIF buffer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Looping animated GIF sink.
///
/// Frames that cannot be converted or encoded are logged and dropped; the rest of the animation
/// is still written. Nothing reaches the writer until [`FrameSink::end`], which writes the whole
/// file including the trailer, flushes, and reports any I/O failure.
pub struct GifSink<W: Write + Send> {
    writer: Option<W>,
    bytes: EncodedBytes,
    encoder: Option<GifEncoder<EncodedBytes>>,
    cfg: Option<SinkConfig>,
    written: u32,
    dropped: u32,
}

impl<W: Write + Send> GifSink<W> {
    /// Create a sink writing into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            bytes: EncodedBytes::default(),
            encoder: None,
            cfg: None,
            written: 0,
            dropped: 0,
        }
    }

    /// Frames encoded so far.
    pub fn written(&self) -> u32 {
        self.written
    }

    /// Frames skipped because they failed to convert or encode.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    fn drop_frame(&mut self, idx: FrameIndex, reason: impl std::fmt::Display) {
        tracing::warn!(frame = idx.0, %reason, "dropping animation frame");
        self.dropped += 1;
    }
}

impl<W: Write + Send> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> GlitchResult<()> {
        if self.cfg.is_some() || self.writer.is_none() {
            return Err(GlitchError::encode("GIF sink can only be started once"));
        }
        let mut encoder = GifEncoder::new(self.bytes.clone());
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| GlitchError::encode(format!("set GIF repeat: {e}")))?;
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Raster) -> GlitchResult<()> {
        let Some(cfg) = self.cfg.clone() else {
            return Err(GlitchError::encode("GIF sink received a frame before begin"));
        };
        if (frame.width(), frame.height()) != (cfg.width, cfg.height) {
            self.drop_frame(
                idx,
                format!(
                    "extent {}x{} does not match {}x{}",
                    frame.width(),
                    frame.height(),
                    cfg.width,
                    cfg.height
                ),
            );
            return Ok(());
        }
        let Some(img) = RgbaImage::from_raw(frame.width(), frame.height(), to_straight_rgba(frame))
        else {
            self.drop_frame(idx, "pixel buffer does not match its extent");
            return Ok(());
        };

        let delay = Delay::from_numer_denom_ms(u32::from(cfg.delay_cs) * 10, 1);
        let result = match self.encoder.as_mut() {
            Some(encoder) => encoder.encode_frame(Frame::from_parts(img, 0, 0, delay)),
            None => return Err(GlitchError::encode("GIF sink already ended")),
        };
        match result {
            Ok(()) => self.written += 1,
            Err(e) => self.drop_frame(idx, e),
        }
        Ok(())
    }

    fn end(&mut self) -> GlitchResult<()> {
        let Some(encoder) = self.encoder.take() else {
            return Err(GlitchError::encode("GIF sink ended before begin or ended twice"));
        };
        // The trailer is emitted when the encoder drops.
        drop(encoder);
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| GlitchError::encode("GIF sink has no writer"))?;
        let bytes = self
            .bytes
            .take()
            .map_err(|e| GlitchError::encode(format!("collect GIF bytes: {e}")))?;
        writer
            .write_all(&bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| GlitchError::encode(format!("write GIF: {e}")))?;
        tracing::info!(
            written = self.written,
            dropped = self.dropped,
            "finished animated GIF"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
