//! Pixel storage: the raster grid, PNG/JPEG codecs and the per-frame source/output pair.

pub(crate) mod codec;
pub(crate) mod pixel_buffer;
pub(crate) mod raster;
