//! Glitchcraft applies ordered, seeded "glitch" effects to raster images.
//!
//! The public API is pipeline-oriented:
//!
//! - Describe a run with a [`GlitchConfig`] (effect order plus parameters)
//! - Create a [`Glitcher`] from PNG or JPEG bytes
//! - Render a still with [`Glitcher::render_still`], or stream an animation into a
//!   [`FrameSink`] such as [`GifSink`] or [`PngSequenceSink`]
//!
//! Every frame is a pure function of the source, the configuration, the frame index and a seed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod color;
mod effects;
mod foundation;
mod pipeline;

/// Frame sinks for animations.
pub mod encode;

pub use crate::buffer::codec::{decode_image, encode_raster, load_png_file};
pub use crate::buffer::pixel_buffer::PixelBuffer;
pub use crate::buffer::raster::Raster;
pub use crate::color::ops::{Rgba8, parse_hex_color};
pub use crate::effects::{Effect, EffectKind};
pub use crate::foundation::core::{Channel, Direction, FrameIndex, JPEG_QUALITY, OutputFormat};
pub use crate::foundation::error::{GlitchError, GlitchResult};
pub use crate::foundation::rng::{GlitchRng, frame_seed, time_seed};
pub use crate::pipeline::config::{DEFAULT_ORDER, GlitchConfig};
pub use crate::pipeline::plan::{EffectPlan, parse_effect_order};
pub use crate::pipeline::render::Glitcher;
pub use crate::pipeline::rules::{
    BAND_SKIP_PERIOD, CORRUPTION_PERIOD, DriftState, FrameRules, RenderMode,
};

pub use crate::encode::gif::GifSink;
pub use crate::encode::png_seq::{PngSequenceSink, frame_file_name, sorted_frame_paths};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
