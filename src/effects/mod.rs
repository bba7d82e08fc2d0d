//! The glitch effect library.
//!
//! Every effect is a function of `(buffer, parameters, rng)` that mutates the buffer's output in
//! place. [`EffectKind`] names an effect as it appears in an order string; [`Effect`] is one
//! invocation with its parameters resolved for a specific frame.

use std::fmt;
use std::sync::Arc;

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::buffer::raster::Raster;
use crate::color::ops::Rgba8;
use crate::foundation::core::{Channel, Direction};
use crate::foundation::error::GlitchResult;
use crate::foundation::rng::GlitchRng;

pub(crate) mod burst;
pub(crate) mod channel;
pub(crate) mod corrupt;
pub(crate) mod ghost;
pub(crate) mod lines;
pub(crate) mod noise;
pub(crate) mod overlay;
pub(crate) mod split;
pub(crate) mod streak;

/// Identifier of an effect in an order string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Horizontal color smears.
    Streak,
    /// Diagonal channel burst.
    Burst,
    /// Lab-space color noise.
    Noise,
    /// Monochrome gaussian grain.
    GaussianNoise,
    /// Cyclic R/G/B rotation.
    ShiftChannel,
    /// Offset JPEG ghost.
    Ghost,
    /// Same as [`EffectKind::Ghost`].
    GhostTint,
    /// Stacked translucent copies along a diagonal.
    GhostStretch,
    /// Single-channel boost.
    ColorBoost,
    /// Horizontal band displacement.
    Split,
    /// Vertical band displacement.
    VerticalSplit,
    /// Darkened rows.
    Scanlines,
    /// Thick jittered bands.
    BigLines,
    /// Thick bands copying one channel.
    CopyChannelBigLines,
    /// Scattered filled rectangles.
    RandomCorruptions,
    /// Stretched PNG overlay.
    OverlayImage,
}

impl EffectKind {
    /// Every kind, in token-table order.
    pub const ALL: [EffectKind; 16] = [
        EffectKind::Streak,
        EffectKind::Burst,
        EffectKind::ShiftChannel,
        EffectKind::Ghost,
        EffectKind::GhostStretch,
        EffectKind::GhostTint,
        EffectKind::ColorBoost,
        EffectKind::Split,
        EffectKind::VerticalSplit,
        EffectKind::Noise,
        EffectKind::GaussianNoise,
        EffectKind::Scanlines,
        EffectKind::BigLines,
        EffectKind::CopyChannelBigLines,
        EffectKind::RandomCorruptions,
        EffectKind::OverlayImage,
    ];

    /// The case-sensitive token naming this effect.
    pub fn token(self) -> &'static str {
        match self {
            EffectKind::Streak => "Streak",
            EffectKind::Burst => "Burst",
            EffectKind::Noise => "Noise",
            EffectKind::GaussianNoise => "GaussianNoise",
            EffectKind::ShiftChannel => "ShiftChannel",
            EffectKind::Ghost => "Ghost",
            EffectKind::GhostTint => "GhostTint",
            EffectKind::GhostStretch => "GhostStretch",
            EffectKind::ColorBoost => "ColorBoost",
            EffectKind::Split => "Split",
            EffectKind::VerticalSplit => "VerticalSplit",
            EffectKind::Scanlines => "Scanlines",
            EffectKind::BigLines => "BigLines",
            EffectKind::CopyChannelBigLines => "CopyChannelBigLines",
            EffectKind::RandomCorruptions => "RandomCorruptions",
            EffectKind::OverlayImage => "OverlayImage",
        }
    }

    /// Exact token match; `None` for anything unknown.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.token() == token)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One effect invocation with frame-resolved parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// See [`streak::streak`].
    Streak {
        /// Number of streaks.
        amount: u32,
        /// Walk length; negative runs to the edge.
        length: i32,
        /// Walk direction.
        direction: Direction,
    },
    /// See [`burst::burst`].
    Burst,
    /// See [`noise::noise`].
    Noise {
        /// Tint color, straight RGBA.
        color: Rgba8,
    },
    /// See [`noise::gaussian_noise`].
    GaussianNoise,
    /// See [`channel::shift_channel`].
    ShiftChannel {
        /// Rotation direction.
        direction: Direction,
    },
    /// See [`ghost::ghost`].
    Ghost,
    /// See [`ghost::ghost_tint`].
    GhostTint,
    /// See [`ghost::ghost_stretch`].
    GhostStretch,
    /// See [`channel::color_boost`].
    ColorBoost {
        /// Boosted channel.
        channel: Channel,
    },
    /// See [`split::split`].
    Split {
        /// Band height in rows.
        band: i32,
        /// Horizontal shift in pixels.
        shift: i32,
    },
    /// See [`split::vertical_split`].
    VerticalSplit {
        /// Band width in columns.
        band: i32,
        /// Vertical shift in pixels.
        shift: i32,
    },
    /// See [`lines::scanlines`].
    Scanlines,
    /// See [`lines::big_lines`].
    BigLines,
    /// See [`lines::copy_channel_big_lines`].
    CopyChannelBigLines,
    /// See [`corrupt::random_corruptions`].
    RandomCorruptions {
        /// Fill with the rotated source pixel instead of translucent green.
        shift_color: bool,
    },
    /// See [`overlay::overlay_image`].
    OverlayImage {
        /// Decoded overlay, shared across frames.
        overlay: Arc<Raster>,
    },
}

impl Effect {
    /// Kind of this invocation.
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Streak { .. } => EffectKind::Streak,
            Effect::Burst => EffectKind::Burst,
            Effect::Noise { .. } => EffectKind::Noise,
            Effect::GaussianNoise => EffectKind::GaussianNoise,
            Effect::ShiftChannel { .. } => EffectKind::ShiftChannel,
            Effect::Ghost => EffectKind::Ghost,
            Effect::GhostTint => EffectKind::GhostTint,
            Effect::GhostStretch => EffectKind::GhostStretch,
            Effect::ColorBoost { .. } => EffectKind::ColorBoost,
            Effect::Split { .. } => EffectKind::Split,
            Effect::VerticalSplit { .. } => EffectKind::VerticalSplit,
            Effect::Scanlines => EffectKind::Scanlines,
            Effect::BigLines => EffectKind::BigLines,
            Effect::CopyChannelBigLines => EffectKind::CopyChannelBigLines,
            Effect::RandomCorruptions { .. } => EffectKind::RandomCorruptions,
            Effect::OverlayImage { .. } => EffectKind::OverlayImage,
        }
    }

    /// Run the effect against `buf`, drawing from `rng`.
    pub fn apply(&self, buf: &mut PixelBuffer, rng: &mut GlitchRng) -> GlitchResult<()> {
        match self {
            Effect::Streak {
                amount,
                length,
                direction,
            } => streak::streak(buf, rng, *amount, *length, *direction),
            Effect::Burst => burst::burst(buf, rng),
            Effect::Noise { color } => noise::noise(buf, rng, *color),
            Effect::GaussianNoise => noise::gaussian_noise(buf, rng),
            Effect::ShiftChannel { direction } => channel::shift_channel(buf, *direction),
            Effect::Ghost => ghost::ghost(buf, rng)?,
            Effect::GhostTint => ghost::ghost_tint(buf, rng)?,
            Effect::GhostStretch => ghost::ghost_stretch(buf, rng),
            Effect::ColorBoost { channel } => channel::color_boost(buf, *channel),
            Effect::Split { band, shift } => split::split(buf, *band, *shift),
            Effect::VerticalSplit { band, shift } => split::vertical_split(buf, *band, *shift),
            Effect::Scanlines => lines::scanlines(buf),
            Effect::BigLines => lines::big_lines(buf, rng),
            Effect::CopyChannelBigLines => lines::copy_channel_big_lines(buf, rng),
            Effect::RandomCorruptions { shift_color } => {
                corrupt::random_corruptions(buf, rng, *shift_color)
            }
            Effect::OverlayImage { overlay } => overlay::overlay_image(buf, overlay)?,
        }
        Ok(())
    }
}

/// Wrap a coordinate back into `[0, extent)` with a single subtraction.
///
/// Values of `2 * extent` or more stay out of range and read as transparent.
pub(crate) fn wrap_once(v: i32, extent: i32) -> i32 {
    if v >= extent { v - extent } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mod.rs"]
mod tests;
