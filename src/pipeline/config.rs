use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Channel, OutputFormat};
use crate::foundation::error::{GlitchError, GlitchResult};

/// Effect order used when none is configured.
pub const DEFAULT_ORDER: &str =
    "Streak,Burst,ShiftChannel,Ghost,GhostStretch,ColorBoost,Split,VerticalSplit,Noise";

/// Immutable run configuration.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlitchConfig {
    /// Comma-separated effect tokens, applied in order.
    pub order: String,
    /// Number of streaks.
    pub streak_amount: u32,
    /// Streak walk length; negative runs to the edge.
    pub streak_width: i32,
    /// Streak toward the left instead of the right.
    pub streak_left: bool,
    /// `#RRGGBB` or `#RGB` tint for `Noise`.
    pub noise_color: String,
    /// Rotate channels left instead of right.
    pub shift_channel_left: bool,
    /// Channel amplified by `ColorBoost`.
    pub color_boost: Channel,
    /// `Split` band height in rows.
    pub split_width: i32,
    /// `Split` horizontal shift in pixels.
    pub split_length: i32,
    /// `VerticalSplit` band width in columns.
    pub vertical_split_width: i32,
    /// `VerticalSplit` vertical shift in pixels.
    pub vertical_split_length: i32,
    /// PNG composited by `OverlayImage`.
    pub overlay_image: Option<PathBuf>,
    /// In animations, `OverlayImage` fires on frames that are multiples of this.
    pub overlay_every_nth_frame: u64,
    /// Fill corruptions with the rotated source pixel instead of translucent green.
    pub corruption_shift_color: bool,
    /// Frames rendered in animation mode.
    pub gif_frames: u32,
    /// Per-frame delay in hundredths of a second.
    pub gif_delay: u16,
    /// Container for still output.
    pub format: OutputFormat,
    /// Fixed run seed; wall-clock time when unset.
    pub seed: Option<u64>,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER.to_string(),
            streak_amount: 10_000,
            streak_width: 3,
            streak_left: false,
            noise_color: "#c0ffee".to_string(),
            shift_channel_left: false,
            color_boost: Channel::Red,
            split_width: 3,
            split_length: 50,
            vertical_split_width: 3,
            vertical_split_length: 50,
            overlay_image: None,
            overlay_every_nth_frame: 3,
            corruption_shift_color: false,
            gif_frames: 10,
            gif_delay: 20,
            format: OutputFormat::Png,
            seed: None,
        }
    }
}

impl GlitchConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GlitchResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GlitchError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GlitchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GlitchError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check numeric ranges. Colors and the overlay are resolved when the plan is built.
    pub fn validate(&self) -> GlitchResult<()> {
        if self.split_width <= 0 {
            return Err(GlitchError::validation("split_width must be > 0"));
        }
        if self.vertical_split_width <= 0 {
            return Err(GlitchError::validation("vertical_split_width must be > 0"));
        }
        if self.overlay_every_nth_frame == 0 {
            return Err(GlitchError::validation(
                "overlay_every_nth_frame must be > 0",
            ));
        }
        if self.gif_frames == 0 {
            return Err(GlitchError::validation("gif_frames must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
