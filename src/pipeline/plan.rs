use std::sync::Arc;

use crate::buffer::codec::load_png_file;
use crate::buffer::raster::Raster;
use crate::color::ops::parse_hex_color;
use crate::effects::{Effect, EffectKind};
use crate::foundation::core::Direction;
use crate::foundation::error::{GlitchError, GlitchResult};
use crate::pipeline::config::GlitchConfig;

/// Split an order string into known effect kinds.
///
/// Tokens are case-sensitive and whitespace is significant; unknown tokens are skipped.
pub fn parse_effect_order(order: &str) -> Vec<EffectKind> {
    order
        .split(',')
        .filter_map(|token| {
            let kind = EffectKind::from_token(token);
            if kind.is_none() && !token.is_empty() {
                tracing::debug!(token, "ignoring unknown effect token");
            }
            kind
        })
        .collect()
}

/// Ordered effects with their base parameters, resolved once per run.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectPlan {
    effects: Vec<Effect>,
    overlay_every_nth: u64,
}

impl EffectPlan {
    /// Resolve `config` into concrete effects.
    ///
    /// The noise color is parsed only when `Noise` is listed and the overlay PNG is loaded only
    /// when `OverlayImage` is listed. Each is resolved once and shared by every occurrence.
    pub fn build(config: &GlitchConfig) -> GlitchResult<Self> {
        config.validate()?;
        let kinds = parse_effect_order(&config.order);

        let mut noise_color = None;
        let mut overlay: Option<Arc<Raster>> = None;
        let mut effects = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let effect = match kind {
                EffectKind::Streak => Effect::Streak {
                    amount: config.streak_amount,
                    length: config.streak_width,
                    direction: Direction::from_left_flag(config.streak_left),
                },
                EffectKind::Burst => Effect::Burst,
                EffectKind::Noise => {
                    let color = match noise_color {
                        Some(color) => color,
                        None => {
                            let color = parse_hex_color(&config.noise_color)?;
                            noise_color = Some(color);
                            color
                        }
                    };
                    Effect::Noise { color }
                }
                EffectKind::GaussianNoise => Effect::GaussianNoise,
                EffectKind::ShiftChannel => Effect::ShiftChannel {
                    direction: Direction::from_left_flag(config.shift_channel_left),
                },
                EffectKind::Ghost => Effect::Ghost,
                EffectKind::GhostTint => Effect::GhostTint,
                EffectKind::GhostStretch => Effect::GhostStretch,
                EffectKind::ColorBoost => Effect::ColorBoost {
                    channel: config.color_boost,
                },
                EffectKind::Split => Effect::Split {
                    band: config.split_width,
                    shift: config.split_length,
                },
                EffectKind::VerticalSplit => Effect::VerticalSplit {
                    band: config.vertical_split_width,
                    shift: config.vertical_split_length,
                },
                EffectKind::Scanlines => Effect::Scanlines,
                EffectKind::BigLines => Effect::BigLines,
                EffectKind::CopyChannelBigLines => Effect::CopyChannelBigLines,
                EffectKind::RandomCorruptions => Effect::RandomCorruptions {
                    shift_color: config.corruption_shift_color,
                },
                EffectKind::OverlayImage => {
                    let shared = match &overlay {
                        Some(shared) => Arc::clone(shared),
                        None => {
                            let shared = Arc::new(load_overlay(config)?);
                            overlay = Some(Arc::clone(&shared));
                            shared
                        }
                    };
                    Effect::OverlayImage { overlay: shared }
                }
            };
            effects.push(effect);
        }

        Ok(Self {
            effects,
            overlay_every_nth: config.overlay_every_nth_frame,
        })
    }

    /// Effects in application order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Period of `OverlayImage` in animation mode.
    pub fn overlay_every_nth(&self) -> u64 {
        self.overlay_every_nth
    }

    /// Whether no effect survived parsing.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

fn load_overlay(config: &GlitchConfig) -> GlitchResult<Raster> {
    let path = config.overlay_image.as_deref().ok_or_else(|| {
        GlitchError::overlay_load("OverlayImage is listed but no overlay_image is set")
    })?;
    load_png_file(path)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/plan.rs"]
mod tests;
