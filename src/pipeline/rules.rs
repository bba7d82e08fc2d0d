//! Per-frame parameter mutation and skip rules.
//!
//! Frame `n` of an animation differs from its neighbours in a fixed way: parity decides whether
//! `Burst` runs and whether the streak count grows, multiples of 5 drop the band effects, and
//! periodic effects fire only on multiples of their period. A still image renders as frame 1.

use crate::effects::Effect;
use crate::foundation::core::FrameIndex;
use crate::foundation::rng::GlitchRng;

/// `RandomCorruptions` period in animation mode.
pub const CORRUPTION_PERIOD: u64 = 6;

/// Band effects are skipped on multiples of this.
pub const BAND_SKIP_PERIOD: u64 = 5;

/// Whether frames belong to an animation or a single still.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// One image; periodic effects always fire.
    Still,
    /// A numbered frame sequence.
    Animation,
}

/// State carried from one frame to the next within a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriftState {
    streak_bonus: u32,
}

impl DriftState {
    /// Streaks added on top of the configured amount so far.
    pub fn streak_bonus(&self) -> u32 {
        self.streak_bonus
    }
}

/// Resolves base effects into the invocations of one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameRules {
    mode: RenderMode,
    frame: FrameIndex,
    overlay_every_nth: u64,
}

impl FrameRules {
    /// Rules for `frame` in `mode`.
    pub fn new(mode: RenderMode, frame: FrameIndex, overlay_every_nth: u64) -> Self {
        Self {
            mode,
            frame,
            overlay_every_nth,
        }
    }

    /// Frame index the rules apply to.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// The invocation of `effect` for this frame, or `None` when it is skipped.
    ///
    /// Any rule draws come from `rng` before the effect's own draws.
    pub fn resolve(
        &self,
        effect: &Effect,
        drift: &mut DriftState,
        rng: &mut GlitchRng,
    ) -> Option<Effect> {
        let n = self.frame;
        match effect {
            Effect::Streak {
                amount,
                length,
                direction,
            } => {
                if n.is_even() {
                    let grow = rng.intn(100) / 5 + 5;
                    drift.streak_bonus = drift.streak_bonus.saturating_add(grow as u32);
                }
                Some(Effect::Streak {
                    amount: amount.saturating_add(drift.streak_bonus),
                    length: *length,
                    direction: *direction,
                })
            }
            Effect::Burst if n.is_even() => None,
            Effect::Split { .. } | Effect::VerticalSplit { .. } | Effect::BigLines
                if n.is_multiple_of(BAND_SKIP_PERIOD) =>
            {
                None
            }
            Effect::Split { band, shift } => Some(Effect::Split {
                band: self.widen(*band, rng),
                shift: *shift,
            }),
            Effect::VerticalSplit { band, shift } => Some(Effect::VerticalSplit {
                band: self.widen(*band, rng),
                shift: *shift,
            }),
            Effect::RandomCorruptions { .. } if !self.periodic(CORRUPTION_PERIOD) => None,
            Effect::OverlayImage { .. } if !self.periodic(self.overlay_every_nth) => None,
            other => Some(other.clone()),
        }
    }

    fn widen(&self, band: i32, rng: &mut GlitchRng) -> i32 {
        if matches!(self.frame.0, 1 | 3) {
            band.saturating_add(rng.intn(10) as i32)
        } else {
            band
        }
    }

    fn periodic(&self, period: u64) -> bool {
        match self.mode {
            RenderMode::Still => true,
            RenderMode::Animation => self.frame.is_multiple_of(period),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/rules.rs"]
mod tests;
