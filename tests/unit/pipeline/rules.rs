use std::sync::Arc;

use super::*;
use crate::buffer::raster::Raster;
use crate::foundation::core::Direction;

fn animation(n: u64) -> FrameRules {
    FrameRules::new(RenderMode::Animation, FrameIndex(n), 3)
}

fn streak() -> Effect {
    Effect::Streak {
        amount: 100,
        length: 3,
        direction: Direction::Right,
    }
}

#[test]
fn burst_runs_only_on_odd_frames() {
    let mut rng = GlitchRng::new(0);
    let mut drift = DriftState::default();
    for n in 0..6 {
        let resolved = animation(n).resolve(&Effect::Burst, &mut drift, &mut rng);
        assert_eq!(resolved.is_some(), n % 2 == 1, "frame {n}");
    }
}

#[test]
fn streak_bonus_accumulates_on_even_frames() {
    let mut rng = GlitchRng::new(1);
    let mut drift = DriftState::default();
    let mut last = 0;
    for n in 0..6 {
        let Some(Effect::Streak { amount, .. }) = animation(n).resolve(&streak(), &mut drift, &mut rng)
        else {
            panic!("streak is never skipped");
        };
        let bonus = drift.streak_bonus();
        if n % 2 == 0 {
            assert!((5..=24).contains(&(bonus - last)), "frame {n}: {last} -> {bonus}");
        } else {
            assert_eq!(bonus, last);
        }
        assert_eq!(amount, 100 + bonus);
        last = bonus;
    }
}

#[test]
fn still_mode_never_grows_streaks() {
    let rules = FrameRules::new(RenderMode::Still, FrameIndex::STILL, 3);
    let mut drift = DriftState::default();
    let resolved = rules.resolve(&streak(), &mut drift, &mut GlitchRng::new(2));
    assert_eq!(resolved, Some(streak()));
}

#[test]
fn band_effects_skip_multiples_of_five() {
    let mut rng = GlitchRng::new(3);
    let mut drift = DriftState::default();
    let split = Effect::Split { band: 3, shift: 50 };
    for n in [0, 5, 10] {
        assert_eq!(animation(n).resolve(&split, &mut drift, &mut rng), None);
        assert_eq!(animation(n).resolve(&Effect::BigLines, &mut drift, &mut rng), None);
    }
    assert_eq!(
        animation(2).resolve(&split, &mut drift, &mut rng),
        Some(split.clone())
    );
    assert_eq!(
        animation(7).resolve(&Effect::BigLines, &mut drift, &mut rng),
        Some(Effect::BigLines)
    );
}

#[test]
fn split_bands_widen_on_frames_one_and_three() {
    let mut drift = DriftState::default();
    for n in [1, 3] {
        let mut rng = GlitchRng::new(n);
        let mut replay = GlitchRng::new(n);
        let extra = replay.intn(10) as i32;
        let resolved = animation(n).resolve(
            &Effect::VerticalSplit { band: 4, shift: 9 },
            &mut drift,
            &mut rng,
        );
        assert_eq!(
            resolved,
            Some(Effect::VerticalSplit {
                band: 4 + extra,
                shift: 9
            })
        );
    }
}

#[test]
fn periodic_effects_follow_their_period_in_animation() {
    let mut rng = GlitchRng::new(4);
    let mut drift = DriftState::default();
    let corrupt = Effect::RandomCorruptions { shift_color: false };
    let overlay = Effect::OverlayImage {
        overlay: Arc::new(Raster::new(1, 1)),
    };
    for n in 0..13 {
        let fired = animation(n).resolve(&corrupt, &mut drift, &mut rng).is_some();
        assert_eq!(fired, n % CORRUPTION_PERIOD == 0, "frame {n}");
        let fired = animation(n).resolve(&overlay, &mut drift, &mut rng).is_some();
        assert_eq!(fired, n % 3 == 0, "frame {n}");
    }
}

#[test]
fn periodic_effects_always_fire_in_still_mode() {
    let rules = FrameRules::new(RenderMode::Still, FrameIndex::STILL, 7);
    let mut rng = GlitchRng::new(5);
    let mut drift = DriftState::default();
    let corrupt = Effect::RandomCorruptions { shift_color: true };
    assert_eq!(rules.resolve(&corrupt, &mut drift, &mut rng), Some(corrupt.clone()));
    assert_eq!(rules.frame(), FrameIndex(1));
}

#[test]
fn stateless_effects_pass_through_without_draws() {
    let mut rng = GlitchRng::new(6);
    let mut drift = DriftState::default();
    let effect = Effect::ShiftChannel {
        direction: Direction::Left,
    };
    assert_eq!(
        animation(0).resolve(&effect, &mut drift, &mut rng),
        Some(effect.clone())
    );
    assert_eq!(rng.intn(1 << 40), GlitchRng::new(6).intn(1 << 40));
}
