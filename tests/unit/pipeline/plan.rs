use super::*;
use crate::buffer::codec::encode_raster;
use crate::foundation::core::{Channel, OutputFormat};

fn config(order: &str) -> GlitchConfig {
    GlitchConfig {
        order: order.to_string(),
        ..GlitchConfig::default()
    }
}

#[test]
fn order_keeps_known_tokens_in_sequence() {
    let kinds = parse_effect_order("Burst,Glitter,Streak,,burst,Burst");
    assert_eq!(
        kinds,
        vec![EffectKind::Burst, EffectKind::Streak, EffectKind::Burst]
    );
}

#[test]
fn default_order_resolves_every_token() {
    let plan = EffectPlan::build(&GlitchConfig::default()).unwrap();
    let kinds: Vec<_> = plan.effects().iter().map(Effect::kind).collect();
    assert_eq!(kinds.len(), 9);
    assert_eq!(kinds[0], EffectKind::Streak);
    assert_eq!(kinds[8], EffectKind::Noise);
    assert_eq!(
        plan.effects()[8],
        Effect::Noise {
            color: [0xc0, 0xff, 0xee, 255]
        }
    );
}

#[test]
fn parameters_come_from_the_config() {
    let cfg = GlitchConfig {
        streak_amount: 12,
        streak_width: -1,
        streak_left: true,
        color_boost: Channel::Green,
        vertical_split_width: 9,
        vertical_split_length: 4,
        ..config("Streak,ColorBoost,VerticalSplit,RandomCorruptions")
    };
    let plan = EffectPlan::build(&cfg).unwrap();
    assert_eq!(
        plan.effects(),
        &[
            Effect::Streak {
                amount: 12,
                length: -1,
                direction: Direction::Left,
            },
            Effect::ColorBoost {
                channel: Channel::Green
            },
            Effect::VerticalSplit { band: 9, shift: 4 },
            Effect::RandomCorruptions { shift_color: false },
        ]
    );
}

#[test]
fn bad_noise_color_only_matters_when_noise_is_listed() {
    let cfg = GlitchConfig {
        noise_color: "c0ffee".to_string(),
        ..config("Burst")
    };
    assert!(EffectPlan::build(&cfg).is_ok());

    let err = EffectPlan::build(&GlitchConfig {
        order: "Burst,Noise".to_string(),
        ..cfg
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("format error:"), "{err}");
}

#[test]
fn overlay_requires_a_path_and_a_png() {
    let err = EffectPlan::build(&config("OverlayImage")).unwrap_err();
    assert!(err.to_string().starts_with("overlay load error:"), "{err}");

    let dir = tempfile::tempdir().unwrap();
    let missing = GlitchConfig {
        overlay_image: Some(dir.path().join("nope.png")),
        ..config("OverlayImage")
    };
    assert!(EffectPlan::build(&missing).is_err());
}

#[test]
fn overlay_is_loaded_once_and_shared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlay.png");
    let file = std::fs::File::create(&path).unwrap();
    encode_raster(
        &Raster::filled(3, 2, [255, 0, 0, 255]),
        file,
        OutputFormat::Png,
    )
    .unwrap();

    let cfg = GlitchConfig {
        overlay_image: Some(path),
        overlay_every_nth_frame: 4,
        ..config("OverlayImage,Burst,OverlayImage")
    };
    let plan = EffectPlan::build(&cfg).unwrap();
    assert_eq!(plan.overlay_every_nth(), 4);
    match (&plan.effects()[0], &plan.effects()[2]) {
        (Effect::OverlayImage { overlay: a }, Effect::OverlayImage { overlay: b }) => {
            assert!(Arc::ptr_eq(a, b));
            assert_eq!((a.width(), a.height()), (3, 2));
        }
        other => panic!("unexpected plan {other:?}"),
    }
}

#[test]
fn invalid_config_fails_before_parsing() {
    let cfg = GlitchConfig {
        split_width: 0,
        ..config("Burst")
    };
    assert!(EffectPlan::build(&cfg).is_err());
    assert!(EffectPlan::build(&config("nothing,known")).unwrap().is_empty());
}
