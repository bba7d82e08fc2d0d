use super::*;

#[test]
fn tokens_roundtrip_for_every_kind() {
    for kind in EffectKind::ALL {
        assert_eq!(EffectKind::from_token(kind.token()), Some(kind));
        assert_eq!(kind.to_string(), kind.token());
    }
}

#[test]
fn tokens_are_case_sensitive() {
    assert_eq!(EffectKind::from_token("streak"), None);
    assert_eq!(EffectKind::from_token(" Streak"), None);
    assert_eq!(EffectKind::from_token("Glitter"), None);
}

#[test]
fn wrap_once_subtracts_a_single_extent() {
    assert_eq!(wrap_once(3, 10), 3);
    assert_eq!(wrap_once(10, 10), 0);
    assert_eq!(wrap_once(12, 10), 2);
    assert_eq!(wrap_once(25, 10), 15);
}

#[test]
fn apply_dispatches_to_the_named_effect() {
    let src = Raster::filled(4, 4, [255, 0, 0, 255]);
    let mut buf = PixelBuffer::from_source(src);
    let mut rng = GlitchRng::new(0);

    Effect::ShiftChannel {
        direction: Direction::Right,
    }
    .apply(&mut buf, &mut rng)
    .unwrap();
    assert_eq!(buf.output.at(1, 1), [0, 255, 0, 255]);

    let effect = Effect::ColorBoost {
        channel: Channel::Green,
    };
    assert_eq!(effect.kind(), EffectKind::ColorBoost);
    effect.apply(&mut buf, &mut rng).unwrap();
    assert_eq!(buf.output.at(1, 1), [0, 255, 0, 255]);
}

#[test]
fn overlay_effect_shares_its_raster() {
    let overlay = Arc::new(Raster::filled(2, 2, [0, 0, 255, 255]));
    let effect = Effect::OverlayImage {
        overlay: Arc::clone(&overlay),
    };
    let mut buf = PixelBuffer::from_source(Raster::filled(6, 6, [9, 9, 9, 255]));
    effect.apply(&mut buf, &mut GlitchRng::new(1)).unwrap();
    assert_eq!(buf.output.at(5, 5), [0, 0, 255, 255]);
    assert_eq!(Arc::strong_count(&overlay), 2);
}
