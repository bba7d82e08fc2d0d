use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlitchError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        GlitchError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(
        GlitchError::overlay_load("x")
            .to_string()
            .contains("overlay load error:")
    );
    assert!(
        GlitchError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        GlitchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlitchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
