use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramebufError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramebufError::palette("x")
            .to_string()
            .contains("palette error:")
    );
    assert!(
        FramebufError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn buffer_too_small_reports_sizes() {
    let msg = FramebufError::BufferTooSmall {
        required: 80,
        actual: 79,
    }
    .to_string();
    assert!(msg.contains("80"));
    assert!(msg.contains("79"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramebufError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
