use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TutorialError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TutorialError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        TutorialError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        TutorialError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        TutorialError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TutorialError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn taffy_errors_map_to_layout() {
    let err: TutorialError = taffy::TaffyError::InvalidInputNode(taffy::NodeId::from(7u64)).into();
    assert!(matches!(err, TutorialError::Layout(_)));
}
