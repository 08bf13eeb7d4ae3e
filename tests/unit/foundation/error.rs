use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OverlyteError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        OverlyteError::device("x")
            .to_string()
            .contains("device error:")
    );
    assert!(
        OverlyteError::resource("x")
            .to_string()
            .contains("resource error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OverlyteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
