use super::*;

#[test]
fn defaults_match_element_properties() {
    let s = OverlaySettings::default();
    assert!(!s.display_clock);
    assert!(s.display_text);
    assert!(s.display_bbox);
    assert!(!s.display_mask);
    assert!(s.display_coord);
    assert_eq!(s.clock_font, DEFAULT_FONT);
    assert_eq!(s.clock_font_size, DEFAULT_FONT_SIZE);
    assert_eq!(s.clock_color, Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(s.mode, ProcessMode::Accelerated);
    assert!(s.hw_blend_color_attrs.is_none());
    assert_eq!(s.device, 0);
}

#[test]
fn json_roundtrip_and_partial_documents() {
    let s = OverlaySettings {
        display_mask: true,
        mode: ProcessMode::Hardware,
        hw_blend_color_attrs: Some("0,0,1,0,0.3".to_string()),
        ..OverlaySettings::default()
    };
    let json = serde_json::to_string(&s).unwrap();
    let back = OverlaySettings::from_json_str(&json).unwrap();
    assert!(back.display_mask);
    assert_eq!(back.mode, ProcessMode::Hardware);
    assert_eq!(back.hw_blend_color_attrs.as_deref(), Some("0,0,1,0,0.3"));

    // Unspecified fields fall back to defaults.
    let partial = OverlaySettings::from_json_str(r#"{"display_clock": true}"#).unwrap();
    assert!(partial.display_clock);
    assert!(partial.display_text);
    assert_eq!(partial.mode, ProcessMode::Accelerated);

    assert!(OverlaySettings::from_json_str("{").is_err());
}

#[test]
fn clock_font_size_is_capped() {
    let s = OverlaySettings {
        clock_font_size: 200,
        ..OverlaySettings::default()
    };
    assert_eq!(s.clock_params().font.size, MAX_FONT_SIZE);

    let s = OverlaySettings::default();
    assert_eq!(s.clock_params().font.size, DEFAULT_FONT_SIZE);
    assert_eq!(s.clock_params().font.name, DEFAULT_FONT);
}
