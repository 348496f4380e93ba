use super::*;

const DEFAULT_PROPS: &str = r##"{
    "backgroundColor": "#0F0F1A",
    "cardBg": "#1A1A2E",
    "accentColor": "#FF5A36",
    "textColor": "#E0E0E0",
    "secondaryTextColor": "#A0A0B0"
}"##;

#[test]
fn registration_defaults_parse_to_default_theme() {
    let theme = Theme::from_json_str(DEFAULT_PROPS).unwrap();
    assert_eq!(theme, Theme::DEFAULT);
    assert_eq!(Theme::default(), Theme::DEFAULT);
}

#[test]
fn missing_field_is_a_validation_error() {
    let props = r##"{
        "backgroundColor": "#0F0F1A",
        "cardBg": "#1A1A2E",
        "accentColor": "#FF5A36",
        "textColor": "#E0E0E0"
    }"##;
    let err = Theme::from_json_str(props).unwrap_err();
    assert!(matches!(err, TutorialError::Validation(_)));
    assert!(err.to_string().contains("secondaryTextColor"));
}

#[test]
fn non_color_value_is_rejected() {
    let props = DEFAULT_PROPS.replace("\"#FF5A36\"", "\"orange\"");
    assert!(Theme::from_json_str(&props).is_err());
    let props = DEFAULT_PROPS.replace("\"#FF5A36\"", "42");
    assert!(Theme::from_json_str(&props).is_err());
    let props = DEFAULT_PROPS.replace("\"#FF5A36\"", "\"#+F+F+F\"");
    assert!(Theme::from_json_str(&props).is_err());
}

#[test]
fn short_hex_props_load() {
    let props = DEFAULT_PROPS
        .replace("\"#0F0F1A\"", "\"#FFF\"")
        .replace("\"#1A1A2E\"", "\"#1a2e\"");
    let theme = Theme::from_json_str(&props).unwrap();
    assert_eq!(theme.background_color, Color::rgb(255, 255, 255));
    assert_eq!(theme.card_bg, Color::rgba(0x11, 0xAA, 0x22, 0xEE));
    assert_eq!(theme.accent_color, Theme::DEFAULT.accent_color);
}

#[test]
fn serializes_with_camel_case_keys() {
    let v = serde_json::to_value(Theme::PLAYER).unwrap();
    assert_eq!(v["backgroundColor"], "#1a1a2e");
    assert_eq!(v["cardBg"], "#16213e");
    assert_eq!(v["secondaryTextColor"], "#a0a0a0");
}

#[test]
fn from_path_reports_missing_file() {
    let err = Theme::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open theme props"));
}
