use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#FF5A36")).unwrap();
    assert_eq!(c, Color::rgb(0xFF, 0x5A, 0x36));

    let c: Color = serde_json::from_value(json!("0f0f1a80")).unwrap();
    assert_eq!(c, Color::rgba(0x0F, 0x0F, 0x1A, 0x80));
}

#[test]
fn expands_short_hex_forms() {
    assert_eq!(Color::parse_hex("#FFF").unwrap(), Color::rgb(255, 255, 255));
    assert_eq!(Color::parse_hex("#f80").unwrap(), Color::rgb(0xFF, 0x88, 0x00));
    assert_eq!(
        Color::parse_hex("#0F08").unwrap(),
        Color::rgba(0x00, 0xFF, 0x00, 0x88)
    );
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.5])).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));
}

#[test]
fn rejects_non_colors() {
    for bad in [
        json!("red"),
        json!("#12345"),
        json!("#GG0000"),
        json!("#ÿÿÿ"),
        json!("#+F+F+F"),
        json!("+FFFFF"),
        json!("#"),
        json!("#FFFFF"),
        json!(42),
        json!([1.0, 2.0]),
        json!({"r": 2.0, "g": 0.0, "b": 0.0}),
    ] {
        assert!(
            serde_json::from_value::<Color>(bad.clone()).is_err(),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn alpha_suffix_matches_tint_idiom() {
    let accent = Color::parse_hex("#FF5A36").unwrap();
    assert_eq!(accent.with_alpha(0x33).to_hex(), "#ff5a3633");
    assert_eq!(accent.to_hex(), "#ff5a36");
    assert_eq!(accent.fade(0.5).a, 128);
}

#[test]
fn serializes_as_hex_string() {
    let v = serde_json::to_value(Color::rgb(0xE0, 0xE0, 0xE0)).unwrap();
    assert_eq!(v, json!("#e0e0e0"));
}
