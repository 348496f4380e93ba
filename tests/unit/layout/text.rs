use super::*;
use crate::foundation::color::Color;

fn style(size: f32) -> TextStyle {
    TextStyle::sans(size, Color::rgb(255, 255, 255)).line_height(1.0)
}

#[test]
fn heuristic_single_line() {
    let (w, h) = heuristic_measure("abcd", &style(10.0), None);
    assert!((w - 24.0).abs() < 1e-4);
    assert_eq!(h, 10.0);

    let (w, _) = heuristic_measure("你好", &style(10.0), None);
    assert!((w - 20.0).abs() < 1e-4);
}

#[test]
fn heuristic_wraps_at_word_boundaries() {
    // "aaaa bbbb" is 9 chars × 6px = 54px; at 30px it wraps into two 24px lines.
    let (w, h) = heuristic_measure("aaaa bbbb", &style(10.0), Some(30.0));
    assert!((w - 24.0).abs() < 1e-4);
    assert_eq!(h, 20.0);
}

#[test]
fn heuristic_wraps_wide_chars_individually() {
    let (w, h) = heuristic_measure("一二三四", &style(10.0), Some(20.0));
    assert!((w - 20.0).abs() < 1e-4);
    assert_eq!(h, 20.0);
}

#[test]
fn pre_wrap_keeps_newlines() {
    let s = style(10.0).pre_wrap();
    let (_, h) = heuristic_measure("a\nb\n\nc", &s, None);
    assert_eq!(h, 40.0);

    let (_, h) = heuristic_measure("a\nb\n\nc", &style(10.0), None);
    assert_eq!(h, 10.0);
}

#[test]
fn line_height_scales_height() {
    let s = style(20.0).line_height(1.6);
    let (_, h) = heuristic_measure("x", &s, None);
    assert!((h - 32.0).abs() < 1e-4);
}

#[test]
fn whitespace_normalization() {
    assert_eq!(normalize_whitespace("  a \n  b ", false), "a b");
    assert_eq!(normalize_whitespace("a b", false), "a b");
    assert_eq!(normalize_whitespace(" a\n", true), " a\n");
}

#[test]
fn engine_without_fonts_falls_back_to_heuristics() {
    let mut engine = TextLayoutEngine::new();
    assert!(!engine.has_fonts());
    assert!(engine.shape("hi", &style(10.0), None).unwrap().is_none());
    let (w, h) = engine.measure("hi", &style(10.0), None).unwrap();
    assert!((w - 12.0).abs() < 1e-4);
    assert_eq!(h, 10.0);
}

#[test]
fn invalid_size_is_a_layout_error() {
    let mut engine = TextLayoutEngine::new();
    let err = engine.shape("x", &style(0.0), None).unwrap_err();
    assert!(matches!(err, TutorialError::Layout(_)));
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let mut engine = TextLayoutEngine::new();
    assert!(engine.register_font(FontRole::Sans, b"not a font").is_err());
    assert!(!engine.has_fonts());
}

#[test]
fn font_set_mono_falls_back_to_sans() {
    let fonts = FontSet {
        sans: Some(Arc::new(vec![1, 2, 3])),
        mono: None,
    };
    let (role, _) = fonts.resolve(FontRole::Mono).unwrap();
    assert_eq!(role, FontRole::Sans);
    assert!(FontSet::none().resolve(FontRole::Sans).is_none());
    assert!(FontSet::none().is_empty());
}
