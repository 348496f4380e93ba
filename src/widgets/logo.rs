use crate::animation::spring::{SpringConfig, spring_at};
use crate::content::LOGO_TEXT;
use crate::foundation::color::Color;
use crate::scene::model::{Element, Fill, TextStyle};
use crate::widgets::SPRING_FPS;

/// Gradient painted through the wordmark glyphs.
pub const LOGO_GRADIENT: Fill = Fill::LinearGradient {
    angle_deg: 135.0,
    from: Color::rgb(0xFF, 0x5A, 0x36),
    to: Color::rgb(0xFF, 0x8A, 0x6B),
};

/// Springing "OpenClaw" wordmark.
pub fn logo(frame: i64) -> Element {
    let opacity = spring_at(frame, SPRING_FPS, SpringConfig::SNAPPY);
    let scale = spring_at(frame, SPRING_FPS, SpringConfig::SMOOTH);

    let text = TextStyle::sans(120.0, LOGO_GRADIENT.dominant_color())
        .weight(800)
        .fill(LOGO_GRADIENT);
    Element::text(LOGO_TEXT, text)
        .opacity(opacity)
        .scale(scale)
        .margin_bottom(20.0)
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/logo.rs"]
mod tests;
