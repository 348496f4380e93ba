use crate::animation::interpolate::clamped;
use crate::animation::spring::{SpringConfig, spring_at};
use crate::composition::theme::Theme;
use crate::content::Feature;
use crate::foundation::color::Color;
use crate::scene::model::{Align, Edges, Element, Fill, Length, TextStyle};
use crate::widgets::SPRING_FPS;

/// Card that fades in and slides up `delay` frames into the scene, casting a soft shadow.
pub fn feature_card(feature: &Feature, frame: i64, delay: i64, theme: &Theme) -> Element {
    let elapsed = frame - delay;
    let opacity = spring_at(elapsed, SPRING_FPS, SpringConfig::SMOOTH);
    let translate_y = clamped(elapsed, [0.0, 30.0], [50.0, 0.0]);

    let icon = Element::text(feature.icon, TextStyle::sans(48.0, theme.text_color).centered())
        .min_width(60.0);

    let body = Element::column()
        .grow(1.0)
        .child(
            Element::text(
                feature.title,
                TextStyle::sans(28.0, theme.accent_color).weight(700),
            )
            .margin_bottom(12.0),
        )
        .child(
            Element::text(
                feature.description,
                TextStyle::sans(18.0, theme.text_color).line_height(1.6),
            )
            .opacity(0.8),
        );

    Element::row()
        .width(Length::Percent(0.5))
        .gap(24.0)
        .align_items(Align::Start)
        .background(Fill::solid(theme.card_bg))
        .border(2.0, theme.accent_color)
        .radius(16.0)
        .shadow(8.0, 32.0, Color::rgba(0, 0, 0, 77))
        .padding(Edges::all(32.0))
        .margin_bottom(24.0)
        .opacity(opacity)
        .translate_y(translate_y)
        .child(icon)
        .child(body)
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/feature_card.rs"]
mod tests;
