use crate::animation::spring::{SpringConfig, spring_at};
use crate::composition::theme::Theme;
use crate::content::{OUTRO_ICON, OUTRO_LINKS, OUTRO_SUBTITLE, OUTRO_TITLE};
use crate::scene::model::{Element, Justify, TextStyle};
use crate::widgets::SPRING_FPS;
use crate::widgets::chip::chip;

/// Closing card: the whole scene springs in.
pub fn outro_scene(frame: i64, theme: &Theme) -> Element {
    let opacity = spring_at(frame, SPRING_FPS, SpringConfig::SNAPPY);
    let scale = spring_at(frame, SPRING_FPS, SpringConfig::SMOOTH);

    let links = Element::row()
        .wrap()
        .gap(24.0)
        .justify(Justify::Center)
        .children(OUTRO_LINKS.iter().map(|label| chip(label, theme.accent_color)));

    Element::centered_fill()
        .opacity(opacity)
        .scale(scale)
        .child(Element::text(OUTRO_ICON, TextStyle::sans(80.0, theme.text_color)).margin_bottom(32.0))
        .child(
            Element::text(
                OUTRO_TITLE,
                TextStyle::sans(64.0, theme.accent_color)
                    .weight(800)
                    .centered(),
            )
            .margin_bottom(24.0),
        )
        .child(
            Element::text(
                OUTRO_SUBTITLE,
                TextStyle::sans(28.0, theme.text_color)
                    .line_height(1.6)
                    .centered(),
            )
            .margin_bottom(48.0)
            .opacity(0.8),
        )
        .child(links)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/outro.rs"]
mod tests;
