use crate::animation::interpolate::clamped;
use crate::composition::theme::Theme;
use crate::content::{INTRO_CHIPS, INTRO_SUBTITLE, INTRO_TITLE};
use crate::scene::model::{Element, Justify, TextStyle};
use crate::widgets::chip::chip;
use crate::widgets::logo::logo;

/// Logo, staggered title and tagline, then the capability chips.
pub fn intro_scene(frame: i64, theme: &Theme) -> Element {
    let title_opacity = clamped(frame, [0.0, 30.0], [0.0, 1.0]);
    let subtitle_opacity = clamped(frame, [30.0, 60.0], [0.0, 1.0]);
    let chips_opacity = clamped(frame, [60.0, 90.0], [0.0, 1.0]);

    let title = Element::text(
        INTRO_TITLE,
        TextStyle::sans(72.0, theme.accent_color)
            .weight(800)
            .centered(),
    )
    .margin_bottom(24.0)
    .opacity(title_opacity);

    let subtitle = Element::text(
        INTRO_SUBTITLE,
        TextStyle::sans(28.0, theme.text_color)
            .line_height(1.5)
            .centered(),
    )
    .margin_bottom(60.0)
    .opacity(subtitle_opacity);

    let chips = Element::row()
        .wrap()
        .gap(32.0)
        .justify(Justify::Center)
        .opacity(chips_opacity)
        .children(INTRO_CHIPS.iter().map(|label| chip(label, theme.accent_color)));

    Element::centered_fill()
        .child(logo(frame))
        .child(title)
        .child(subtitle)
        .child(chips)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/intro.rs"]
mod tests;
