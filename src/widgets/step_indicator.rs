use crate::animation::spring::{SpringConfig, spring_at};
use crate::foundation::color::Color;
use crate::scene::model::{Align, Element, Fill, Length, TextStyle};
use crate::widgets::SPRING_FPS;

const PILL_HEIGHT: f32 = 16.0;
const PILL_WIDTH: f32 = 16.0;
const CURRENT_PILL_WIDTH: f32 = 48.0;

/// Row of `total` progress pills followed by a `"{step}/{total}"` label.
///
/// The pill for the current step is widened; completed and current pills are filled with
/// `accent`, the rest with a faint accent tint. The row springs in from transparent.
pub fn step_indicator(step: u32, total: u32, frame: i64, accent: Color) -> Element {
    let entry = spring_at(frame, SPRING_FPS, SpringConfig::SNAPPY);

    let pills = (0..total).map(|i| {
        let width = if i + 1 == step {
            CURRENT_PILL_WIDTH
        } else {
            PILL_WIDTH
        };
        let color = if i < step {
            accent
        } else {
            accent.with_alpha(0x33)
        };
        Element::column()
            .size(Length::Px(width), Length::Px(PILL_HEIGHT))
            .radius(PILL_HEIGHT / 2.0)
            .background(Fill::solid(color))
    });

    let label = Element::text(
        format!("{step}/{total}"),
        TextStyle::sans(16.0, accent).weight(600),
    )
    .margin_left(12.0);

    Element::row()
        .gap(16.0)
        .margin_bottom(40.0)
        .align_items(Align::Center)
        .opacity(entry)
        .children(pills)
        .child(label)
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/step_indicator.rs"]
mod tests;
