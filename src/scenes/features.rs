use crate::composition::theme::Theme;
use crate::content::{FEATURES, FEATURES_SUBTITLE, FEATURES_TITLE};
use crate::scene::model::{Edges, Element, Length, TextStyle};
use crate::widgets::feature_card::feature_card;

const CARD_STAGGER: i64 = 10;
const GRID_GAP: f32 = 24.0;

/// Heading and a two-column grid of staggered feature cards.
pub fn features_scene(frame: i64, theme: &Theme) -> Element {
    let heading = Element::text(
        FEATURES_TITLE,
        TextStyle::sans(56.0, theme.accent_color)
            .weight(800)
            .centered(),
    )
    .margin_bottom(20.0);

    let subheading = Element::text(
        FEATURES_SUBTITLE,
        TextStyle::sans(24.0, theme.text_color).centered(),
    )
    .margin_bottom(60.0)
    .opacity(0.8);

    let cards: Vec<Element> = FEATURES
        .iter()
        .enumerate()
        .map(|(i, f)| feature_card(f, frame, i as i64 * CARD_STAGGER, theme))
        .collect();

    let mut grid = Element::column()
        .width(Length::Percent(1.0))
        .max_width(1400.0)
        .gap(GRID_GAP);
    let mut cards = cards.into_iter();
    while let Some(first) = cards.next() {
        let row = Element::row()
            .width(Length::Percent(1.0))
            .gap(GRID_GAP)
            .child(first)
            .children(cards.next());
        grid = grid.child(row);
    }

    Element::centered_fill()
        .padding(Edges::symmetric(0.0, 100.0))
        .child(heading)
        .child(subheading)
        .child(grid)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/features.rs"]
mod tests;
