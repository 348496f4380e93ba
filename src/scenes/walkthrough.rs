use crate::composition::theme::Theme;
use crate::content::{StepCopy, TOTAL_STEPS};
use crate::scene::model::{Edges, Element, Length, TextStyle};
use crate::widgets::step_indicator::step_indicator;
use crate::widgets::terminal::terminal_command;

/// Layout knobs that differ between walkthrough scenes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TranscriptLayout {
    /// Width cap of the terminal column.
    pub(crate) max_width: f32,
    /// Frames between consecutive commands starting.
    pub(crate) stagger: i64,
}

/// Step indicator, heading, subheading and a staggered terminal transcript.
pub(crate) fn walkthrough_scene(
    step: u32,
    copy: &StepCopy,
    layout: TranscriptLayout,
    frame: i64,
    theme: &Theme,
) -> Element {
    let title = Element::text(
        copy.title,
        TextStyle::sans(48.0, theme.accent_color)
            .weight(700)
            .centered(),
    )
    .margin_bottom(16.0);

    let subtitle = Element::text(
        copy.subtitle,
        TextStyle::sans(20.0, theme.text_color).centered(),
    )
    .margin_bottom(40.0)
    .opacity(0.7);

    let commands = Element::column()
        .width(Length::Percent(1.0))
        .max_width(layout.max_width)
        .children(
            copy.transcript
                .iter()
                .enumerate()
                .map(|(i, entry)| terminal_command(entry, frame, i as i64 * layout.stagger, theme)),
        );

    Element::centered_fill()
        .padding(Edges::symmetric(0.0, 120.0))
        .child(step_indicator(step, TOTAL_STEPS, frame, theme.accent_color))
        .child(title)
        .child(subtitle)
        .child(commands)
}
