use crate::animation::interpolate::clamped;
use crate::animation::spring::{SpringConfig, spring_at};
use crate::animation::typewriter::{FRAMES_PER_CHAR, char_prefix, cursor_visible, revealed_chars};
use crate::composition::theme::Theme;
use crate::content::TranscriptEntry;
use crate::foundation::color::Color;
use crate::scene::model::{Align, Edges, Element, Fill, TextStyle};
use crate::widgets::SPRING_FPS;

/// Prompt glyph before each command.
pub const PROMPT: &str = "➜";
/// Block cursor shown while typing.
pub const CURSOR: &str = "▋";

// Pause between the last typed character and the output starting to fade in.
const OUTPUT_PAUSE_FRAMES: i64 = 30;
const OUTPUT_OPACITY: f64 = 0.7;

/// Opacity of the output block, before the 0.7 dimming.
pub fn output_progress(frame: i64, delay: i64, command_chars: usize) -> f64 {
    let typed_frames = FRAMES_PER_CHAR.saturating_mul(command_chars as i64);
    clamped(
        frame - delay - typed_frames - OUTPUT_PAUSE_FRAMES,
        [0.0, 30.0],
        [0.0, 1.0],
    )
}

/// A command being typed into a terminal, followed by its fading-in output.
///
/// `frame` is scene-local; `delay` shifts the entry, cursor blink and output timing, except that
/// the blink phase follows the undelayed frame.
pub fn terminal_command(entry: &TranscriptEntry, frame: i64, delay: i64, theme: &Theme) -> Element {
    let elapsed = frame - delay;
    let opacity = spring_at(elapsed, SPRING_FPS, SpringConfig::SMOOTH);

    let len = entry.command.chars().count();
    let revealed = revealed_chars(elapsed, len);

    let mut line = Element::row()
        .align_items(Align::Start)
        .background(Fill::solid(Color::rgba(0, 0, 0, 102)))
        .radius(8.0)
        .padding(Edges::symmetric(16.0, 20.0))
        .child(Element::text(PROMPT, TextStyle::mono(16.0, theme.accent_color)).margin(Edges {
            right: 8.0,
            ..Edges::ZERO
        }))
        .child(Element::text(
            char_prefix(entry.command, revealed),
            TextStyle::mono(16.0, theme.text_color),
        ));
    if revealed < len {
        let blink = if cursor_visible(frame) { 1.0 } else { 0.0 };
        line = line.child(
            Element::text(CURSOR, TextStyle::mono(16.0, theme.text_color)).opacity(blink),
        );
    }

    let mut block = Element::column()
        .opacity(opacity)
        .margin_bottom(20.0)
        .child(line);

    if let Some(output) = entry.output {
        let progress = output_progress(frame, delay, len);
        if progress > 0.0 {
            block = block.child(
                Element::text(
                    output,
                    TextStyle::mono(14.0, theme.text_color)
                        .line_height(1.6)
                        .pre_wrap(),
                )
                .margin_top(12.0)
                .padding(Edges::symmetric(16.0, 20.0))
                .opacity(progress * OUTPUT_OPACITY),
            );
        }
    }

    block
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/terminal.rs"]
mod tests;
