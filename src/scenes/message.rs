use crate::composition::theme::Theme;
use crate::content::MESSAGE;
use crate::scene::model::Element;
use crate::scenes::walkthrough::{TranscriptLayout, walkthrough_scene};

/// Step 5: a single `openclaw message send`.
pub fn message_scene(frame: i64, theme: &Theme) -> Element {
    let layout = TranscriptLayout {
        max_width: 1000.0,
        stagger: 0,
    };
    walkthrough_scene(5, &MESSAGE, layout, frame, theme)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/message.rs"]
mod tests;
