use crate::composition::theme::Theme;
use crate::content::{INSTALL_CHECK, INSTALL_SCRIPT, INSTALL_WIZARD, StepCopy};
use crate::scene::model::Element;
use crate::scenes::walkthrough::{TranscriptLayout, walkthrough_scene};

const LAYOUT: TranscriptLayout = TranscriptLayout {
    max_width: 1200.0,
    stagger: 300,
};

/// Copy for install step 1, 2 or 3; other values fall back to step 3.
pub fn install_copy(step: u32) -> &'static StepCopy {
    match step {
        1 => &INSTALL_CHECK,
        2 => &INSTALL_SCRIPT,
        _ => &INSTALL_WIZARD,
    }
}

/// Install step `step` (1..=3) of the walkthrough.
pub fn install_scene(step: u32, frame: i64, theme: &Theme) -> Element {
    let step = step.clamp(1, 3);
    walkthrough_scene(step, install_copy(step), LAYOUT, frame, theme)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/install.rs"]
mod tests;
