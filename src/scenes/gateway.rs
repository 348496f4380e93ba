use crate::composition::theme::Theme;
use crate::content::GATEWAY;
use crate::scene::model::Element;
use crate::scenes::walkthrough::{TranscriptLayout, walkthrough_scene};

/// Step 4: gateway status, then the dashboard.
pub fn gateway_scene(frame: i64, theme: &Theme) -> Element {
    let layout = TranscriptLayout {
        max_width: 1000.0,
        stagger: 240,
    };
    walkthrough_scene(4, &GATEWAY, layout, frame, theme)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/gateway.rs"]
mod tests;
