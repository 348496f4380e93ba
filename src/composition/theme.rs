use crate::foundation::color::Color;
use crate::foundation::error::{TutorialError, TutorialResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The five colors every scene draws with.
///
/// Deserialized from composition props JSON with camelCase keys. All five keys are required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Full-frame background.
    pub background_color: Color,
    /// Card and panel fill.
    pub card_bg: Color,
    /// Highlights, borders, terminal prompt.
    pub accent_color: Color,
    /// Primary text.
    pub text_color: Color,
    /// De-emphasized text.
    pub secondary_text_color: Color,
}

impl Theme {
    /// Registration defaults of the `OpenClawTutorial` composition.
    pub const DEFAULT: Self = Self {
        background_color: Color::rgb(0x0F, 0x0F, 0x1A),
        card_bg: Color::rgb(0x1A, 0x1A, 0x2E),
        accent_color: Color::rgb(0xFF, 0x5A, 0x36),
        text_color: Color::rgb(0xE0, 0xE0, 0xE0),
        secondary_text_color: Color::rgb(0xA0, 0xA0, 0xB0),
    };

    /// Colors used by the interactive player preset.
    pub const PLAYER: Self = Self {
        background_color: Color::rgb(0x1a, 0x1a, 0x2e),
        card_bg: Color::rgb(0x16, 0x21, 0x3e),
        accent_color: Color::rgb(0xFF, 0x5A, 0x36),
        text_color: Color::rgb(0xff, 0xff, 0xff),
        secondary_text_color: Color::rgb(0xa0, 0xa0, 0xa0),
    };

    /// Parse theme props from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TutorialResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TutorialError::validation(format!("parse theme props JSON: {e}")))
    }

    /// Parse theme props from a JSON string.
    pub fn from_json_str(s: &str) -> TutorialResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse theme props from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TutorialResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TutorialError::validation(format!("open theme props '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/theme.rs"]
mod tests;
