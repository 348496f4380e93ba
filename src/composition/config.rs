use crate::composition::theme::Theme;
use crate::composition::timeline::Timeline;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{TutorialError, TutorialResult};

/// Registered composition identifier.
pub const COMPOSITION_ID: &str = "OpenClawTutorial";

/// Everything needed to evaluate any frame of the tutorial.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompositionConfig {
    /// Composition identifier.
    pub id: String,
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Declared length in frames; must equal the timeline length.
    pub duration_frames: u64,
    /// Color props.
    pub theme: Theme,
    /// Scene windows.
    pub timeline: Timeline,
}

impl CompositionConfig {
    /// The tutorial at 30 fps, 1920×1080, 2700 frames, drawn with `theme`.
    pub fn openclaw(theme: Theme) -> Self {
        let timeline = Timeline::standard();
        Self {
            id: COMPOSITION_ID.to_owned(),
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            duration_frames: timeline.total_frames(),
            theme,
            timeline,
        }
    }

    /// Composition drawn with the player preset colors.
    pub fn player() -> Self {
        Self::openclaw(Theme::PLAYER)
    }

    /// Check frame rate, canvas and that the declared duration matches the timeline.
    pub fn validate(&self) -> TutorialResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        self.canvas.validate()?;
        if self.duration_frames == 0 {
            return Err(TutorialError::validation("composition duration must be > 0"));
        }
        if self.timeline.end_frame() != self.duration_frames {
            return Err(TutorialError::validation(format!(
                "composition duration {} does not match timeline end {}",
                self.duration_frames,
                self.timeline.end_frame()
            )));
        }
        Ok(())
    }

    /// `[0, duration_frames)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames),
        }
    }
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self::openclaw(Theme::DEFAULT)
    }
}

/// Interactive preview settings: a composition plus playback flags.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlayerConfig {
    /// Composition being previewed.
    pub composition: CompositionConfig,
    /// Wrap around at the end instead of holding the last frame.
    pub loop_playback: bool,
    /// Show transport controls.
    pub controls: bool,
}

impl PlayerConfig {
    /// Looping player with controls and the player theme.
    pub fn preset() -> Self {
        Self {
            composition: CompositionConfig::player(),
            loop_playback: true,
            controls: true,
        }
    }

    /// Frame shown after `tick` frames of playback.
    pub fn frame_at(&self, tick: u64) -> FrameIndex {
        let duration = self.composition.duration_frames.max(1);
        if self.loop_playback {
            FrameIndex(tick % duration)
        } else {
            FrameIndex(tick.min(duration - 1))
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::preset()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
