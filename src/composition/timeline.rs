use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{TutorialError, TutorialResult};

/// The eight scenes of the tutorial, in playback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Logo, tagline and capability chips.
    Intro,
    /// 2×2 grid of feature cards.
    Features,
    /// Step 1: checking the Node.js environment.
    InstallCheck,
    /// Step 2: running the install script.
    InstallScript,
    /// Step 3: the onboarding wizard.
    InstallWizard,
    /// Step 4: gateway status and dashboard.
    Gateway,
    /// Step 5: sending a test message.
    Message,
    /// Closing card with links.
    Outro,
}

impl SceneId {
    /// Every scene in playback order.
    pub const ALL: [Self; 8] = [
        Self::Intro,
        Self::Features,
        Self::InstallCheck,
        Self::InstallScript,
        Self::InstallWizard,
        Self::Gateway,
        Self::Message,
        Self::Outro,
    ];

    /// Short stable name used in logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Features => "features",
            Self::InstallCheck => "install-1",
            Self::InstallScript => "install-2",
            Self::InstallWizard => "install-3",
            Self::Gateway => "gateway",
            Self::Message => "message",
            Self::Outro => "outro",
        }
    }

    /// Position in the five-step walkthrough, for scenes that show a step indicator.
    pub fn step(self) -> Option<u32> {
        match self {
            Self::InstallCheck => Some(1),
            Self::InstallScript => Some(2),
            Self::InstallWizard => Some(3),
            Self::Gateway => Some(4),
            Self::Message => Some(5),
            Self::Intro | Self::Features | Self::Outro => None,
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A scene occupying `[start, start + duration)` on the global timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneWindow {
    /// Scene shown in this window.
    pub scene: SceneId,
    /// First global frame.
    pub start: u64,
    /// Length in frames, always > 0 once validated.
    pub duration: u64,
}

impl SceneWindow {
    /// Build a window.
    pub const fn new(scene: SceneId, start: u64, duration: u64) -> Self {
        Self {
            scene,
            start,
            duration,
        }
    }

    /// One past the last frame.
    pub fn end(self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    /// Window as a frame range.
    pub fn range(self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start),
            end: FrameIndex(self.end()),
        }
    }
}

/// The reel's scene table: contiguous windows covering frames `[0, 2700)`.
pub const STANDARD_WINDOWS: [SceneWindow; 8] = [
    SceneWindow::new(SceneId::Intro, 0, 180),
    SceneWindow::new(SceneId::Features, 180, 180),
    SceneWindow::new(SceneId::InstallCheck, 360, 360),
    SceneWindow::new(SceneId::InstallScript, 720, 480),
    SceneWindow::new(SceneId::InstallWizard, 1200, 720),
    SceneWindow::new(SceneId::Gateway, 1920, 360),
    SceneWindow::new(SceneId::Message, 2280, 240),
    SceneWindow::new(SceneId::Outro, 2520, 180),
];

/// Result of a timeline lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActiveScene {
    /// Scene to draw.
    pub scene: SceneId,
    /// The window the frame fell into.
    pub window: SceneWindow,
    /// Frame offset from the window start, in `[0, duration)`.
    pub local_frame: u64,
}

/// Ordered, contiguous table of scene windows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    windows: Vec<SceneWindow>,
}

impl Timeline {
    /// Validate and build a timeline.
    ///
    /// Windows must be non-empty, sorted, and each must start exactly where the previous ends.
    pub fn new(windows: Vec<SceneWindow>) -> TutorialResult<Self> {
        if windows.is_empty() {
            return Err(TutorialError::validation("timeline must have at least one window"));
        }
        for (i, w) in windows.iter().enumerate() {
            if w.duration == 0 {
                return Err(TutorialError::validation(format!(
                    "window {i} ({}) has zero duration",
                    w.scene
                )));
            }
            if w.start.checked_add(w.duration).is_none() {
                return Err(TutorialError::validation(format!(
                    "window {i} ({}) overflows the frame counter",
                    w.scene
                )));
            }
        }
        for (i, pair) in windows.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if next.start > prev.end() {
                return Err(TutorialError::validation(format!(
                    "gap between window {i} ({}) ending at {} and window {} ({}) starting at {}",
                    prev.scene,
                    prev.end(),
                    i + 1,
                    next.scene,
                    next.start
                )));
            }
            if next.start < prev.end() {
                return Err(TutorialError::validation(format!(
                    "window {} ({}) starting at {} overlaps window {i} ({}) ending at {}",
                    i + 1,
                    next.scene,
                    next.start,
                    prev.scene,
                    prev.end()
                )));
            }
        }
        Ok(Self { windows })
    }

    /// The fixed eight-scene table of the tutorial (2700 frames).
    pub fn standard() -> Self {
        Self {
            windows: STANDARD_WINDOWS.to_vec(),
        }
    }

    /// All windows in order.
    pub fn windows(&self) -> &[SceneWindow] {
        &self.windows
    }

    /// First covered frame.
    pub fn start_frame(&self) -> u64 {
        self.windows.first().map_or(0, |w| w.start)
    }

    /// One past the last covered frame.
    pub fn end_frame(&self) -> u64 {
        self.windows.last().map_or(0, |w| w.end())
    }

    /// Number of covered frames (sum of durations).
    pub fn total_frames(&self) -> u64 {
        self.end_frame() - self.start_frame()
    }

    /// Window holding `scene`, if present.
    pub fn window_of(&self, scene: SceneId) -> Option<SceneWindow> {
        self.windows.iter().copied().find(|w| w.scene == scene)
    }

    /// Resolve a global frame to its scene and local offset.
    ///
    /// Frames outside the table resolve to `None`; callers draw the background only.
    pub fn locate(&self, frame: FrameIndex) -> Option<ActiveScene> {
        let idx = self.windows.partition_point(|w| w.end() <= frame.0);
        let window = *self.windows.get(idx)?;
        if frame.0 < window.start {
            return None;
        }
        Some(ActiveScene {
            scene: window.scene,
            window,
            local_frame: frame.0 - window.start,
        })
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/timeline.rs"]
mod tests;
