//! Frame-deterministic renderer for the OpenClaw tutorial reel.
//!
//! The reel is a fixed 2700-frame timeline of eight scenes. Every frame is a pure function of its
//! index and the theme:
//!
//! - [`Evaluator::eval_frame`] selects the active scene and builds its visual tree
//! - [`layout_frame`] solves flexbox boxes and text metrics
//! - [`compile_frame`] flattens the tree into a painter-ordered [`DisplayList`]
//! - a [`RenderBackend`] rasterizes it, and a [`FrameSink`] consumes the frames in order
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod composition;
/// Static copy shown by the scenes.
pub mod content;
pub(crate) mod encode;
pub(crate) mod eval;
pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod scenes;
pub(crate) mod widgets;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{TutorialError, TutorialResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, clamped, interpolate, try_interpolate,
};
pub use crate::animation::spring::{SpringConfig, spring, spring_at};
pub use crate::animation::typewriter::{
    CURSOR_ON_FRAMES, CURSOR_PERIOD, FRAMES_PER_CHAR, char_prefix, cursor_visible,
    revealed_chars, typed_prefix,
};

pub use crate::composition::config::{COMPOSITION_ID, CompositionConfig, PlayerConfig};
pub use crate::composition::theme::Theme;
pub use crate::composition::timeline::{
    ActiveScene, STANDARD_WINDOWS, SceneId, SceneWindow, Timeline,
};

pub use crate::scene::model::{
    Align, Border, Direction, Edges, Element, ElementKind, Fill, FontRole, Justify, Length, Shadow,
    Style, TextAlign, TextStyle,
};
pub use crate::scenes::render_scene;
pub use crate::widgets::SPRING_FPS;
pub use crate::widgets::chip::chip;
pub use crate::widgets::feature_card::feature_card;
pub use crate::widgets::logo::{LOGO_GRADIENT, logo};
pub use crate::widgets::step_indicator::step_indicator;
pub use crate::widgets::terminal::{CURSOR, PROMPT, output_progress, terminal_command};

pub use crate::eval::evaluator::{Evaluator, FrameGraph};
pub use crate::layout::taffy_bridge::{LaidOutFrame, LaidOutNode, layout_frame};
pub use crate::layout::text::{
    FontSet, GlyphRun, PositionedGlyph, ShapedText, TextLayoutEngine, heuristic_measure,
    normalize_whitespace,
};

pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::display_list::{DisplayList, DrawOp, compile_frame};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, RenderToMp4Opts, display_list_for_frame,
    display_list_for_graph, render_frame, render_frames, render_frames_with_stats,
    render_to_mp4, render_to_sink,
};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{
    FrameSink, InMemorySink, PngSequenceSink, SinkConfig, ensure_parent_dir, write_png,
};
