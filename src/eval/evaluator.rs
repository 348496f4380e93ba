use crate::composition::config::CompositionConfig;
use crate::composition::timeline::ActiveScene;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::TutorialResult;
use crate::scene::model::{Align, Element, Justify, Length};
use crate::scenes::render_scene;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything drawn for one frame, before layout.
pub struct FrameGraph {
    /// Evaluated global frame.
    pub frame: FrameIndex,
    /// Active scene, `None` outside the timeline.
    pub scene: Option<ActiveScene>,
    /// Output size.
    pub canvas: Canvas,
    /// Full-frame background color.
    pub background: Color,
    /// Canvas-sized root holding the scene tree (empty outside the timeline).
    pub root: Element,
}

/// Stateless evaluator from composition timeline to frame graph.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp), fields(comp = %comp.id))]
    /// Evaluate one frame.
    ///
    /// Frames past the end of the timeline produce a background-only graph.
    pub fn eval_frame(comp: &CompositionConfig, frame: FrameIndex) -> TutorialResult<FrameGraph> {
        comp.canvas.validate()?;

        let active = comp.timeline.locate(frame);
        let mut root = Element::column()
            .size(Length::Percent(1.0), Length::Percent(1.0))
            .align_items(Align::Center)
            .justify(Justify::Center);

        match active {
            Some(a) => {
                let local = i64::try_from(a.local_frame).unwrap_or(i64::MAX);
                tracing::trace!(scene = %a.scene, local, "active scene");
                root = root.child(render_scene(a.scene, local, &comp.theme));
            }
            None => tracing::debug!(frame = frame.0, "frame outside timeline, background only"),
        }

        Ok(FrameGraph {
            frame,
            scene: active,
            canvas: comp.canvas,
            background: comp.theme.background_color,
            root,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
