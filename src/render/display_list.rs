use kurbo::{Affine, Vec2};

use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::TutorialResult;
use crate::layout::taffy_bridge::{LaidOutFrame, LaidOutNode};
use crate::layout::text::{GlyphRun, TextLayoutEngine};
use crate::scene::model::{Border, ElementKind, Fill};

/// Flat, painter-ordered draw list for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DisplayList {
    /// Output size.
    pub canvas: Canvas,
    /// Color filling the whole canvas before any op.
    pub background: Color,
    /// Draw operations, back to front.
    pub ops: Vec<DrawOp>,
}

/// One draw operation. Geometry is local to `transform`, with the origin at the box's top-left.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Blurred rounded box painted under a shadowed element.
    Shadow {
        /// Local to canvas transform, offset already applied.
        transform: Affine,
        /// Box width.
        width: f64,
        /// Box height.
        height: f64,
        /// Corner radius of the casting box.
        radius: f64,
        /// Gaussian standard deviation in pixels.
        std_dev: f64,
        /// Shadow color.
        color: Color,
        /// Accumulated opacity in (0, 1].
        opacity: f32,
    },
    /// Rounded box with optional fill and border.
    Rect {
        /// Local to canvas transform.
        transform: Affine,
        /// Box width.
        width: f64,
        /// Box height.
        height: f64,
        /// Corner radius, clamped to half the shorter side.
        radius: f64,
        /// Interior paint.
        fill: Option<Fill>,
        /// Inside stroke.
        border: Option<Border>,
        /// Accumulated opacity in (0, 1].
        opacity: f32,
    },
    /// Shaped text. `runs` is empty when no font is available.
    Text {
        /// Local to canvas transform (origin at the content box).
        transform: Affine,
        /// Source string after the typewriter cut.
        content: String,
        /// Content box width.
        width: f64,
        /// Content box height.
        height: f64,
        /// Glyph paint.
        paint: Fill,
        /// Positioned glyphs.
        runs: Vec<GlyphRun>,
        /// Accumulated opacity in (0, 1].
        opacity: f32,
    },
}

impl DrawOp {
    /// Accumulated opacity of the op.
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Shadow { opacity, .. } | Self::Rect { opacity, .. } | Self::Text { opacity, .. } => {
                *opacity
            }
        }
    }

    /// Local to canvas transform of the op.
    pub fn transform(&self) -> Affine {
        match self {
            Self::Shadow { transform, .. }
            | Self::Rect { transform, .. }
            | Self::Text { transform, .. } => *transform,
        }
    }
}

/// Post-layout transform of a node: translate, then scale around the box center.
fn node_transform(node: &LaidOutNode<'_>) -> Affine {
    let s = &node.element.style;
    let center = node.rect.center().to_vec2();
    Affine::translate(center)
        * Affine::translate(Vec2::new(0.0, f64::from(s.translate_y)))
        * Affine::scale(f64::from(s.scale))
        * Affine::translate(-center)
}

/// Flatten a laid-out frame into draw operations.
///
/// Parents paint before their children and siblings in order; a shadow paints just before its box. Subtrees whose accumulated opacity
/// reaches zero, or whose scale is zero, produce no ops.
#[tracing::instrument(skip_all)]
pub fn compile_frame(
    laid: &LaidOutFrame<'_>,
    text: &mut TextLayoutEngine,
) -> TutorialResult<DisplayList> {
    let mut ops = Vec::new();
    compile_node(&laid.root, Affine::IDENTITY, 1.0, text, &mut ops)?;
    Ok(DisplayList {
        canvas: laid.canvas,
        background: laid.background,
        ops,
    })
}

fn compile_node(
    node: &LaidOutNode<'_>,
    parent: Affine,
    parent_opacity: f32,
    text: &mut TextLayoutEngine,
    out: &mut Vec<DrawOp>,
) -> TutorialResult<()> {
    let s = &node.element.style;
    let opacity = parent_opacity * s.opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || s.scale == 0.0 {
        return Ok(());
    }
    let world = parent * node_transform(node);
    let rect = node.rect;
    let radius = f64::from(s.radius.max(0.0)).min(rect.width().min(rect.height()) / 2.0);

    if let Some(shadow) = s.shadow
        && shadow.color.a > 0
    {
        out.push(DrawOp::Shadow {
            transform: world * Affine::translate((rect.x0, rect.y0 + f64::from(shadow.offset_y))),
            width: rect.width(),
            height: rect.height(),
            radius,
            // CSS blur radius is twice the standard deviation.
            std_dev: f64::from(shadow.blur.max(0.0)) / 2.0,
            color: shadow.color,
            opacity,
        });
    }

    if s.background.is_some() || s.border.is_some() {
        out.push(DrawOp::Rect {
            transform: world * Affine::translate((rect.x0, rect.y0)),
            width: rect.width(),
            height: rect.height(),
            radius,
            fill: s.background,
            border: s.border.filter(|b| b.width > 0.0),
            opacity,
        });
    }

    if let ElementKind::Text {
        content,
        text: style,
    } = &node.element.kind
        && !content.is_empty()
    {
        let content_box = node.content_rect();
        let shaped = text.shape(content, style, Some(content_box.width() as f32))?;
        out.push(DrawOp::Text {
            transform: world * Affine::translate((content_box.x0, content_box.y0)),
            content: content.clone(),
            width: content_box.width(),
            height: content_box.height(),
            paint: style.paint(),
            runs: shaped.map(|s| s.runs).unwrap_or_default(),
            opacity,
        });
    }

    for child in &node.children {
        compile_node(child, world, opacity, text, out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/display_list.rs"]
mod tests;
