use kurbo::Rect;
use taffy::prelude::{AvailableSpace, NodeId, Size};
use taffy::style::{
    AlignItems, Dimension, Display, FlexDirection, FlexWrap, JustifyContent, LengthPercentage,
    LengthPercentageAuto, Style,
};

use crate::eval::evaluator::FrameGraph;
use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{TutorialError, TutorialResult};
use crate::layout::text::TextLayoutEngine;
use crate::scene::model::{
    Align, Direction, Edges, Element, ElementKind, Justify, Length, Style as ElementStyle,
    TextStyle,
};

#[derive(Debug, Clone, Copy)]
struct TextNodeCtx<'a> {
    content: &'a str,
    style: TextStyle,
}

/// An element with its resolved border box in canvas pixels (before post-layout transforms).
#[derive(Debug, Clone)]
pub struct LaidOutNode<'a> {
    /// Source element.
    pub element: &'a Element,
    /// Absolute border box.
    pub rect: Rect,
    /// Children in paint order.
    pub children: Vec<LaidOutNode<'a>>,
}

impl LaidOutNode<'_> {
    /// Border box shrunk by padding and border widths.
    pub fn content_rect(&self) -> Rect {
        let s = &self.element.style;
        let bw = f64::from(s.border.map_or(0.0, |b| b.width));
        let p = s.padding;
        Rect::new(
            self.rect.x0 + f64::from(p.left) + bw,
            self.rect.y0 + f64::from(p.top) + bw,
            self.rect.x1 - f64::from(p.right) - bw,
            self.rect.y1 - f64::from(p.bottom) - bw,
        )
    }
}

/// A laid-out frame graph.
#[derive(Debug, Clone)]
pub struct LaidOutFrame<'a> {
    /// Output size.
    pub canvas: Canvas,
    /// Full-frame background color.
    pub background: Color,
    /// Root node, sized to the canvas.
    pub root: LaidOutNode<'a>,
}

fn dimension(len: Length) -> Dimension {
    match len {
        Length::Auto => Dimension::auto(),
        Length::Px(v) => Dimension::length(v),
        Length::Percent(v) => Dimension::percent(v),
    }
}

fn edges_lp(e: Edges) -> taffy::geometry::Rect<LengthPercentage> {
    taffy::geometry::Rect {
        left: LengthPercentage::length(e.left),
        right: LengthPercentage::length(e.right),
        top: LengthPercentage::length(e.top),
        bottom: LengthPercentage::length(e.bottom),
    }
}

fn edges_lpa(e: Edges) -> taffy::geometry::Rect<LengthPercentageAuto> {
    taffy::geometry::Rect {
        left: LengthPercentageAuto::length(e.left),
        right: LengthPercentageAuto::length(e.right),
        top: LengthPercentageAuto::length(e.top),
        bottom: LengthPercentageAuto::length(e.bottom),
    }
}

pub(crate) fn taffy_style(s: &ElementStyle) -> Style {
    let border = s.border.map_or(0.0, |b| b.width);
    Style {
        display: Display::Flex,
        flex_direction: match s.direction {
            Direction::Row => FlexDirection::Row,
            Direction::Column => FlexDirection::Column,
        },
        flex_wrap: if s.wrap {
            FlexWrap::Wrap
        } else {
            FlexWrap::NoWrap
        },
        align_items: s.align_items.map(|a| match a {
            Align::Start => AlignItems::FlexStart,
            Align::Center => AlignItems::Center,
            Align::End => AlignItems::FlexEnd,
            Align::Stretch => AlignItems::Stretch,
        }),
        justify_content: s.justify_content.map(|j| match j {
            Justify::Start => JustifyContent::FlexStart,
            Justify::Center => JustifyContent::Center,
            Justify::End => JustifyContent::FlexEnd,
            Justify::SpaceBetween => JustifyContent::SpaceBetween,
        }),
        gap: Size {
            width: LengthPercentage::length(s.gap),
            height: LengthPercentage::length(s.gap),
        },
        padding: edges_lp(s.padding),
        border: edges_lp(Edges::all(border)),
        margin: edges_lpa(s.margin),
        size: Size {
            width: dimension(s.width),
            height: dimension(s.height),
        },
        min_size: Size {
            width: s.min_width.map_or(Dimension::auto(), Dimension::length),
            height: Dimension::auto(),
        },
        max_size: Size {
            width: s.max_width.map_or(Dimension::auto(), Dimension::length),
            height: Dimension::auto(),
        },
        flex_grow: s.flex_grow,
        ..Default::default()
    }
}

fn build_subtree<'a>(
    tree: &mut taffy::TaffyTree<TextNodeCtx<'a>>,
    el: &'a Element,
) -> Result<NodeId, taffy::TaffyError> {
    let style = taffy_style(&el.style);
    match &el.kind {
        ElementKind::Text { content, text } => tree.new_leaf_with_context(
            style,
            TextNodeCtx {
                content,
                style: *text,
            },
        ),
        ElementKind::Container => {
            let children = el
                .children
                .iter()
                .map(|c| build_subtree(tree, c))
                .collect::<Result<Vec<_>, _>>()?;
            tree.new_with_children(style, &children)
        }
    }
}

fn collect<'a>(
    tree: &taffy::TaffyTree<TextNodeCtx<'a>>,
    el: &'a Element,
    nid: NodeId,
    origin: (f64, f64),
) -> Result<LaidOutNode<'a>, taffy::TaffyError> {
    let l = tree.layout(nid)?;
    let x0 = origin.0 + f64::from(l.location.x);
    let y0 = origin.1 + f64::from(l.location.y);
    let rect = Rect::new(
        x0,
        y0,
        x0 + f64::from(l.size.width),
        y0 + f64::from(l.size.height),
    );

    let child_ids = tree.children(nid)?;
    let children = el
        .children
        .iter()
        .zip(child_ids)
        .map(|(c, cid)| collect(tree, c, cid, (x0, y0)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LaidOutNode {
        element: el,
        rect,
        children,
    })
}

/// Solve flexbox layout for a frame graph.
///
/// The root element is forced to the canvas size. Text leaves are measured by `text`.
#[tracing::instrument(skip_all, fields(frame = graph.frame.0))]
pub fn layout_frame<'a>(
    graph: &'a FrameGraph,
    text: &mut TextLayoutEngine,
) -> TutorialResult<LaidOutFrame<'a>> {
    let canvas_w = graph.canvas.width as f32;
    let canvas_h = graph.canvas.height as f32;

    let mut tree = taffy::TaffyTree::<TextNodeCtx<'a>>::new();
    let root = build_subtree(&mut tree, &graph.root)?;
    let mut root_style = taffy_style(&graph.root.style);
    root_style.size = Size {
        width: Dimension::length(canvas_w),
        height: Dimension::length(canvas_h),
    };
    tree.set_style(root, root_style)?;

    let mut measure_err: Option<TutorialError> = None;
    tree.compute_layout_with_measure(
        root,
        Size {
            width: AvailableSpace::Definite(canvas_w),
            height: AvailableSpace::Definite(canvas_h),
        },
        |known, available, _node_id, node_ctx, _style| {
            if let Size {
                width: Some(width),
                height: Some(height),
            } = known
            {
                return Size { width, height };
            }
            let Some(ctx) = node_ctx else {
                return Size::ZERO;
            };
            let wrap_width = known.width.or(match available.width {
                AvailableSpace::Definite(w) => Some(w),
                AvailableSpace::MinContent => Some(0.0),
                AvailableSpace::MaxContent => None,
            });
            let (w, h) = match text.measure(ctx.content, &ctx.style, wrap_width) {
                Ok(m) => m,
                Err(e) => {
                    measure_err.get_or_insert(e);
                    (0.0, 0.0)
                }
            };
            Size {
                width: known.width.unwrap_or(w),
                height: known.height.unwrap_or(h),
            }
        },
    )?;
    if let Some(e) = measure_err {
        return Err(e);
    }

    let root = collect(&tree, &graph.root, root, (0.0, 0.0))?;
    Ok(LaidOutFrame {
        canvas: graph.canvas,
        background: graph.background,
        root,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/taffy_bridge.rs"]
mod tests;
