use super::*;
use crate::composition::config::CompositionConfig;
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::FrameIndex;
use crate::scene::model::{Fill, TextStyle};

fn graph(root: Element) -> FrameGraph {
    FrameGraph {
        frame: FrameIndex(0),
        scene: None,
        canvas: Canvas {
            width: 200,
            height: 100,
        },
        background: Color::rgb(0, 0, 0),
        root,
    }
}

fn white(size: f32) -> TextStyle {
    TextStyle::sans(size, Color::rgb(255, 255, 255)).line_height(1.0)
}

#[test]
fn root_is_forced_to_canvas() {
    let g = graph(Element::column());
    let mut text = TextLayoutEngine::new();
    let laid = layout_frame(&g, &mut text).unwrap();
    assert_eq!(laid.root.rect, Rect::new(0.0, 0.0, 200.0, 100.0));
    assert!(laid.root.children.is_empty());
}

#[test]
fn centered_text_uses_heuristic_metrics() {
    let g = graph(
        Element::centered_fill().child(Element::text("abcd", white(10.0))),
    );
    let mut text = TextLayoutEngine::new();
    let laid = layout_frame(&g, &mut text).unwrap();
    let fill = &laid.root.children[0];
    assert_eq!(fill.rect, Rect::new(0.0, 0.0, 200.0, 100.0));

    let t = &fill.children[0];
    assert!((t.rect.width() - 24.0).abs() < 1e-3);
    assert!((t.rect.height() - 10.0).abs() < 1e-3);
    assert!((t.rect.x0 - 88.0).abs() < 1e-3);
    assert!((t.rect.y0 - 45.0).abs() < 1e-3);
}

#[test]
fn rects_are_absolute_and_padding_shrinks_content() {
    let g = graph(
        Element::column().child(
            Element::column()
                .padding(Edges::all(10.0))
                .margin_top(20.0)
                .border(2.0, Color::rgb(255, 0, 0))
                .background(Fill::solid(Color::rgb(1, 2, 3)))
                .child(Element::text("ab", white(10.0))),
        ),
    );
    let mut text = TextLayoutEngine::new();
    let laid = layout_frame(&g, &mut text).unwrap();
    let card = &laid.root.children[0];
    assert_eq!(card.rect.y0, 20.0);
    assert_eq!(card.rect.height(), 10.0 + 2.0 * 12.0);

    let content = card.content_rect();
    assert_eq!(content.y0, 32.0);
    assert_eq!(content.x0, 12.0);

    let t = &card.children[0];
    assert_eq!(t.rect.x0, 12.0);
    assert_eq!(t.rect.y0, 32.0);
}

#[test]
fn max_width_wraps_text() {
    let g = graph(
        Element::column()
            .align_items(Align::Start)
            .child(Element::column().max_width(30.0).child(Element::text("aaaa bbbb", white(10.0)))),
    );
    let mut text = TextLayoutEngine::new();
    let laid = layout_frame(&g, &mut text).unwrap();
    let t = &laid.root.children[0].children[0];
    assert!(t.rect.width() <= 30.0 + 1e-3);
    assert!((t.rect.height() - 20.0).abs() < 1e-3);
}

#[test]
fn row_gap_spaces_children() {
    let g = graph(
        Element::row()
            .gap(8.0)
            .align_items(Align::Start)
            .children([Element::text("ab", white(10.0)), Element::text("cd", white(10.0))]),
    );
    let mut text = TextLayoutEngine::new();
    let laid = layout_frame(&g, &mut text).unwrap();
    let a = &laid.root.children[0];
    let b = &laid.root.children[1];
    assert!((b.rect.x0 - (a.rect.x1 + 8.0)).abs() < 1e-3);
}

#[test]
fn invalid_text_size_is_reported() {
    let g = graph(Element::column().child(Element::text("x", white(0.0))));
    let mut text = TextLayoutEngine::new();
    let err = layout_frame(&g, &mut text).unwrap_err();
    assert!(matches!(err, TutorialError::Layout(_)));
}

#[test]
fn every_scene_fits_the_canvas_width() {
    let comp = CompositionConfig::default();
    let mut text = TextLayoutEngine::new();
    for f in [0_u64, 90, 200, 400, 800, 1200, 1600, 2000, 2400, 2650] {
        let g = Evaluator::eval_frame(&comp, FrameIndex(f)).unwrap();
        let laid = layout_frame(&g, &mut text).unwrap();
        fn check(n: &LaidOutNode<'_>, w: f64, f: u64) {
            assert!(n.rect.x0 >= -1e-3 && n.rect.x1 <= w + 1e-3, "frame {f}: {:?}", n.rect);
            for c in &n.children {
                check(c, w, f);
            }
        }
        check(&laid.root, f64::from(comp.canvas.width), f);
    }
}
