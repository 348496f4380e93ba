use super::*;
use crate::foundation::core::Canvas;

fn list(ops: Vec<DrawOp>) -> DisplayList {
    DisplayList {
        canvas: Canvas {
            width: 40,
            height: 20,
        },
        background: Color::rgb(15, 15, 26),
        ops,
    }
}

fn rect_op(fill: Option<Fill>, border: Option<Border>, opacity: f32) -> DrawOp {
    DrawOp::Rect {
        transform: Affine::translate((10.0, 0.0)),
        width: 20.0,
        height: 20.0,
        radius: 0.0,
        fill,
        border,
        opacity,
    }
}

#[test]
fn background_fills_the_canvas() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let frame = be.render_display_list(&list(vec![])).unwrap();
    assert_eq!((frame.width, frame.height), (40, 20));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 40 * 20 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [15, 15, 26, 255]);
    }
}

#[test]
fn solid_rect_is_drawn_in_place() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let frame = be
        .render_display_list(&list(vec![rect_op(
            Some(Fill::solid(Color::rgb(255, 0, 0))),
            None,
            1.0,
        )]))
        .unwrap();
    assert_eq!(frame.pixel(15, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(5, 10), Some([15, 15, 26, 255]));
    assert_eq!(frame.pixel(35, 10), Some([15, 15, 26, 255]));
}

#[test]
fn opacity_blends_over_background() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let frame = be
        .render_display_list(&list(vec![rect_op(
            Some(Fill::solid(Color::rgb(255, 255, 255))),
            None,
            0.5,
        )]))
        .unwrap();
    let [r, _, _, a] = frame.pixel(20, 10).unwrap();
    assert_eq!(a, 255);
    assert!((125..=140).contains(&r), "r = {r}");
}

#[test]
fn border_ring_leaves_the_interior_untouched() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let frame = be
        .render_display_list(&list(vec![rect_op(
            None,
            Some(Border {
                width: 4.0,
                color: Color::rgb(0, 255, 0),
            }),
            1.0,
        )]))
        .unwrap();
    assert_eq!(frame.pixel(11, 10), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(20, 10), Some([15, 15, 26, 255]));
}

#[test]
fn gradient_runs_from_start_to_end_color() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let op = DrawOp::Rect {
        transform: Affine::IDENTITY,
        width: 40.0,
        height: 20.0,
        radius: 0.0,
        fill: Some(Fill::LinearGradient {
            angle_deg: 90.0,
            from: Color::rgb(0, 0, 0),
            to: Color::rgb(255, 255, 255),
        }),
        border: None,
        opacity: 1.0,
    };
    let frame = be.render_display_list(&list(vec![op])).unwrap();
    let left = frame.pixel(0, 10).unwrap()[0];
    let right = frame.pixel(39, 10).unwrap()[0];
    assert!(left < 20, "left = {left}");
    assert!(right > 235, "right = {right}");
    assert_eq!(be.gradient_cache.len(), 1);
}

#[test]
fn text_without_fonts_draws_nothing() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let op = DrawOp::Text {
        transform: Affine::IDENTITY,
        content: "hello".to_string(),
        width: 40.0,
        height: 20.0,
        paint: Fill::solid(Color::rgb(255, 255, 255)),
        runs: vec![],
        opacity: 1.0,
    };
    let frame = be.render_display_list(&list(vec![op])).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px == [15, 15, 26, 255]));
}

#[test]
fn rendering_twice_is_identical() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let l = list(vec![rect_op(
        Some(Fill::solid(Color::rgba(10, 200, 30, 128))),
        None,
        0.7,
    )]);
    let a = be.render_display_list(&l).unwrap();
    let b = be.render_display_list(&l).unwrap();
    assert_eq!(a, b);
}

#[test]
fn oversized_canvas_is_rejected() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let mut l = list(vec![]);
    l.canvas.width = 70_000;
    assert!(be.render_display_list(&l).is_err());
}

#[test]
fn rounded_rect_path_winds_both_ways() {
    use vello_cpu::kurbo::Shape as _;
    let mut cw = vello_cpu::kurbo::BezPath::new();
    push_rounded_rect(&mut cw, 0.0, 0.0, 10.0, 10.0, 2.0, true);
    let mut ccw = vello_cpu::kurbo::BezPath::new();
    push_rounded_rect(&mut ccw, 0.0, 0.0, 10.0, 10.0, 2.0, false);
    assert!((cw.area() + ccw.area()).abs() < 1e-9);
    assert!(cw.area().abs() > 90.0 && cw.area().abs() < 100.0);
}

#[test]
fn shadow_darkens_below_the_box_and_fades_out() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let bg = Color::rgb(200, 200, 200);
    let mut dl = list(vec![DrawOp::Shadow {
        transform: Affine::translate((10.0, 4.0)),
        width: 20.0,
        height: 8.0,
        radius: 2.0,
        std_dev: 2.0,
        color: Color::rgba(0, 0, 0, 128),
        opacity: 1.0,
    }]);
    dl.background = bg;
    let frame = be.render_display_list(&dl).unwrap();
    let [center, ..] = frame.pixel(20, 8).unwrap();
    let [far, ..] = frame.pixel(1, 1).unwrap();
    assert!(center < 150, "center = {center}");
    assert_eq!(far, 200);
}
