use super::*;

#[test]
fn clamped_holds_endpoints() {
    assert_eq!(clamped(-20, [0.0, 30.0], [0.0, 1.0]), 0.0);
    assert_eq!(clamped(0, [0.0, 30.0], [0.0, 1.0]), 0.0);
    assert_eq!(clamped(30, [0.0, 30.0], [0.0, 1.0]), 1.0);
    assert_eq!(clamped(9_000, [0.0, 30.0], [0.0, 1.0]), 1.0);
    assert_eq!(clamped(15, [0.0, 30.0], [0.0, 1.0]), 0.5);
}

#[test]
fn decreasing_output_range() {
    // Feature cards slide from +50px to rest.
    assert_eq!(clamped(0, [0.0, 30.0], [50.0, 0.0]), 50.0);
    assert_eq!(clamped(15, [0.0, 30.0], [50.0, 0.0]), 25.0);
    assert_eq!(clamped(45, [0.0, 30.0], [50.0, 0.0]), 0.0);
}

#[test]
fn monotonic_between_endpoints() {
    let mut prev = f64::NEG_INFINITY;
    for f in 30..=60 {
        let v = clamped(f, [30.0, 60.0], [0.0, 1.0]);
        assert!(v >= prev);
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn extend_and_identity_extrapolation() {
    let opts = InterpolateOpts {
        extrapolate_left: Extrapolate::Identity,
        extrapolate_right: Extrapolate::Extend,
        ..InterpolateOpts::CLAMPED
    };
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 100.0], opts), -5.0);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 100.0], opts), 200.0);
}

#[test]
fn easing_shapes_progress_inside_range() {
    let opts = InterpolateOpts::CLAMPED.with_ease(Ease::InQuad);
    assert_eq!(interpolate(5.0, [0.0, 10.0], [0.0, 1.0], opts), 0.25);
}

#[test]
fn degenerate_range_is_a_step() {
    assert_eq!(clamped(9, [10.0, 10.0], [0.0, 1.0]), 0.0);
    assert_eq!(clamped(10, [10.0, 10.0], [0.0, 1.0]), 1.0);
}

#[test]
fn checked_form_rejects_bad_input() {
    let o = InterpolateOpts::CLAMPED;
    assert!(try_interpolate(1.0, [3.0, 3.0], [0.0, 1.0], o).is_err());
    assert!(try_interpolate(1.0, [4.0, 3.0], [0.0, 1.0], o).is_err());
    assert!(try_interpolate(f64::NAN, [0.0, 3.0], [0.0, 1.0], o).is_err());
    assert!(matches!(
        try_interpolate(1.0, [0.0, 2.0], [0.0, 1.0], o),
        Ok(v) if v == 0.5
    ));
}
