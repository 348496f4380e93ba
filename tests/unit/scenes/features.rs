use super::*;

fn cards(el: &Element) -> Vec<&Element> {
    el.children[2]
        .children
        .iter()
        .flat_map(|row| row.children.iter())
        .collect()
}

#[test]
fn two_by_two_grid() {
    let el = features_scene(60, &Theme::DEFAULT);
    let grid = &el.children[2];
    assert_eq!(grid.children.len(), 2);
    assert!(grid.children.iter().all(|row| row.children.len() == 2));
    assert_eq!(grid.style.max_width, Some(1400.0));
}

#[test]
fn cards_are_staggered_by_ten_frames() {
    let el = features_scene(20, &Theme::DEFAULT);
    let ys: Vec<f32> = cards(&el).iter().map(|c| c.style.translate_y).collect();
    // elapsed 20, 10, 0, -10 → 50 - 50·elapsed/30, clamped
    assert!((ys[0] - 50.0 / 3.0).abs() < 1e-4);
    assert!((ys[1] - 100.0 / 3.0).abs() < 1e-4);
    assert_eq!(ys[2], 50.0);
    assert_eq!(ys[3], 50.0);
    assert_eq!(cards(&el)[3].style.opacity, 0.0);
}

#[test]
fn copy_is_present() {
    let el = features_scene(0, &Theme::DEFAULT);
    assert!(el.find_text("强大的核心功能").is_some());
    assert!(el.find_text("构建 AI 驱动工作流所需的一切").is_some());
    assert!(el.find_text("安全网关").is_some());
}
