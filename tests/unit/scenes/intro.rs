use super::*;

fn opacities(frame: i64) -> [f32; 4] {
    let el = intro_scene(frame, &Theme::DEFAULT);
    [
        el.children[0].style.opacity,
        el.children[1].style.opacity,
        el.children[2].style.opacity,
        el.children[3].style.opacity,
    ]
}

#[test]
fn everything_hidden_on_first_frame() {
    assert_eq!(opacities(0), [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn staggered_reveal() {
    let [_, title, subtitle, chips] = opacities(45);
    assert_eq!(title, 1.0);
    assert_eq!(subtitle, 0.5);
    assert_eq!(chips, 0.0);

    let [logo, title, subtitle, chips] = opacities(179);
    assert!((logo - 1.0).abs() < 1e-3);
    assert_eq!([title, subtitle, chips], [1.0, 1.0, 1.0]);
}

#[test]
fn shows_copy_and_four_chips() {
    let el = intro_scene(100, &Theme::DEFAULT);
    assert!(el.find_text("AI 驱动的智能 Agent 平台").is_some());
    assert!(el.find_text("下一代 AI 助手，让开发效率倍增").is_some());
    assert_eq!(el.children[3].children.len(), 4);
    assert!(el.find_text("🔌 安全网关").is_some());
}
