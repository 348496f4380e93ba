use super::*;

#[test]
fn second_command_starts_at_frame_240() {
    let el = gateway_scene(239, &Theme::DEFAULT);
    let cmds = &el.children[3].children;
    assert_eq!(cmds.len(), 2);
    assert_eq!(cmds[1].style.opacity, 0.0);
    assert_eq!(el.children[3].style.max_width, Some(1000.0));

    let el = gateway_scene(250, &Theme::DEFAULT);
    assert!(el.children[3].children[1].style.opacity > 0.0);
    assert!(el.find_text("4/5").is_some());
    assert!(el.find_text("开始使用 OpenClaw").is_some());
}
