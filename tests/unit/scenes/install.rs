use super::*;

fn command_blocks(el: &Element) -> &[Element] {
    &el.children[3].children
}

#[test]
fn step_one_lists_three_commands_three_hundred_frames_apart() {
    let el = install_scene(1, 0, &Theme::DEFAULT);
    assert!(el.find_text("检查系统环境").is_some());
    assert!(el.find_text("1/5").is_some());
    assert_eq!(command_blocks(&el).len(), 3);
    assert_eq!(el.children[3].style.max_width, Some(1200.0));

    let el = install_scene(1, 299, &Theme::DEFAULT);
    assert_eq!(command_blocks(&el)[1].style.opacity, 0.0);
    let el = install_scene(1, 310, &Theme::DEFAULT);
    assert!(command_blocks(&el)[1].style.opacity > 0.0);
    assert_eq!(command_blocks(&el)[2].style.opacity, 0.0);
}

#[test]
fn each_step_has_its_own_copy() {
    assert_eq!(install_copy(1).title, "检查系统环境");
    assert_eq!(install_copy(2).title, "安装 OpenClaw");
    assert_eq!(install_copy(3).title, "运行配置向导");
    assert_eq!(install_copy(3).transcript.len(), 1);
    assert_eq!(
        install_copy(2).transcript[0].command,
        "curl -fsSL https://openclaw.ai/install.sh | bash"
    );
}

#[test]
fn wizard_output_appears_late_in_step_three() {
    let cmd = install_copy(3).transcript[0].command;
    let typed = 2 * cmd.chars().count() as i64;
    let el = install_scene(3, typed + 30, &Theme::DEFAULT);
    assert_eq!(command_blocks(&el)[0].children.len(), 1);
    let el = install_scene(3, 719, &Theme::DEFAULT);
    assert_eq!(command_blocks(&el)[0].children.len(), 2);
    assert!(el.find_text("3/5").is_some());
}
