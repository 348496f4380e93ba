use super::*;

const ENTRY: TranscriptEntry = TranscriptEntry {
    command: "npm --version",
    output: Some("11.0.0 ✓"),
};

fn typed_text(el: &Element) -> &str {
    el.children[0].children[1].text_content().unwrap()
}

fn has_cursor(el: &Element) -> bool {
    el.children[0].children.len() == 3
}

#[test]
fn nothing_typed_before_delay() {
    let el = terminal_command(&ENTRY, 100, 300, &Theme::DEFAULT);
    assert_eq!(el.style.opacity, 0.0);
    assert_eq!(typed_text(&el), "");
    assert!(has_cursor(&el));
    assert_eq!(el.children.len(), 1);
}

#[test]
fn types_one_char_every_two_frames() {
    let el = terminal_command(&ENTRY, 300 + 7, 300, &Theme::DEFAULT);
    assert_eq!(typed_text(&el), "npm");
    assert!(has_cursor(&el));
}

#[test]
fn cursor_blinks_on_the_undelayed_frame_and_goes_away_when_done() {
    let on = terminal_command(&ENTRY, 3, 0, &Theme::DEFAULT);
    assert_eq!(on.children[0].children[2].style.opacity, 1.0);
    let off = terminal_command(&ENTRY, 7, 0, &Theme::DEFAULT);
    assert_eq!(off.children[0].children[2].style.opacity, 0.0);

    let len = ENTRY.command.chars().count() as i64;
    let done = terminal_command(&ENTRY, 2 * len, 0, &Theme::DEFAULT);
    assert_eq!(typed_text(&done), ENTRY.command);
    assert!(!has_cursor(&done));
}

#[test]
fn output_fades_in_thirty_frames_after_typing() {
    let len = ENTRY.command.chars().count() as i64;
    let start = 2 * len + 30;

    let before = terminal_command(&ENTRY, start, 0, &Theme::DEFAULT);
    assert_eq!(before.children.len(), 1, "zero-opacity output is not emitted");

    let mid = terminal_command(&ENTRY, start + 15, 0, &Theme::DEFAULT);
    assert_eq!(mid.children.len(), 2);
    assert!((mid.children[1].style.opacity - 0.35).abs() < 1e-6);

    let full = terminal_command(&ENTRY, start + 90, 0, &Theme::DEFAULT);
    assert!((full.children[1].style.opacity - 0.7).abs() < 1e-6);
    assert_eq!(full.children[1].text_content(), ENTRY.output);
}

#[test]
fn entries_without_output_never_grow_an_output_block() {
    let bare = TranscriptEntry {
        command: "ls",
        output: None,
    };
    let el = terminal_command(&bare, 500, 0, &Theme::DEFAULT);
    assert_eq!(el.children.len(), 1);
}

#[test]
fn multibyte_commands_count_chars() {
    assert_eq!(output_progress(2 * 3 + 30 + 15, 0, 3), 0.5);
}
