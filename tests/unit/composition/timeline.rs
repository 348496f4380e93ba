use super::*;

#[test]
fn standard_table_passes_validation() {
    let t = Timeline::new(STANDARD_WINDOWS.to_vec()).unwrap();
    assert_eq!(t, Timeline::standard());
    assert_eq!(t.total_frames(), 2700);
    assert_eq!(t.start_frame(), 0);
}

#[test]
fn window_boundaries() {
    let t = Timeline::standard();
    let cases = [
        (0, SceneId::Intro, 0),
        (179, SceneId::Intro, 179),
        (180, SceneId::Features, 0),
        (359, SceneId::Features, 179),
        (360, SceneId::InstallCheck, 0),
        (720, SceneId::InstallScript, 0),
        (1199, SceneId::InstallScript, 479),
        (1200, SceneId::InstallWizard, 0),
        (1920, SceneId::Gateway, 0),
        (2280, SceneId::Message, 0),
        (2520, SceneId::Outro, 0),
        (2699, SceneId::Outro, 179),
    ];
    for (frame, scene, local) in cases {
        let a = t.locate(FrameIndex(frame)).unwrap();
        assert_eq!((a.scene, a.local_frame), (scene, local), "frame {frame}");
    }
}

#[test]
fn past_the_end_is_none() {
    let t = Timeline::standard();
    assert!(t.locate(FrameIndex(2700)).is_none());
    assert!(t.locate(FrameIndex(u64::MAX)).is_none());
}

#[test]
fn late_start_table_is_none_before_first_window() {
    let t = Timeline::new(vec![
        SceneWindow::new(SceneId::Intro, 10, 5),
        SceneWindow::new(SceneId::Outro, 15, 5),
    ])
    .unwrap();
    assert!(t.locate(FrameIndex(9)).is_none());
    assert_eq!(t.locate(FrameIndex(10)).unwrap().scene, SceneId::Intro);
    assert_eq!(t.locate(FrameIndex(19)).unwrap().local_frame, 4);
    assert_eq!(t.total_frames(), 10);
}

#[test]
fn rejects_zero_duration_gap_and_overlap() {
    let zero = Timeline::new(vec![SceneWindow::new(SceneId::Intro, 0, 0)]);
    assert!(zero.unwrap_err().to_string().contains("zero duration"));

    let gap = Timeline::new(vec![
        SceneWindow::new(SceneId::Intro, 0, 10),
        SceneWindow::new(SceneId::Features, 11, 10),
    ]);
    assert!(gap.unwrap_err().to_string().contains("gap"));

    let overlap = Timeline::new(vec![
        SceneWindow::new(SceneId::Intro, 0, 10),
        SceneWindow::new(SceneId::Features, 9, 10),
    ]);
    assert!(overlap.unwrap_err().to_string().contains("overlaps"));

    assert!(Timeline::new(Vec::new()).is_err());
}

#[test]
fn steps_are_numbered_one_to_five() {
    let steps: Vec<u32> = SceneId::ALL.iter().filter_map(|s| s.step()).collect();
    assert_eq!(steps, [1, 2, 3, 4, 5]);
}
