use super::*;
use crate::encode::sink::{InMemorySink, PngSequenceSink};
use crate::foundation::core::Canvas;

fn small_comp() -> CompositionConfig {
    let mut comp = CompositionConfig::default();
    comp.canvas = Canvas {
        width: 96,
        height: 54,
    };
    comp
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings::default())
}

#[test]
fn sequential_range_renders_every_frame() {
    let comp = small_comp();
    let mut be = backend();
    let (frames, stats) =
        render_frames_with_stats(&comp, range(0, 3), &mut be, &RenderThreading::default())
            .unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(stats.frames_total, 3);
    assert_eq!(stats.frames_rendered, 3);
    assert_eq!(stats.frames_elided, 0);
    assert!(frames.iter().all(|f| f.width == 96 && f.height == 54));
}

#[test]
fn parallel_matches_sequential_across_a_scene_cut() {
    let comp = small_comp();
    let r = range(175, 186);
    let seq = render_frames(&comp, r, &mut backend()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 4,
        threads: Some(2),
        static_frame_elision: false,
    };
    let (par, stats) = render_frames_with_stats(&comp, r, &mut backend(), &threading).unwrap();
    assert_eq!(stats.frames_rendered, 11);
    assert_eq!(seq, par);
}

#[test]
fn elision_renders_held_frames_once_per_chunk() {
    let comp = small_comp();
    let threading = RenderThreading {
        parallel: false,
        chunk_size: 5,
        threads: None,
        static_frame_elision: true,
    };
    // Past the end every frame is background only.
    let (frames, stats) =
        render_frames_with_stats(&comp, range(2700, 2710), &mut backend(), &threading).unwrap();
    assert_eq!(frames.len(), 10);
    assert_eq!(stats.frames_rendered, 2);
    assert_eq!(stats.frames_elided, 8);
    assert!(frames.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn parallel_elision_matches_plain_render() {
    let comp = small_comp();
    let r = range(2695, 2705);
    let plain = render_frames(&comp, r, &mut backend()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 64,
        threads: Some(2),
        static_frame_elision: true,
    };
    let (elided, stats) = render_frames_with_stats(&comp, r, &mut backend(), &threading).unwrap();
    assert_eq!(plain, elided);
    assert!(stats.frames_elided >= 4);
}

#[test]
fn sink_receives_frames_in_order() {
    let comp = small_comp();
    let mut sink = InMemorySink::new();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 3,
        threads: Some(2),
        static_frame_elision: true,
    };
    let stats = render_to_sink(&comp, range(10, 18), &mut backend(), &mut sink, &threading).unwrap();
    assert_eq!(stats.frames_total, 8);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (10..18).collect::<Vec<_>>());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (96, 54));
}

#[test]
fn png_preview_renders_only_kept_frames() {
    let comp = small_comp();
    let dir = std::path::PathBuf::from("target").join("pipeline_png_preview");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = PngSequenceSink::new(&dir, 30);
    let threading = RenderThreading {
        chunk_size: 4,
        ..RenderThreading::default()
    };
    let stats =
        render_to_sink(&comp, range(180, 360), &mut backend(), &mut sink, &threading).unwrap();
    assert_eq!(sink.written().len(), 6);
    assert_eq!(stats.frames_total, 6);
    assert_eq!(stats.frames_rendered, sink.written().len() as u64);
    assert!(sink.written()[0].ends_with("frame_000180.png"));
}

#[test]
fn empty_range_and_zero_threads_are_rejected() {
    let comp = small_comp();
    let empty = FrameRange {
        start: FrameIndex(5),
        end: FrameIndex(5),
    };
    assert!(render_frames(&comp, empty, &mut backend()).is_err());

    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_frames_with_stats(&comp, range(0, 1), &mut backend(), &threading).is_err());
}

#[test]
fn mp4_range_must_fit_the_composition() {
    let comp = small_comp();
    let mut opts = RenderToMp4Opts::full(&comp);
    assert_eq!(opts.range, range(0, 2700));
    opts.range = range(2690, 2701);
    let err = render_to_mp4(&comp, "target/never.mp4", opts, &mut backend()).unwrap_err();
    assert!(err.to_string().contains("within composition duration"));
}

#[test]
fn chunk_size_zero_means_one() {
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(64), 64);
}
