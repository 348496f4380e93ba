use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn transparent_pixels_take_the_background() {
    let mut rgb = Vec::new();
    flatten_to_rgb24(&mut rgb, &[0, 0, 0, 0], Color::rgb(10, 20, 30)).unwrap();
    assert_eq!(rgb, [10, 20, 30]);
}

#[test]
fn opaque_pixels_pass_through() {
    let mut rgb = Vec::new();
    flatten_to_rgb24(&mut rgb, &[1, 2, 3, 255, 4, 5, 6, 255], Color::rgb(10, 20, 30)).unwrap();
    assert_eq!(rgb, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn half_covered_pixels_mix_with_background() {
    let mut rgb = vec![9; 7];
    flatten_to_rgb24(&mut rgb, &[64, 0, 0, 128], Color::rgb(0, 0, 200)).unwrap();
    assert_eq!(rgb, [64, 0, 100]);
}

#[test]
fn flatten_rejects_partial_pixels() {
    assert!(flatten_to_rgb24(&mut Vec::new(), &[0u8; 6], Color::rgb(0, 0, 0)).is_err());
}

#[test]
fn odd_sizes_are_rejected_before_spawning() {
    let err = check_encodable(&cfg(1921, 1080)).unwrap_err();
    assert!(err.to_string().contains("even"));
    assert!(check_encodable(&cfg(1920, 1080)).is_ok());

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_odd/out.mp4"));
    assert!(sink.begin(cfg(1921, 1080)).is_err());
}

#[test]
fn encoder_reads_rgb24_at_the_composition_rate() {
    let mut opts = FfmpegSinkOpts::new("out/reel.mp4");
    let args = encoder_args(&cfg(1920, 1080), &opts);
    let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
    let after = |flag: &str| {
        let i = args.iter().position(|a| a == flag).unwrap();
        args[i + 1].clone()
    };
    assert_eq!(after("-s"), "1920x1080");
    assert_eq!(after("-r"), "30/1");
    assert_eq!(after("-f"), "rawvideo");
    assert!(args.contains(&"rgb24".to_owned()));
    assert!(args.contains(&"-n".to_owned()));
    assert_eq!(args.last().map(String::as_str), Some("out/reel.mp4"));

    opts.overwrite = true;
    let args = encoder_args(&cfg(1920, 1080), &opts);
    assert!(args.iter().any(|a| a == "-y"));
}

#[test]
fn composition_options_use_the_theme_background() {
    let comp = CompositionConfig::player();
    let opts = FfmpegSinkOpts::for_composition(&comp, "x.mp4");
    assert_eq!(opts.background, comp.theme.background_color);
    assert!(!opts.overwrite);
}

#[test]
fn existing_output_is_kept_without_overwrite() {
    let path = std::path::PathBuf::from("target").join("ffmpeg_existing.mp4");
    ensure_parent_dir(&path).unwrap();
    std::fs::write(&path, b"keep").unwrap();
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&path));
    let err = sink.begin(cfg(2, 2)).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read(&path).unwrap(), b"keep");
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unstarted.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
