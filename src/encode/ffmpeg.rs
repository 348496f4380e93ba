//! MP4 output through the system `ffmpeg` binary.
//!
//! Frames are flattened over the theme background to opaque RGB24 and streamed to ffmpeg's stdin
//! as raw video; ffmpeg encodes H.264 `yuv420p`.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStderr, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::composition::config::CompositionConfig;
use crate::composition::theme::Theme;
use crate::encode::sink::{FrameSink, SinkConfig, ensure_parent_dir};
use crate::foundation::color::Color;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TutorialError, TutorialResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::FrameRGBA;

// Lines of ffmpeg stderr kept for the failure message.
const STDERR_TAIL_LINES: usize = 12;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path`.
    pub overwrite: bool,
    /// Color that translucent pixels are flattened over. Its alpha is ignored.
    pub background: Color,
}

impl FfmpegSinkOpts {
    /// Write to `out_path` over the default theme background, refusing to overwrite.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: false,
            background: Theme::DEFAULT.background_color,
        }
    }

    /// Write to `out_path` over `comp`'s theme background.
    pub fn for_composition(comp: &CompositionConfig, out_path: impl Into<PathBuf>) -> Self {
        Self {
            background: comp.theme.background_color,
            ..Self::new(out_path)
        }
    }
}

struct Encoder {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stderr_tail: JoinHandle<VecDeque<String>>,
    cfg: SinkConfig,
    rgb: Vec<u8>,
    next_min: u64,
    frames: u64,
}

/// Sink that encodes pushed frames into an MP4 file.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
}

impl FfmpegSink {
    /// Sink with `opts`; ffmpeg is spawned in [`FrameSink::begin`].
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
        }
    }
}

/// yuv420p needs even dimensions.
pub(crate) fn check_encodable(cfg: &SinkConfig) -> TutorialResult<()> {
    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(TutorialError::validation("fps must be non-zero"));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(TutorialError::validation("mp4 frame size must be non-zero"));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(TutorialError::validation(format!(
            "mp4 frame size {}x{} must be even",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

/// Command line for encoding `cfg`-shaped RGB24 frames from stdin into `opts.out_path`.
pub(crate) fn encoder_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-hide_banner",
        "-loglevel",
        "error",
        if opts.overwrite { "-y" } else { "-n" },
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgb24",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.extend(
        [
            "-s".to_owned(),
            format!("{}x{}", cfg.width, cfg.height),
            "-r".to_owned(),
            format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i".to_owned(),
            "pipe:0".to_owned(),
        ]
        .map(OsString::from),
    );
    args.extend(
        [
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]
        .map(OsString::from),
    );
    args.push(opts.out_path.clone().into_os_string());
    args
}

/// Composite premultiplied RGBA8 over an opaque `background`, writing packed RGB24 into `dst`.
pub(crate) fn flatten_to_rgb24(
    dst: &mut Vec<u8>,
    src_premul: &[u8],
    background: Color,
) -> TutorialResult<()> {
    if !src_premul.len().is_multiple_of(4) {
        return Err(TutorialError::validation("rgba8 buffer length must be a multiple of 4"));
    }
    let bg = [background.r, background.g, background.b].map(u16::from);
    dst.clear();
    dst.reserve(src_premul.len() / 4 * 3);
    for px in src_premul.chunks_exact(4) {
        let uncovered = 255 - u16::from(px[3]);
        for (c, bg_c) in px[..3].iter().zip(bg) {
            let v = u16::from(*c) + mul_div255_u16(bg_c, uncovered);
            dst.push(v.min(255) as u8);
        }
    }
    Ok(())
}

// Forward ffmpeg's stderr to the log, keeping the last lines for error reporting.
fn spawn_stderr_tail(stderr: ChildStderr) -> JoinHandle<VecDeque<String>> {
    std::thread::spawn(move || {
        let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            tracing::debug!(target: "ffmpeg", "{line}");
            if tail.len() == STDERR_TAIL_LINES {
                tail.pop_front();
            }
            tail.push_back(line);
        }
        tail
    })
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> TutorialResult<()> {
        check_encodable(&cfg)?;
        if self.encoder.is_some() {
            return Err(TutorialError::evaluation("ffmpeg sink already started"));
        }
        let out = &self.opts.out_path;
        if !self.opts.overwrite && out.exists() {
            return Err(TutorialError::validation(format!(
                "output file '{}' already exists (pass overwrite to replace it)",
                out.display()
            )));
        }
        ensure_parent_dir(out)?;

        let args = encoder_args(&cfg, &self.opts);
        tracing::debug!(?args, "spawning ffmpeg");
        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TutorialError::evaluation(
                    "ffmpeg was not found on PATH; install it to render MP4 output",
                ),
                _ => TutorialError::evaluation(format!("failed to start ffmpeg: {e}")),
            })?;

        let (Some(stdin), Some(stderr)) = (child.stdin.take(), child.stderr.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(TutorialError::evaluation("ffmpeg started without piped stdio"));
        };

        self.encoder = Some(Encoder {
            child,
            stdin: BufWriter::new(stdin),
            stderr_tail: spawn_stderr_tail(stderr),
            rgb: Vec::with_capacity(cfg.width as usize * cfg.height as usize * 3),
            cfg,
            next_min: 0,
            frames: 0,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> TutorialResult<()> {
        let background = self.opts.background;
        let enc = self
            .encoder
            .as_mut()
            .ok_or_else(|| TutorialError::evaluation("ffmpeg sink not started"))?;
        if idx.0 < enc.next_min {
            return Err(TutorialError::evaluation(format!(
                "frame {} pushed after frame {}",
                idx.0,
                enc.next_min - 1
            )));
        }
        if (frame.width, frame.height) != (enc.cfg.width, enc.cfg.height) {
            return Err(TutorialError::validation(format!(
                "frame is {}x{}, encoder expects {}x{}",
                frame.width, frame.height, enc.cfg.width, enc.cfg.height
            )));
        }
        if !frame.premultiplied {
            return Err(TutorialError::validation("ffmpeg sink expects premultiplied frames"));
        }

        flatten_to_rgb24(&mut enc.rgb, &frame.data, background)?;
        if enc.rgb.len() != enc.cfg.width as usize * enc.cfg.height as usize * 3 {
            return Err(TutorialError::validation("frame data does not match its size"));
        }
        enc.stdin
            .write_all(&enc.rgb)
            .map_err(|e| TutorialError::evaluation(format!("ffmpeg stopped reading frames: {e}")))?;
        enc.next_min = idx.0 + 1;
        enc.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> TutorialResult<()> {
        let Encoder {
            mut child,
            stdin,
            stderr_tail,
            frames,
            ..
        } = self
            .encoder
            .take()
            .ok_or_else(|| TutorialError::evaluation("ffmpeg sink not started"))?;

        // Closing stdin signals end of input.
        let flushed = stdin.into_inner().map(drop).map_err(|e| e.into_error());
        let status = child
            .wait()
            .map_err(|e| TutorialError::evaluation(format!("waiting for ffmpeg failed: {e}")))?;
        let tail = stderr_tail.join().unwrap_or_default();

        if !status.success() {
            let log = tail.into_iter().collect::<Vec<_>>().join("\n");
            return Err(TutorialError::evaluation(format!(
                "ffmpeg exited with {status}: {log}"
            )));
        }
        flushed.map_err(|e| TutorialError::evaluation(format!("flushing frames to ffmpeg: {e}")))?;

        tracing::info!(out = %self.opts.out_path.display(), frames, "mp4 written");
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if let Some(mut enc) = self.encoder.take() {
            tracing::warn!(out = %self.opts.out_path.display(), "mp4 encoding abandoned");
            let _ = enc.child.kill();
            let _ = enc.child.wait();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
