use std::collections::HashMap;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::composition::config::CompositionConfig;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::foundation::color::Color;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::eval::evaluator::{Evaluator, FrameGraph};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{TutorialError, TutorialResult};
use crate::layout::taffy_bridge::layout_frame;
use crate::layout::text::TextLayoutEngine;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::cpu::CpuBackend;
use crate::render::display_list::{DisplayList, compile_frame};
use crate::render::fingerprint::{FrameFingerprint, fingerprint_graph};

/// Lay out and compile an already evaluated frame.
pub fn display_list_for_graph(
    graph: &FrameGraph,
    text: &mut TextLayoutEngine,
) -> TutorialResult<DisplayList> {
    let laid = layout_frame(graph, text)?;
    compile_frame(&laid, text)
}

/// Evaluate, lay out and compile one frame.
pub fn display_list_for_frame(
    comp: &CompositionConfig,
    frame: FrameIndex,
    text: &mut TextLayoutEngine,
) -> TutorialResult<DisplayList> {
    let graph = Evaluator::eval_frame(comp, frame)?;
    display_list_for_graph(&graph, text)
}

/// Evaluate + lay out + compile + render a single frame.
///
/// This is the primary "one-shot" API for producing pixels from a [`CompositionConfig`].
///
/// Pipeline:
/// 1. [`Evaluator::eval_frame`](crate::Evaluator::eval_frame)
/// 2. [`layout_frame`](crate::layout_frame)
/// 3. [`compile_frame`](crate::compile_frame)
/// 4. [`RenderBackend::render_display_list`](crate::RenderBackend::render_display_list)
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    comp: &CompositionConfig,
    frame: FrameIndex,
    backend: &mut dyn RenderBackend,
) -> TutorialResult<FrameRGBA> {
    comp.validate()?;
    let mut text = TextLayoutEngine::with_fonts(backend.fonts())?;
    let list = display_list_for_frame(comp, frame, &mut text)?;
    backend.render_display_list(&list)
}

/// Render a range of frames (inclusive start, exclusive end).
pub fn render_frames(
    comp: &CompositionConfig,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
) -> TutorialResult<Vec<FrameRGBA>> {
    render_frames_with_stats(comp, range, backend, &RenderThreading::default())
        .map(|(frames, _)| frames)
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Render frames with identical visual trees once per chunk.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Frames requested (after the sink's frame selection).
    pub frames_total: u64,
    /// Frames that were actually rendered.
    pub frames_rendered: u64,
    /// Frames reused via static-frame elision.
    pub frames_elided: u64,
}

impl RenderStats {
    fn add(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Render a frame range and return both frame data and rendering stats.
#[tracing::instrument(skip_all, fields(start = range.start.0, end = range.end.0))]
pub fn render_frames_with_stats(
    comp: &CompositionConfig,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
) -> TutorialResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut renderer = RangeRenderer::new(comp, range, backend, threading)?;
    let frames = (range.start.0..range.end.0).map(FrameIndex).collect::<Vec<_>>();
    let mut out = Vec::with_capacity(frames.len().min(4096));
    let mut stats = RenderStats::default();
    for chunk in renderer.chunks(&frames) {
        let chunk_out = renderer.render_chunk(chunk)?;
        stats.add(chunk_out.stats);
        out.extend(chunk_out.into_frames()?);
    }
    tracing::debug!(?stats, "rendered range");
    Ok((out, stats))
}

/// Render a frame range into `sink`, pushing frames in timeline order.
#[tracing::instrument(skip_all, fields(start = range.start.0, end = range.end.0))]
pub fn render_to_sink(
    comp: &CompositionConfig,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> TutorialResult<RenderStats> {
    let mut renderer = RangeRenderer::new(comp, range, backend, threading)?;
    sink.begin(SinkConfig {
        width: comp.canvas.width,
        height: comp.canvas.height,
        fps: comp.fps,
    })?;

    let frames = (range.start.0..range.end.0)
        .map(FrameIndex)
        .filter(|&f| sink.wants_frame(f))
        .collect::<Vec<_>>();
    tracing::debug!(selected = frames.len(), "frames requested by sink");

    let mut stats = RenderStats::default();
    for chunk in renderer.chunks(&frames) {
        let chunk_out = renderer.render_chunk(chunk)?;
        for (&idx, &u) in chunk.iter().zip(&chunk_out.frame_to_unique) {
            let frame = chunk_out.unique_frames.get(u).ok_or_else(|| {
                TutorialError::evaluation("internal error: unique frame index out of range")
            })?;
            sink.push_frame(idx, frame)?;
        }
        stats.add(chunk_out.stats);
    }
    sink.end()?;

    tracing::info!(
        frames = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "render finished"
    );
    Ok(stats)
}

/// Options for [`render_to_mp4`].
#[derive(Clone, Debug)]
pub struct RenderToMp4Opts {
    /// Frame range to render (start inclusive, end exclusive).
    pub range: FrameRange,
    /// Color translucent pixels are flattened over; the theme background by default.
    pub background: Color,
    /// Whether to overwrite `out_path` if it already exists.
    pub overwrite: bool,
    /// Render threading/chunking configuration.
    pub threading: RenderThreading,
}

impl RenderToMp4Opts {
    /// Options covering the whole composition.
    pub fn full(comp: &CompositionConfig) -> Self {
        Self {
            range: comp.range(),
            background: comp.theme.background_color,
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Render a composition to an MP4 by invoking the system `ffmpeg` binary.
///
/// `ffmpeg` must be installed and on `PATH`; it is spawned before any frame is rendered.
pub fn render_to_mp4(
    comp: &CompositionConfig,
    out_path: impl Into<PathBuf>,
    opts: RenderToMp4Opts,
    backend: &mut dyn RenderBackend,
) -> TutorialResult<RenderStats> {
    comp.validate()?;
    if opts.range.end.0 > comp.duration_frames {
        return Err(TutorialError::validation(
            "render_to_mp4 range must be within composition duration",
        ));
    }
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        overwrite: opts.overwrite,
        background: opts.background,
        ..FfmpegSinkOpts::for_composition(comp, out_path)
    });
    render_to_sink(comp, opts.range, backend, &mut sink, &opts.threading)
}

struct ChunkOut {
    unique_frames: Vec<FrameRGBA>,
    frame_to_unique: Vec<usize>,
    stats: RenderStats,
}

impl ChunkOut {
    /// Expand unique frames back to one frame per index, moving each on its last use.
    fn into_frames(self) -> TutorialResult<Vec<FrameRGBA>> {
        let mut unique = self
            .unique_frames
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>();
        let mut remaining = vec![0usize; unique.len()];
        for &u in &self.frame_to_unique {
            remaining[u] += 1;
        }

        let mut out = Vec::with_capacity(self.frame_to_unique.len());
        for u in self.frame_to_unique {
            let frame = if remaining[u] == 1 {
                unique[u].take()
            } else {
                unique[u].clone()
            };
            out.push(frame.ok_or_else(|| {
                TutorialError::evaluation("internal error: unique frame missing")
            })?);
            remaining[u] -= 1;
        }
        Ok(out)
    }
}

struct RangeRenderer<'a> {
    comp: &'a CompositionConfig,
    backend: &'a mut dyn RenderBackend,
    text: TextLayoutEngine,
    parallel: Option<(rayon::ThreadPool, RenderSettings)>,
    elide: bool,
    chunk_size: usize,
}

impl<'a> RangeRenderer<'a> {
    fn new(
        comp: &'a CompositionConfig,
        range: FrameRange,
        backend: &'a mut dyn RenderBackend,
        threading: &RenderThreading,
    ) -> TutorialResult<Self> {
        if range.is_empty() {
            return Err(TutorialError::validation("render range must be non-empty"));
        }
        comp.validate()?;

        let parallel = if threading.parallel {
            let settings = backend.worker_render_settings().ok_or_else(|| {
                TutorialError::evaluation(
                    "parallel render requires backend worker settings support (CpuBackend)",
                )
            })?;
            Some((build_thread_pool(threading.threads)?, settings))
        } else {
            None
        };
        let text = TextLayoutEngine::with_fonts(backend.fonts())?;

        Ok(Self {
            comp,
            backend,
            text,
            parallel,
            elide: threading.static_frame_elision,
            chunk_size: normalized_chunk_size(threading.chunk_size),
        })
    }

    fn chunks<'f>(&self, frames: &'f [FrameIndex]) -> std::slice::Chunks<'f, FrameIndex> {
        frames.chunks(self.chunk_size)
    }

    fn render_chunk(&mut self, frames: &[FrameIndex]) -> TutorialResult<ChunkOut> {
        let graphs = frames
            .iter()
            .map(|&f| Evaluator::eval_frame(self.comp, f))
            .collect::<TutorialResult<Vec<_>>>()?;

        let mut unique_indices = Vec::<usize>::with_capacity(graphs.len());
        let mut frame_to_unique = Vec::<usize>::with_capacity(graphs.len());
        if self.elide {
            let mut first = HashMap::<FrameFingerprint, usize>::new();
            for (idx, graph) in graphs.iter().enumerate() {
                let fingerprint = fingerprint_graph(graph)?;
                if let Some(existing) = first.get(&fingerprint).copied() {
                    frame_to_unique.push(existing);
                } else {
                    let slot = unique_indices.len();
                    unique_indices.push(idx);
                    first.insert(fingerprint, slot);
                    frame_to_unique.push(slot);
                }
            }
        } else {
            unique_indices.extend(0..graphs.len());
            frame_to_unique.extend(0..graphs.len());
        }

        let unique_frames = match &self.parallel {
            Some((pool, settings)) => {
                let rendered = pool.install(|| {
                    unique_indices
                        .par_iter()
                        .map_init(
                            || {
                                (
                                    CpuBackend::new(settings.clone()),
                                    TextLayoutEngine::with_fonts(&settings.fonts),
                                )
                            },
                            |(worker_backend, worker_text), idx| -> TutorialResult<FrameRGBA> {
                                let text = worker_text.as_mut().map_err(|e| {
                                    TutorialError::layout(format!("worker font setup failed: {e}"))
                                })?;
                                let list = display_list_for_graph(&graphs[*idx], text)?;
                                worker_backend.render_display_list(&list)
                            },
                        )
                        .collect::<Vec<_>>()
                });
                rendered.into_iter().collect::<TutorialResult<Vec<_>>>()?
            }
            None => {
                let mut out = Vec::with_capacity(unique_indices.len());
                for &idx in &unique_indices {
                    let list = display_list_for_graph(&graphs[idx], &mut self.text)?;
                    out.push(self.backend.render_display_list(&list)?);
                }
                out
            }
        };

        let total = graphs.len() as u64;
        let rendered_count = unique_indices.len() as u64;
        Ok(ChunkOut {
            unique_frames,
            frame_to_unique,
            stats: RenderStats {
                frames_total: total,
                frames_rendered: rendered_count,
                frames_elided: total.saturating_sub(rendered_count),
            },
        })
    }
}

fn build_thread_pool(threads: Option<usize>) -> TutorialResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TutorialError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TutorialError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
