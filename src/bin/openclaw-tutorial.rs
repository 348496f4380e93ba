use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use openclaw_tutorial::{
    CompositionConfig, CpuBackend, Evaluator, FontSet, FrameIndex, FrameRange, PlayerConfig,
    PngSequenceSink, RenderSettings, RenderThreading, RenderToMp4Opts, TextLayoutEngine, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "openclaw-tutorial", version, about = "Render the OpenClaw tutorial reel")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print composition settings and the scene table.
    Info(CompArgs),
    /// Print the frame graph (or display list) of one frame as JSON.
    Dump(DumpArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence.
    Preview(PreviewArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct CompArgs {
    /// Theme props JSON (camelCase color fields).
    #[arg(long)]
    props: Option<PathBuf>,

    /// Use the player preset (player theme, looping playback).
    #[arg(long, default_value_t = false)]
    player: bool,
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Proportional font file (TTF/OTF). Without it text is laid out but not drawn.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Monospace font file for terminal text. Falls back to `--font`.
    #[arg(long)]
    mono_font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Render frames with identical content once per chunk.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Dump the compiled display list instead of the frame graph.
    #[arg(long, default_value_t = false)]
    display_list: bool,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Frame index (0-based). With `--player` this is a playback tick and wraps around.
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Output directory for `frame_NNNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Keep one frame out of every K.
    #[arg(long, default_value_t = 30)]
    every: u64,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    #[command(flatten)]
    fonts: FontArgs,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = false)]
    overwrite: bool,

    /// Encode even without `--font`, producing a video with no visible text.
    #[arg(long, default_value_t = false)]
    allow_missing_font: bool,

    #[command(flatten)]
    fonts: FontArgs,

    #[command(flatten)]
    threading: ThreadingArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let res = match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Render(args) => cmd_render(args),
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_composition(args: &CompArgs) -> anyhow::Result<CompositionConfig> {
    let comp = match &args.props {
        Some(path) => CompositionConfig::openclaw(Theme::from_path(path)?),
        None if args.player => CompositionConfig::player(),
        None => CompositionConfig::default(),
    };
    comp.validate()?;
    Ok(comp)
}

fn render_settings(args: &FontArgs) -> anyhow::Result<RenderSettings> {
    let fonts = FontSet::load(args.font.as_deref(), args.mono_font.as_deref())
        .context("load fonts")?;
    if fonts.is_empty() {
        tracing::warn!("no --font given: text is laid out but not drawn");
    }
    Ok(RenderSettings {
        clear_rgba: None,
        fonts,
    })
}

fn threading(args: &ThreadingArgs) -> RenderThreading {
    RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    }
}

fn cmd_info(args: CompArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args)?;
    println!("id:        {}", comp.id);
    println!("fps:       {}/{}", comp.fps.num, comp.fps.den);
    println!("size:      {}x{}", comp.canvas.width, comp.canvas.height);
    println!(
        "duration:  {} frames ({:.1}s)",
        comp.duration_frames,
        comp.fps.frames_to_secs(comp.duration_frames)
    );
    println!("background: {}", comp.theme.background_color.to_hex());
    if args.player {
        let player = PlayerConfig {
            composition: comp.clone(),
            ..PlayerConfig::preset()
        };
        println!("player:    loop={} controls={}", player.loop_playback, player.controls);
    }
    println!();
    println!("{:<16} {:>6} {:>6} {:>6}", "scene", "start", "end", "frames");
    for w in comp.timeline.windows() {
        println!(
            "{:<16} {:>6} {:>6} {:>6}",
            w.scene.name(),
            w.start,
            w.end(),
            w.duration
        );
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let graph = Evaluator::eval_frame(&comp, FrameIndex(args.frame))?;
    let stdout = std::io::stdout().lock();
    if args.display_list {
        let settings = render_settings(&args.fonts)?;
        let mut text = TextLayoutEngine::with_fonts(&settings.fonts)?;
        let list = openclaw_tutorial::display_list_for_graph(&graph, &mut text)?;
        serde_json::to_writer_pretty(stdout, &list).context("write display list json")?;
    } else {
        serde_json::to_writer_pretty(stdout, &graph).context("write frame graph json")?;
    }
    println!();
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let frame = if args.comp.player {
        let player = PlayerConfig {
            composition: comp.clone(),
            ..PlayerConfig::preset()
        };
        player.frame_at(args.frame)
    } else {
        FrameIndex(args.frame)
    };
    if frame.0 >= comp.duration_frames {
        tracing::warn!(frame = frame.0, "frame is past the end of the timeline");
    }

    let mut backend = CpuBackend::new(render_settings(&args.fonts)?);
    let rgba = openclaw_tutorial::render_frame(&comp, frame, &mut backend)?;
    openclaw_tutorial::write_png(&args.out, &rgba)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let end = args.end.unwrap_or(comp.duration_frames);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))
        .context("invalid preview range")?;

    let mut backend = CpuBackend::new(render_settings(&args.fonts)?);
    let mut sink = PngSequenceSink::new(&args.out_dir, args.every);
    let stats = openclaw_tutorial::render_to_sink(
        &comp,
        range,
        &mut backend,
        &mut sink,
        &threading(&args.threading),
    )?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        sink.written().len(),
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let settings = render_settings(&args.fonts)?;
    if settings.fonts.is_empty() && !args.allow_missing_font {
        anyhow::bail!(
            "render needs --font to draw text; pass --allow-missing-font to encode without text"
        );
    }
    let mut backend = CpuBackend::new(settings);
    let opts = RenderToMp4Opts {
        overwrite: args.overwrite,
        threading: threading(&args.threading),
        ..RenderToMp4Opts::full(&comp)
    };
    let stats = openclaw_tutorial::render_to_mp4(&comp, args.out.clone(), opts, &mut backend)?;

    eprintln!(
        "wrote {} ({} frames, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_elided
    );
    Ok(())
}
