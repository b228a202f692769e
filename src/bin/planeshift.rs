use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use planeshift::{
    CaptureBackend as _, CaptureScale, Clock as _, Config, Dims, ManualClock, QueuedFrameHost,
    Session, SvgRasterBackend,
};

#[derive(Parser, Debug)]
#[command(name = "planeshift", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a standalone HTML document animated with CSS keyframes.
    ExportHtml(ExportHtmlArgs),
    /// Write the depth-sorted projected scene at one progress value as SVG.
    ExportSvg(ExportSvgArgs),
    /// Write every sampled projected scene as JSON.
    ExportProjection(ExportProjectionArgs),
    /// Capture the projected scene at one progress value as a PNG.
    Frame(FrameArgs),
    /// Print evaluated poses as JSON.
    Sample(SampleArgs),
    /// Drive live playback with a simulated clock and print each tick as a JSON line.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct ConfigArg {
    /// Configuration JSON. Factory defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fit the container to a `WIDTHxHEIGHT` viewport at the configured aspect ratio.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<Dims>,
}

fn parse_viewport(s: &str) -> Result<Dims, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("viewport '{s}' must be WIDTHxHEIGHT"))?;
    let part = |p: &str| {
        p.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| format!("viewport '{s}' sides must be positive numbers"))
    };
    Ok(Dims::new(part(w)?, part(h)?))
}

#[derive(Args, Debug)]
struct ExportHtmlArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportSvgArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Progress in `[0, 1]`; the configuration's progress when omitted.
    #[arg(long)]
    progress: Option<f64>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportProjectionArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Sampling intervals; the configured export quality when omitted.
    #[arg(long)]
    frames: Option<usize>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Progress in `[0, 1]`; the configuration's progress when omitted.
    #[arg(long)]
    progress: Option<f64>,

    /// Pixel-density multiplier (1-4); the configured resolution when omitted.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=4))]
    scale: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Evaluate a single progress value instead of the whole sample set.
    #[arg(long)]
    at: Option<f64>,

    /// Sampling intervals; the configured export quality when omitted.
    #[arg(long)]
    frames: Option<usize>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Simulated wall-clock duration in milliseconds.
    #[arg(long, default_value_t = 1000.0)]
    duration_ms: f64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::ExportHtml(args) => cmd_export_html(args),
        Command::ExportSvg(args) => cmd_export_svg(args),
        Command::ExportProjection(args) => cmd_export_projection(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(arg: &ConfigArg) -> anyhow::Result<Config> {
    let mut cfg = match &arg.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            Config::from_json(&s).with_context(|| format!("load config '{}'", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(viewport) = arg.viewport {
        cfg.container = Dims::fit_aspect(cfg.aspect_ratio, viewport);
        cfg.validate()
            .with_context(|| format!("viewport {}x{}", viewport.width, viewport.height))?;
    }
    Ok(cfg)
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, contents)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn at_progress(cfg: Config, progress: Option<f64>) -> anyhow::Result<Config> {
    let Some(p) = progress else {
        return Ok(cfg);
    };
    anyhow::ensure!(p.is_finite(), "progress must be finite");
    Ok(Config {
        progress: p.clamp(0.0, 1.0),
        ..cfg
    })
}

fn cmd_export_html(args: ExportHtmlArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let html = planeshift::export_html(&cfg)?;
    write_output(args.out.as_deref(), &html)
}

fn cmd_export_svg(args: ExportSvgArgs) -> anyhow::Result<()> {
    let cfg = at_progress(read_config(&args.config)?, args.progress)?;
    let targets = planeshift::generate_targets(&cfg);
    let scene = planeshift::project_scene(&cfg, &targets, cfg.progress);
    write_output(args.out.as_deref(), &planeshift::scene_to_svg(&scene)?)
}

fn cmd_export_projection(args: ExportProjectionArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let frames = args
        .frames
        .unwrap_or_else(|| cfg.export_quality.frame_count());
    let anim = planeshift::sample_projection(&cfg, frames);
    let json = serde_json::to_string_pretty(&anim).context("serialize projection")?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = at_progress(read_config(&args.config)?, args.progress)?;
    if let Some(scale) = args.scale.and_then(CaptureScale::from_factor) {
        cfg.export_resolution = scale;
    }

    let targets = planeshift::generate_targets(&cfg);
    let scene = planeshift::project_scene(&cfg, &targets, cfg.progress);
    let frame = SvgRasterBackend::new().capture(&scene, cfg.export_resolution)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let json = match args.at {
        Some(t) => {
            anyhow::ensure!(t.is_finite(), "--at must be finite");
            let targets = planeshift::generate_targets(&cfg);
            serde_json::to_string_pretty(&planeshift::evaluate_frame(t, &cfg, &targets))
        }
        None => {
            let frames = args
                .frames
                .unwrap_or_else(|| cfg.export_quality.frame_count());
            serde_json::to_string_pretty(&planeshift::sample_keyframes(&cfg, frames))
        }
    }
    .context("serialize samples")?;
    write_output(None, &json)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be finite and > 0"
    );
    anyhow::ensure!(
        args.duration_ms.is_finite() && args.duration_ms >= 0.0,
        "--duration-ms must be finite and >= 0"
    );

    let cfg = read_config(&args.config)?;
    let mut session = Session::new(cfg, QueuedFrameHost::default(), ManualClock::at(0.0))?;
    session.set_playing(true);

    let step_ms = 1000.0 / args.fps;
    let mut stdout = std::io::stdout().lock();
    while session.clock().now_ms() + step_ms <= args.duration_ms {
        if session.host_mut().take_pending().is_none() {
            break;
        }
        session.clock_mut().advance(step_ms);
        let Some(tick) = session.on_frame() else {
            break;
        };
        let line = serde_json::json!({
            "t_ms": session.clock().now_ms(),
            "progress": tick.progress,
            "direction": tick.direction,
            "should_continue": tick.should_continue,
        });
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}
