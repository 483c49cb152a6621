use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "epicycle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ordered Fourier coefficients of a shape as JSON.
    Coeffs(CoeffsArgs),
    /// Simulate frames and write arm/tip/trail geometry as JSON lines.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ShapeArgs {
    /// Shape description JSON (`{"kind": "rectangle", ...}`).
    #[arg(long)]
    shape: Option<PathBuf>,

    /// SVG path data (e.g. "M0 0 L100 0 L100 50 Z").
    #[arg(long)]
    svg: Option<String>,

    /// Built-in rectangle as `WIDTH,HEIGHT`.
    #[arg(long, value_delimiter = ',')]
    rect: Option<Vec<f64>>,

    /// Built-in pseudo-random figure with this many phasors.
    #[arg(long)]
    synthetic: Option<usize>,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Session configuration JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of retained phasors.
    #[arg(long)]
    phasors: Option<usize>,

    /// Number of contour samples.
    #[arg(long)]
    samples: Option<usize>,

    /// Trail capacity.
    #[arg(long)]
    trail: Option<usize>,

    /// Revolutions per second of the fundamental.
    #[arg(long)]
    speed: Option<f64>,

    /// Seed for `--synthetic`.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Args, Debug)]
struct CoeffsArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    #[command(flatten)]
    session: SessionArgs,

    /// Frames per second of the simulated driver.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Output file (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Coeffs(args) => cmd_coeffs(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let v = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse {what} JSON '{}'", path.display()))?;
    Ok(v)
}

fn load_config(args: &SessionArgs) -> anyhow::Result<epicycle::SessionConfig> {
    let mut cfg: epicycle::SessionConfig = match &args.config {
        Some(path) => read_json(path, "config")?,
        None => epicycle::SessionConfig::default(),
    };
    if let Some(n) = args.phasors {
        cfg.phasor_count = n;
    }
    if let Some(n) = args.samples {
        cfg.sample_count = n;
    }
    if let Some(n) = args.trail {
        cfg.trail_capacity = n;
    }
    if let Some(s) = args.speed {
        cfg.speed_scale = s;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn load_shape(args: &ShapeArgs, seed: u64) -> anyhow::Result<epicycle::Shape> {
    if let Some(path) = &args.shape {
        return read_json(path, "shape");
    }
    if let Some(data) = &args.svg {
        let bez = epicycle::BezPath::from_svg(data).context("parse SVG path data")?;
        let path = epicycle::Path::try_from(&bez)?;
        return Ok(epicycle::Shape::from_path(&path));
    }
    if let Some(wh) = &args.rect {
        let [width, height] = wh.as_slice() else {
            anyhow::bail!("--rect expects WIDTH,HEIGHT");
        };
        return Ok(epicycle::Shape::Rectangle {
            width: *width,
            height: *height,
        });
    }
    if let Some(count) = args.synthetic {
        return Ok(epicycle::Shape::Synthetic { count, seed });
    }
    anyhow::bail!("one of --shape, --svg, --rect or --synthetic is required")
}

fn cmd_coeffs(args: CoeffsArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.session)?;
    let shape = load_shape(&args.shape, args.session.seed)?;
    let animator = epicycle::Animator::from_shape(&shape, &cfg)?;

    let rows: Vec<serde_json::Value> = animator
        .coefficients()
        .map(|c| {
            json!({
                "index": c.index,
                "re": c.coefficient.re,
                "im": c.coefficient.im,
                "magnitude": c.magnitude(),
                "phase": c.phase(),
            })
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &rows).context("write coefficients")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let cfg = load_config(&args.session)?;
    let shape = load_shape(&args.shape, args.session.seed)?;
    let mut session = epicycle::EpicycleSession::new(&shape, &cfg)?;

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let dt = 1.0 / f64::from(args.fps);
    for frame in 0..args.frames {
        let snap = session.advance(dt)?;
        let line = json!({
            "frame": frame,
            "elapsed": snap.elapsed,
            "arm": snap.arm,
            "tip": snap.tip,
            "trail": session.trail().contents(),
        });
        serde_json::to_writer(&mut out, &line).context("write frame")?;
        writeln!(out)?;
    }
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
