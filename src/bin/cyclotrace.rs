use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cyclotrace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ranked coefficient set for a captured path as JSON.
    Spectrum(SpectrumArgs),
    /// Run the full animation offline and write the reconstructed curve as SVG.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct SpectrumArgs {
    /// Input path capture JSON (ordered list of points).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frequency components to keep.
    #[arg(long, default_value_t = 10)]
    coefficients: usize,

    /// Canvas width the capture was taken on.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height the capture was taken on.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input path capture JSON (ordered list of points).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Number of frequency components to keep.
    #[arg(long, default_value_t = 10)]
    coefficients: usize,

    /// Canvas width the capture was taken on.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height the capture was taken on.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Spectrum(args) => cmd_spectrum(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn read_capture_json(path: &Path) -> anyhow::Result<cyclotrace::SampledPath> {
    let f = File::open(path).with_context(|| format!("open path capture '{}'", path.display()))?;
    let r = BufReader::new(f);
    let capture = serde_json::from_reader(r).with_context(|| "parse path capture JSON")?;
    Ok(capture)
}

fn cmd_spectrum(args: SpectrumArgs) -> anyhow::Result<()> {
    let path = read_capture_json(&args.in_path)?;
    let canvas = cyclotrace::Canvas::new(args.width, args.height)?;
    let spectrum = cyclotrace::Spectrum::compute(&path, args.coefficients, canvas.center())?;

    println!("{}", serde_json::to_string_pretty(&spectrum)?);
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let path = read_capture_json(&args.in_path)?;
    let canvas = cyclotrace::Canvas::new(args.width, args.height)?;
    let spectrum = cyclotrace::Spectrum::compute(&path, args.coefficients, canvas.center())?;

    let mut state = cyclotrace::AnimationState::new(spectrum, canvas)?;
    let mut surface = cyclotrace::RecordingSurface::new();
    let mut scheduler = cyclotrace::ImmediateScheduler;
    cyclotrace::run(&mut state, &mut surface, &mut scheduler)?;

    let svg = cyclotrace::trace_svg(canvas, surface.last_polyline().unwrap_or(&[]));
    fs::write(&args.out, svg).with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!(
        "traced {} frames -> {}",
        state.frames_total(),
        args.out.display()
    );
    Ok(())
}
