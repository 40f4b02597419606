use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use exec_timing::{ExecutionTimeExtension, FileSource, ReaderSource, SampleSource, Settings};

#[derive(Parser, Debug)]
#[command(name = "exec-timing")]
#[command(about = "Report the slowest tests of a run from recorded timings")]
struct Args {
    /// Timings to read: a JSON array, JSON lines, or libtest JSON events.
    /// Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Config file with report options (toml, yaml or json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of slowest tests to show (0 disables the report)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    top_n: Option<i64>,

    /// Warning threshold (e.g., "1s", "500ms", "0.75")
    #[arg(long)]
    warning: Option<String>,

    /// Danger threshold (e.g., "5s", "2500ms")
    #[arg(long)]
    danger: Option<String>,

    /// Show `Class::method` instead of fully qualified names
    #[arg(short, long)]
    short_names: bool,

    /// Print each test's timing as it is read
    #[arg(short, long)]
    individual: bool,

    /// When to color the report: auto, always or never
    #[arg(long)]
    color: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args)?;

    let mut source: Box<dyn SampleSource> = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => Box::new(FileSource::new(path)),
        _ => Box::new(ReaderSource::new(io::stdin(), "stdin")),
    };

    let samples = source
        .read_samples()
        .with_context(|| format!("Failed to load timings from {}", source.description()))?;
    if source.skipped() > 0 {
        warn!(
            skipped = source.skipped(),
            source = source.description(),
            "some input lines were not timings"
        );
    }
    debug!(count = samples.len(), "loaded samples");

    let mut extension = ExecutionTimeExtension::new(settings);
    for sample in &samples {
        extension.on_unit_timed(&sample.name, sample.duration);
    }
    extension.finish_run();

    Ok(())
}

/// Config file and environment first, then command-line overrides.
fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::load(args.config.as_deref())?;

    if let Some(n) = args.top_n {
        settings.apply("topN", &n.to_string());
    }
    if let Some(ref warning) = args.warning {
        settings.apply("warningThreshold", warning);
    }
    if let Some(ref danger) = args.danger {
        settings.apply("dangerThreshold", danger);
    }
    if args.short_names {
        settings.show_fqcn = false;
    }
    if args.individual {
        settings.show_individual_timings = true;
    }
    if let Some(ref color) = args.color {
        settings.apply("colors", color);
    }

    Ok(settings)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "exec_timing=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
