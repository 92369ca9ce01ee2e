use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cruise_control::controller::CruiseController;
use cruise_control::record::{format_json, format_text, parse_records};
use cruise_control::sequencer::Sequencer;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Space-separated fields, six decimal places
    Text,
    /// One JSON object per tick
    Json,
}

#[derive(Parser)]
#[command(name = "cruise-control")]
#[command(about = "Pulse-driven cruise control simulator", long_about = None)]
struct Cli {
    /// File of input records, one tick per line
    input: PathBuf,

    /// Minimum speed (km/h) at which cruise control engages
    #[arg(long, default_value_t = 50.0)]
    activation_speed: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log every tick to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let default = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let controller = CruiseController::builder()
        .activation_speed(cli.activation_speed)
        .build()?;

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let records = parse_records(text.lines())
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    let run = Sequencer::new(controller).run(&records)?;

    let output = match cli.format {
        OutputFormat::Text => format_text(run.snapshots()),
        OutputFormat::Json => format_json(run.snapshots())?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
