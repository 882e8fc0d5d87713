use anyhow::Context;
use clap::Parser;
use generator::source::UniformSource;
use shutdown::CancelToken;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use workflow::config::SimulationConfig;
use workflow::runner::Runner;

mod display;
mod generator;
mod shutdown;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Smart meter sampling-loop driver")]
struct Args {
    /// Load a simulation config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seconds to pause between samples
    #[arg(long, default_value_t = 2)]
    interval_secs: u64,
    /// How many recent readings the console display shows
    #[arg(long, default_value_t = 10)]
    window: usize,
    /// Upper bound of the simulated draw in kWh
    #[arg(long, default_value_t = 5.0)]
    max_kwh: f64,
    /// Seed the generator for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many samples instead of waiting for Ctrl+C
    #[arg(long)]
    samples: Option<usize>,
    /// Append a JSON summary of the final analysis to this file
    #[arg(long)]
    summary_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        SimulationConfig::load(path)?
    } else {
        SimulationConfig::from_args(
            args.interval_secs,
            args.window,
            args.max_kwh,
            args.seed,
            args.samples,
        )
    };

    println!("Starting Smart Meter System...\n");

    let cancel = CancelToken::new();
    shutdown::spawn_ctrl_c_listener(cancel.clone());

    let source = UniformSource::from_config(&config);
    let mut runner = Runner::new(config, Box::new(source));
    let report = runner.run(&cancel);

    if let Some(path) = args.summary_out {
        let line = serde_json::to_string(&report).context("serializing run summary")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening summary file {}", path.display()))?;
        writeln!(file, "{}", line)?;
    }

    Ok(())
}
