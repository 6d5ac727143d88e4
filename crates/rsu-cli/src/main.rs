//! rsu-deploy — choose roadside-unit positions for a road network.
//!
//! Reads a JSON run configuration, builds the grid model from a vehicle
//! trace, runs every enabled placement strategy over the configured
//! parameter sweep, and writes:
//!
//! - `<output_dir>/reports.json`: one report per strategy and run;
//! - `<output_dir>/garsud_generations.csv`: best fitness per GA generation.
//!
//! ```text
//! rsu-deploy --config deploy.json -v
//! ```

mod output;
mod run;


use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use rsu_core::DeployConfig;
use rsu_spatial::{load_junctions_csv, JunctionSet};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rsu-deploy", version, about = "Optimize roadside-unit deployment over a road network")]
struct Cli {
    /// JSON run configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Write results here instead of the configured `output_dir`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).  `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

pub(crate) fn load_config(path: &Path) -> Result<DeployConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration {}", path.display()))?;
    let config: DeployConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing configuration {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(&cli.config)?;
    if let Some(dir) = cli.output {
        config.output_dir = dir;
    }

    let net = &config.network;
    let junctions = JunctionSet::new(
        load_junctions_csv(&net.junctions_csv)
            .with_context(|| format!("loading junctions from {}", net.junctions_csv.display()))?,
        net.x_offset,
        net.y_offset,
    );
    info!(
        "{} junctions, network [{}, {}] x [{}, {}], {} sweep runs",
        junctions.len(),
        net.x_min,
        net.x_max,
        net.y_min,
        net.y_max,
        config.sweep().len(),
    );

    let outcome = run::run_sweep(&config, &junctions)?;

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let reports_path = config.output_dir.join("reports.json");
    output::write_reports(&reports_path, &outcome.reports)?;
    info!("wrote {} reports to {}", outcome.reports.len(), reports_path.display());
    if !outcome.generations.is_empty() {
        let path = config.output_dir.join("garsud_generations.csv");
        output::write_generations(&path, &outcome.generations)?;
        info!("wrote {} generation rows to {}", outcome.generations.len(), path.display());
    }

    if outcome.failures > 0 {
        bail!("{} strategy runs failed; see log for details", outcome.failures);
    }
    Ok(())
}
