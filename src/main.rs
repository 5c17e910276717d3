mod config;
mod engine;
mod model;
mod runner;
mod source;

use crate::config::{Config, Overrides};
use crate::runner::Runner;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with the benchmark configuration
    #[arg(long, env = "AR1_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    cfg.apply(&args.overrides);
    log::info!("{cfg:#?}");

    let report = Runner::new(cfg).run().context("failed to run benchmark")?;
    println!("{report}");

    Ok(())
}
