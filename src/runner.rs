use crate::config::Config;
use crate::engine;
use crate::source::GaussianSource;
use anyhow::{Context, Result};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Sample mean of the simulated trajectory.
    pub mean: f64,
    /// Time spent in the simulation loop.
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean = {}", self.mean)?;
        write!(f, "time elapsed = {} seconds", self.elapsed.as_secs_f64())
    }
}

/// Runs the benchmark for a fixed configuration.
pub struct Runner {
    cfg: Config,
}

impl Runner {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Create the random source, time one simulation and release the source.
    pub fn run(&self) -> Result<Report> {
        let par = self.cfg.params();

        let mut src = if self.cfg.os_seed {
            GaussianSource::from_os_rng().context("failed to create random source")?
        } else {
            GaussianSource::from_seed(self.cfg.seed)
        };

        let start = Instant::now();
        let mean = engine::simulate(&par, &mut src).context("failed to simulate process")?;
        let elapsed = start.elapsed();

        src.destroy();
        log::info!("simulated {} steps in {elapsed:?}", par.n_steps);

        Ok(Report { mean, elapsed })
    }
}
