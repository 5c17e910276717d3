use crate::model::Params;
use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Benchmark configuration.
///
/// Starts from the reference values, optionally replaced by a TOML file
/// (see [`Config::from_file`]) and then by [`Overrides`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of simulation steps.
    pub n_steps: usize,
    /// Intercept of the process.
    pub beta: f64,
    /// Autoregressive coefficient.
    pub alpha: f64,
    /// Standard deviation of the innovations.
    pub sigma: f64,

    /// Seed of the random source.
    pub seed: u64,
    /// Seed the random source from OS entropy instead of `seed`.
    pub os_seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_steps: 10_000_000,
            beta: 1.0,
            alpha: 0.9,
            sigma: 1.0,
            seed: 1,
            os_seed: false,
        }
    }
}

/// Per-field overrides taken from the command line or the environment.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Number of simulation steps
    #[arg(long, env = "AR1_N_STEPS")]
    pub n_steps: Option<usize>,

    /// Intercept of the process
    #[arg(long, env = "AR1_BETA", allow_negative_numbers = true)]
    pub beta: Option<f64>,

    /// Autoregressive coefficient
    #[arg(long, env = "AR1_ALPHA", allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Standard deviation of the innovations
    #[arg(long, env = "AR1_SIGMA", allow_negative_numbers = true)]
    pub sigma: Option<f64>,

    /// Seed of the random source
    #[arg(long, env = "AR1_SEED")]
    pub seed: Option<u64>,

    /// Seed the random source from OS entropy
    #[arg(long, env = "AR1_OS_SEED")]
    pub os_seed: bool,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let text = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&text).with_context(|| format!("failed to parse {file:?}"))
    }

    fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("failed to deserialize config")?;
        Ok(config)
    }

    /// Replace every field for which an override is given.
    pub fn apply(&mut self, ovr: &Overrides) {
        if let Some(n_steps) = ovr.n_steps {
            self.n_steps = n_steps;
        }
        if let Some(beta) = ovr.beta {
            self.beta = beta;
        }
        if let Some(alpha) = ovr.alpha {
            self.alpha = alpha;
        }
        if let Some(sigma) = ovr.sigma {
            self.sigma = sigma;
        }
        if let Some(seed) = ovr.seed {
            self.seed = seed;
        }
        if ovr.os_seed {
            self.os_seed = true;
        }
    }

    /// Process parameters of this configuration.
    pub fn params(&self) -> Params {
        if self.alpha.abs() >= 1.0 {
            log::warn!("process is not stationary (alpha = {})", self.alpha);
        }
        Params {
            n_steps: self.n_steps,
            beta: self.beta,
            alpha: self.alpha,
            sigma: self.sigma,
        }
    }
}
