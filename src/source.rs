//! Sources of Gaussian innovations.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use rand_distr::{Distribution, StandardNormal};
use std::convert::Infallible;
use thiserror::Error;

/// A source of independent zero-mean Gaussian draws.
pub trait RandomSource {
    /// Error raised by a failed draw.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draw one normal variate with mean zero and standard deviation `std_dev`.
    fn draw(&mut self, std_dev: f64) -> Result<f64, Self::Error>;
}

/// Errors raised while creating a random source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The generator state could not be allocated or seeded.
    #[error("failed to allocate random source: {0}")]
    Allocation(String),
}

/// Default random source.
///
/// Standard-normal variates from a ChaCha12 generator, scaled by the
/// requested standard deviation. The same seed always yields the same
/// sequence of draws.
pub struct GaussianSource {
    rng: ChaCha12Rng,
    n_draws: u64,
}

impl GaussianSource {
    /// Create a source seeded deterministically with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        log::debug!("created random source with seed {seed}");
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed),
            n_draws: 0,
        }
    }

    /// Create a source seeded from operating system entropy.
    ///
    /// # Errors
    /// Returns [`SourceError::Allocation`] if the operating system cannot
    /// provide a seed.
    pub fn from_os_rng() -> Result<Self, SourceError> {
        let rng = ChaCha12Rng::try_from_os_rng()
            .map_err(|err| SourceError::Allocation(err.to_string()))?;
        log::debug!("created random source from OS entropy");
        Ok(Self { rng, n_draws: 0 })
    }

    /// Number of draws made so far.
    pub fn n_draws(&self) -> u64 {
        self.n_draws
    }

    /// Release the source, returning the number of draws it made.
    pub fn destroy(self) -> u64 {
        let n_draws = self.n_draws();
        log::debug!("destroyed random source after {n_draws} draws");
        n_draws
    }
}

impl RandomSource for GaussianSource {
    type Error = Infallible;

    fn draw(&mut self, std_dev: f64) -> Result<f64, Self::Error> {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        self.n_draws += 1;
        Ok(std_dev * z)
    }
}
