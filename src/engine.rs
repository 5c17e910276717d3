use crate::model::Params;
use crate::source::RandomSource;
use thiserror::Error;

/// Errors raised by [`simulate`].
#[derive(Debug, Error)]
pub enum SimError<E> {
    /// Parameters for which the sample mean is undefined.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Failure of the random source, passed through unchanged.
    #[error(transparent)]
    Source(E),
}

/// Simulate one trajectory of an AR(1) process and return its sample mean.
///
/// The trajectory starts at the stationary mean `x_0 = beta / (1 - alpha)`.
/// Each step first adds the current value to the running sum and then
/// applies `x = beta + alpha * x + eps` with `eps ~ N(0, sigma^2)`, so the
/// mean is taken over `x_0 .. x_{n-1}` and the last update is discarded.
///
/// The source is advanced by exactly `par.n_steps` draws.
///
/// # Errors
/// Returns [`SimError::InvalidArgument`] if `n_steps == 0` or `alpha == 1`,
/// before any draw is made, and [`SimError::Source`] if a draw fails.
pub fn simulate<S: RandomSource>(par: &Params, src: &mut S) -> Result<f64, SimError<S::Error>> {
    if par.n_steps == 0 {
        return Err(SimError::InvalidArgument("number of steps must be positive"));
    }
    if par.alpha == 1.0 {
        return Err(SimError::InvalidArgument(
            "autoregressive coefficient must not be 1",
        ));
    }

    let mut x = par.stationary_mean();
    let mut sum = 0.0;
    for _ in 0..par.n_steps {
        sum += x;
        x = par.beta + par.alpha * x + src.draw(par.sigma).map_err(SimError::Source)?;
    }

    Ok(sum / par.n_steps as f64)
}
