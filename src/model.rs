/// Parameters of an AR(1) process `x_i = beta + alpha * x_{i-1} + eps_i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Number of steps (observations) to simulate.
    pub n_steps: usize,
    /// Intercept.
    pub beta: f64,
    /// Autoregressive coefficient.
    pub alpha: f64,
    /// Standard deviation of the innovations.
    pub sigma: f64,
}

impl Params {
    /// Mean of the stationary distribution, `beta / (1 - alpha)`.
    ///
    /// Not finite when `alpha == 1`.
    pub fn stationary_mean(&self) -> f64 {
        self.beta / (1.0 - self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_mean_is_fixed_point() {
        let par = Params {
            n_steps: 1,
            beta: 1.0,
            alpha: 0.5,
            sigma: 1.0,
        };
        let mu = par.stationary_mean();
        assert_eq!(mu, 2.0);
        assert_eq!(par.beta + par.alpha * mu, mu);
    }

    #[test]
    fn stationary_mean_diverges_at_unit_root() {
        let par = Params {
            n_steps: 1,
            beta: 1.0,
            alpha: 1.0,
            sigma: 1.0,
        };
        assert!(par.stationary_mean().is_infinite());
    }
}
