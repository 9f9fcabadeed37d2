//! SA configuration and cooling schedule.

use crate::error::{PartitionError, Result};
use crate::local::MAX_ITERATIONS;

/// Configuration for the Simulated Annealing algorithm.
///
/// The temperature is piecewise constant: it stays fixed for
/// `iterations_per_temperature` iterations, then is multiplied by
/// `cooling_factor`.
///
/// ```text
/// T(i) = initial_temperature * cooling_factor ^ floor(i / iterations_per_temperature)
/// ```
///
/// # Examples
///
/// ```
/// use u_partition::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1e6)
///     .with_cooling_factor(0.9)
///     .with_iterations_per_temperature(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Temperature of the first block.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied once per block.
    pub cooling_factor: f64,

    /// Number of iterations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Total number of neighbor evaluations.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1e10,
            cooling_factor: 0.8,
            iterations_per_temperature: 300,
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature in effect at `iteration` (0-based).
    pub fn temperature(&self, iteration: usize) -> f64 {
        let block = iteration / self.iterations_per_temperature;
        let exponent = i32::try_from(block).unwrap_or(i32::MAX);
        self.initial_temperature * self.cooling_factor.powi(exponent)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(PartitionError::InvalidConfig(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(PartitionError::InvalidConfig(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(PartitionError::InvalidConfig(
                "iterations_per_temperature must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1e10).abs() < 1.0);
        assert!((config.cooling_factor - 0.8).abs() < 1e-15);
        assert_eq!(config.iterations_per_temperature, 300);
        assert_eq!(config.max_iterations, 25_000);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_temperature_is_piecewise_constant() {
        let config = SaConfig::default();
        assert_eq!(config.temperature(0), 1e10);
        assert_eq!(config.temperature(299), 1e10);
        assert!((config.temperature(300) - 8e9).abs() < 1e-3);
        assert!((config.temperature(599) - 8e9).abs() < 1e-3);
        assert!((config.temperature(600) - 6.4e9).abs() < 1e-3);
    }

    #[test]
    fn test_temperature_last_block() {
        let config = SaConfig::default();
        let expected = 1e10 * 0.8f64.powi(24_999 / 300);
        assert!((config.temperature(24_999) - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_factor() {
        assert!(SaConfig::default().with_cooling_factor(1.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_factor(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_block_length() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert!(matches!(
            config.validate(),
            Err(PartitionError::InvalidConfig(_))
        ));
    }
}
