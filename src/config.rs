//! Benchmark scenario.
use crate::DftError;

/// Fixed scenario run by the `rustdft` binary.
///
/// The defaults sample one second worth of `cos(2π·t)` at 10 kHz, take the
/// first 4096 samples and time each transform over 10 calls.
///
/// # Example
/// ```
/// use rustdft::BenchConfig;
///
/// let config = BenchConfig::default();
/// assert_eq!(config.samples, 4096);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Number of samples taken from the signal, equals the transform length
    pub samples: usize,
    /// Time between two samples in seconds
    pub sample_interval: f64,
    /// Frequency of the sampled cosine in Hz
    pub frequency: f64,
    /// Calls per transform the average is taken over
    pub repeats: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            samples: 4096,
            sample_interval: 0.0001,
            frequency: 1.0,
            repeats: 10,
        }
    }
}

impl BenchConfig {
    /// Rejects scenarios the harness cannot run.
    ///
    /// # Errors
    ///
    /// [`DftError::InvalidArg`] for zero samples, zero repeats or a
    /// sample interval that is not strictly positive.
    pub fn validate(&self) -> Result<(), DftError> {
        if self.samples == 0 {
            return Err(DftError::invalid_arg("samples", "must be at least 1"));
        }
        if self.repeats == 0 {
            return Err(DftError::invalid_arg("repeats", "must be at least 1"));
        }
        if !(self.sample_interval > 0.) {
            return Err(DftError::invalid_arg(
                "sample_interval",
                "must be strictly positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let config = BenchConfig::default();
        assert_eq!(config.samples, 4096);
        assert_eq!(config.sample_interval, 0.0001);
        assert_eq!(config.frequency, 1.0);
        assert_eq!(config.repeats, 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects() {
        let config = BenchConfig {
            repeats: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DftError::InvalidArg { ref arg, .. }) if arg == "repeats"
        ));

        let config = BenchConfig {
            sample_interval: f64::NAN,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            samples: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
