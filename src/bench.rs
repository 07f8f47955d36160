//! Wall-clock timing of repeated transform calls.
//!
//! ```
//! use ndarray::Array1;
//! use rustdft::{bench, dft, DftHandler};
//!
//! let x = Array1::from_elem(16, 1.0);
//! let handler: DftHandler<f64> = DftHandler::new(16).unwrap();
//! let timing = bench::measure("DFT", 3, || dft(&x, &handler)).unwrap();
//! assert_eq!(timing.repeats(), 3);
//! ```
use crate::DftError;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Average duration of one call, measured over several calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    label: String,
    total: Duration,
    repeats: usize,
}

impl Timing {
    fn new(label: &str, total: Duration, repeats: usize) -> Self {
        Timing {
            label: label.to_string(),
            total,
            repeats,
        }
    }

    /// Name printed in front of the timing.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time spent in all calls together.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of calls.
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Mean time per call in milliseconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1e3 / self.repeats as f64
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6} msec.", self.label, self.average_ms())
    }
}

/// Calls `kernel` `repeats` times back to back and times the whole loop.
///
/// Results are fed through [`black_box`] and dropped.
///
/// # Errors
///
/// [`DftError::InvalidArg`] if `repeats` is zero. The first error returned
/// by `kernel` stops the loop and is passed on.
pub fn measure<F, O>(label: &str, repeats: usize, mut kernel: F) -> Result<Timing, DftError>
where
    F: FnMut() -> Result<O, DftError>,
{
    if repeats == 0 {
        return Err(DftError::invalid_arg("repeats", "must be at least 1"));
    }
    let start = Instant::now();
    for _ in 0..repeats {
        black_box(kernel()?);
    }
    let timing = Timing::new(label, start.elapsed(), repeats);
    tracing::debug!(
        label,
        repeats,
        average_ms = timing.average_ms(),
        "measurement done"
    );
    Ok(timing)
}
