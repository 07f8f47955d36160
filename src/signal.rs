//! Lazily sampled time signals.
//!
//! A [`TimeSequence`] evaluates a function of time at a fixed sample
//! interval, one value per call to `next`. The sequence never ends, so
//! callers bound it with `take` or [`collect_samples`].
use ndarray::Array1;
use num_traits::Float;
use std::iter::FusedIterator;

/// Infinite sequence `f(0), f(ts), f(2*ts), ...`.
///
/// Time advances by repeated addition of `ts` after each sample.
///
/// # Example
/// ```
/// use rustdft::signal::time_sequence;
///
/// let x: Vec<f64> = time_sequence(0.5, |t: f64| 2.0 * t).take(3).collect();
/// assert_eq!(x, vec![0.0, 1.0, 2.0]);
/// ```
#[derive(Clone)]
pub struct TimeSequence<T, F> {
    t: T,
    ts: T,
    func: F,
}

impl<T, F> TimeSequence<T, F>
where
    T: Float,
    F: FnMut(T) -> T,
{
    /// Creates a new `TimeSequence` starting at `t = 0`.
    ///
    /// # Arguments
    ///
    /// * `ts` - Sample interval. Expected to be positive, this is not checked.
    /// * `func` - Signal as a function of time.
    pub fn new(ts: T, func: F) -> Self {
        TimeSequence {
            t: T::zero(),
            ts,
            func,
        }
    }

    /// Time of the next sample.
    pub fn time(&self) -> T {
        self.t
    }
}

impl<T, F> Iterator for TimeSequence<T, F>
where
    T: Float,
    F: FnMut(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = (self.func)(self.t);
        self.t = self.t + self.ts;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for TimeSequence<T, F>
where
    T: Float,
    F: FnMut(T) -> T,
{
}

/// Shorthand for [`TimeSequence::new`].
pub fn time_sequence<T, F>(ts: T, func: F) -> TimeSequence<T, F>
where
    T: Float,
    F: FnMut(T) -> T,
{
    TimeSequence::new(ts, func)
}

/// Materializes the first `n` samples of a signal.
///
/// # Example
/// ```
/// use rustdft::signal::{collect_samples, time_sequence};
///
/// let x = collect_samples(time_sequence(0.25, |t: f64| t), 4);
/// assert_eq!(x.len(), 4);
/// assert_eq!(x[3], 0.75);
/// ```
pub fn collect_samples<T, I>(signal: I, n: usize) -> Array1<T>
where
    I: Iterator<Item = T>,
{
    signal.take(n).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_cosine_prefix() {
        let ts = 0.0001;
        let x = collect_samples(time_sequence(ts, |t: f64| (2. * PI * t).cos()), 4096);
        assert_eq!(x.len(), 4096);
        assert_eq!(x[0], 1.0);

        let dif = 1e-9;
        for (m, v) in x.iter().enumerate() {
            let expected = (2. * PI * ts * m as f64).cos();
            if (v - expected).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", v, expected)
            }
        }
    }

    #[test]
    fn test_time_advances_per_sample() {
        let mut calls = 0;
        let mut seq = time_sequence(0.5_f32, |t| {
            calls += 1;
            t
        });
        assert_eq!(seq.time(), 0.0);
        assert_eq!(seq.next(), Some(0.0));
        assert_eq!(seq.next(), Some(0.5));
        assert_eq!(seq.time(), 1.0);
        drop(seq);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_never_ends() {
        let mut seq = time_sequence(1.0_f64, |t| t);
        assert_eq!(seq.size_hint(), (usize::MAX, None));
        assert_eq!(seq.nth(999), Some(999.0));
    }
}
