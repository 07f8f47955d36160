//! # rustdft: direct discrete Fourier transform of real signals, serial and parallel
//!
//! This library computes the full complex spectrum of a real-valued
//! one-dimensional ndarray by direct O(n²) summation
//!
//! X\[k\] = Σ x\[m\] (cos(w k m) - i sin(w k m)),   w = 2π / n
//!
//! rustdft provides a Handler struct, [`DftHandler`], which must be provided to
//! [`dft`] or [`dft_par`] alongside the input array. The handler holds the
//! transform length, the angular step and the table of frequency indices, so
//! repeated transforms of the same length share that setup.
//!
//! Both transforms sum every frequency bin in the same order, hence their
//! results agree bitwise.
//!
//! ## Parallel
//! With the `parallel` feature (enabled by default) the library ships
//! [`dft_par`], which computes the frequency bins on the rayon thread pool
//! through the parallel abilities of ndarray.
//!
//! ## Example
//! ```
//! use ndarray::array;
//! use rustdft::{dft, DftHandler};
//!
//! let x = array![1., 0., -1., 0.];
//! let handler: DftHandler<f64> = DftHandler::new(x.len()).unwrap();
//! let xhat = dft(&x, &handler).unwrap();
//! assert!((xhat[1].re - 2.).abs() < 1e-12);
//! ```
#![warn(missing_docs)]
use ndarray::{Array1, ArrayBase, Data, Ix1, Zip};
use num_traits::Float;
pub use rustfft::num_complex::Complex;
pub use rustfft::num_traits::Zero;
pub use rustfft::FftNum;
use std::borrow::Cow;

pub mod bench;
pub mod config;
mod error;
pub mod signal;

pub use config::BenchConfig;
pub use error::DftError;

/// # Discrete Fourier Transform of real data.
///
/// Transforms a real array of size *n* to a complex array of size *n*.
///
/// The accompanying functions are [`dft`] (serial) and [`dft_par`] (parallel).
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use rustdft::{dft, DftHandler};
///
/// let n = 8;
/// let data = Array1::from_iter((0..n).map(|i| i as f64));
/// let handler: DftHandler<f64> = DftHandler::new(n).unwrap();
/// let vhat = dft(&data, &handler).unwrap();
/// assert_eq!(vhat.len(), n);
/// ```
pub struct DftHandler<T> {
    n: usize,
    w: T,
    freqs: Array1<T>,
}

impl<T: FftNum + Float> DftHandler<T> {
    /// Creates a new `DftHandler`.
    ///
    /// # Arguments
    ///
    /// * `n` - Length of the signal. The spectrum has the same length.
    /// For `n = 0` the transform returns an empty spectrum.
    ///
    /// # Errors
    ///
    /// `n` is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rustdft::DftHandler;
    /// let handler: DftHandler<f64> = DftHandler::new(10).unwrap();
    /// assert_eq!(handler.len(), 10);
    /// ```
    pub fn new(n: usize) -> Result<Self, DftError> {
        let w = if n == 0 {
            T::zero()
        } else {
            let two_pi = T::from_f64(2. * std::f64::consts::PI)
                .ok_or_else(|| DftError::invalid_arg("T", "cannot represent 2π"))?;
            let len = T::from_usize(n)
                .ok_or_else(|| DftError::invalid_arg("n", "not representable in T"))?;
            two_pi / len
        };
        // Counting up keeps every index an exact integer in T.
        let mut k = T::zero();
        let freqs = Array1::from_shape_simple_fn(n, || {
            let v = k;
            k = k + T::one();
            v
        });
        Ok(DftHandler { n, w, freqs })
    }

    /// Length of signal and spectrum.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the handler transforms empty signals.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Angular step `2π / n`.
    pub fn angular_step(&self) -> T {
        self.w
    }

    /// Coefficient of frequency bin `k`, summed over `m = 0..n` in order.
    fn bin(&self, data: &[T], k: T) -> Complex<T> {
        let wk = self.w * k;
        let mut m = T::zero();
        let mut acc = Complex::zero();
        for &xm in data {
            let phi = wk * m;
            acc = acc + Complex::new(xm * phi.cos(), -xm * phi.sin());
            m = m + T::one();
        }
        acc
    }

    fn dft_lane(&self, data: &[T], out: &mut Array1<Complex<T>>) {
        Zip::from(out)
            .and(&self.freqs)
            .for_each(|y, &k| *y = self.bin(data, k));
    }

    #[cfg(feature = "parallel")]
    fn dft_lane_par(&self, data: &[T], out: &mut Array1<Complex<T>>) -> Result<(), DftError> {
        self.fill_bins_par(out, |k| self.bin(data, k))
    }

    /// Fans the bins out over the rayon pool and waits for all of them.
    /// A panicking worker turns into a single error for the whole call.
    #[cfg(feature = "parallel")]
    fn fill_bins_par<F>(&self, out: &mut Array1<Complex<T>>, bin: F) -> Result<(), DftError>
    where
        F: Fn(T) -> Complex<T> + Sync + Send,
    {
        use std::panic::{catch_unwind, AssertUnwindSafe};
        catch_unwind(AssertUnwindSafe(|| {
            Zip::from(out)
                .and(&self.freqs)
                .par_for_each(|y, &k| *y = bin(k));
        }))
        .map_err(|payload| {
            let reason = panic_message(payload.as_ref());
            tracing::error!(n = self.n, %reason, "parallel dft worker panicked");
            DftError::WorkerPanicked { reason }
        })
    }

    fn check_size(&self, size: usize) -> Result<(), DftError> {
        if size == self.n {
            Ok(())
        } else {
            Err(DftError::SizeMismatch {
                expected: self.n,
                got: size,
            })
        }
    }
}

#[cfg(feature = "parallel")]
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic payload")
    }
}

/// Borrow contiguous input, copy strided input.
fn lane<R, T>(input: &ArrayBase<R, Ix1>) -> Cow<'_, [T]>
where
    R: Data<Elem = T>,
    T: Clone,
{
    match input.as_slice() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(input.to_vec()),
    }
}

/// Real-to-complex Discrete Fourier Transform (serial).
///
/// Returns a freshly allocated spectrum of the same length as `input`.
///
/// # Errors
///
/// [`DftError::SizeMismatch`] if `input.len()` differs from `handler.len()`.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use rustdft::{dft, DftHandler};
///
/// // Constant signal: all energy in bin 0.
/// let data = Array1::from_elem(6, 2.5);
/// let handler: DftHandler<f64> = DftHandler::new(6).unwrap();
/// let vhat = dft(&data, &handler).unwrap();
/// assert!((vhat[0].re - 15.).abs() < 1e-12);
/// assert!(vhat[3].norm() < 1e-12);
/// ```
pub fn dft<R, T>(
    input: &ArrayBase<R, Ix1>,
    handler: &DftHandler<T>,
) -> Result<Array1<Complex<T>>, DftError>
where
    T: FftNum + Float,
    R: Data<Elem = T>,
{
    handler.check_size(input.len())?;
    tracing::debug!(n = handler.n, "dft");
    let data = lane(input);
    let mut out = Array1::zeros(handler.n);
    handler.dft_lane(&data, &mut out);
    Ok(out)
}

/// Real-to-complex Discrete Fourier Transform (parallel).
///
/// Each frequency bin is computed by exactly one rayon worker; the call
/// returns once all bins are done.
///
/// Further infos: see [`dft`]
///
/// # Errors
///
/// [`DftError::SizeMismatch`] as for [`dft`], and
/// [`DftError::WorkerPanicked`] if a worker panicked. No partial spectrum is
/// returned in that case.
///
/// # Example
/// ```
/// use ndarray::array;
/// use rustdft::{dft, dft_par, DftHandler};
///
/// let x = array![3., 1., 2., -1., 0.5];
/// let handler: DftHandler<f64> = DftHandler::new(x.len()).unwrap();
/// assert_eq!(dft(&x, &handler).unwrap(), dft_par(&x, &handler).unwrap());
/// ```
#[cfg(feature = "parallel")]
pub fn dft_par<R, T>(
    input: &ArrayBase<R, Ix1>,
    handler: &DftHandler<T>,
) -> Result<Array1<Complex<T>>, DftError>
where
    T: FftNum + Float,
    R: Data<Elem = T>,
{
    handler.check_size(input.len())?;
    tracing::debug!(
        n = handler.n,
        threads = rayon::current_num_threads(),
        "dft_par"
    );
    let data = lane(input);
    let mut out = Array1::zeros(handler.n);
    handler.dft_lane_par(&data, &mut out)?;
    Ok(out)
}
