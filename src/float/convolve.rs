use alloc::vec::Vec;
use num_complex::Complex;

use crate::common::FftError;
use super::complex::Fft;
use super::core::{ButterflyStrategy, Sample};

impl<T: Sample, S: ButterflyStrategy<T>> Fft<T, S> {
    /// Circular convolution over `size()` points:
    /// `y[k] = Σ_n a[n]·b[(k - n) mod N]`.
    pub fn circular_convolve(&self, a: &[T], b: &[T]) -> Result<Vec<T>, FftError> {
        self.combine(a, b, |x, y| x * y)
    }

    /// Circular cross-correlation over `size()` points:
    /// `r[k] = Σ_n a[(n + k) mod N]·b[n]`.
    ///
    /// Computed as `inverse(A·conj(B))`; swapping the conjugate onto `A`
    /// mirrors the lag axis.
    pub fn circular_correlate(&self, a: &[T], b: &[T]) -> Result<Vec<T>, FftError> {
        self.combine(a, b, |x, y| x * y.conj())
    }

    fn combine<F>(&self, a: &[T], b: &[T], op: F) -> Result<Vec<T>, FftError>
    where
        F: Fn(Complex<T>, Complex<T>) -> Complex<T>,
    {
        let fa = self.real_forward(a)?;
        let fb = self.real_forward(b)?;
        let product: Vec<Complex<T>> = fa.into_iter().zip(fb).map(|(x, y)| op(x, y)).collect();
        self.inverse_real(&product)
    }
}
