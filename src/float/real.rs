use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::Zero;

use crate::common::{Direction, FftError};
use super::complex::Fft;
use super::core::{ButterflyStrategy, Sample, execute};

impl<T: Sample, S: ButterflyStrategy<T>> Fft<T, S> {
    /// Forward transform of a real signal, full `size()`-bin spectrum.
    ///
    /// Even and odd samples are packed into one complex sequence of N/2
    /// points, transformed, then split apart with the forward twiddles. The
    /// upper half is filled from Hermitian symmetry.
    pub fn real_forward(&self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        let samples = self.load(input, T::zero())?;
        let n = self.size();
        let half = self.half_size();
        if half == 0 {
            return Ok(samples.into_iter().map(|x| Complex::new(x, T::zero())).collect());
        }

        let mut packed: Vec<Complex<T>> = samples
            .chunks_exact(2)
            .map(|pair| Complex::new(pair[0], pair[1]))
            .collect();
        execute(&mut packed, Some(self.twiddles()), Direction::Forward, self.strategy())?;

        let mut spectrum = vec![Complex::zero(); n];
        unweave(&packed, self.twiddles().rotations(Direction::Forward)?, &mut spectrum[..=half]);
        for k in 1..half {
            spectrum[n - k] = spectrum[k].conj();
        }

        Ok(spectrum)
    }

    /// Magnitudes of bins `0..=N/2`, scaled by `2/N`.
    ///
    /// A sinusoid of amplitude `A` landing on bin `k` reads `A` at `k`.
    pub fn real_spectrum(&self, input: &[T]) -> Result<Vec<T>, FftError> {
        let spectrum = self.real_forward(input)?;
        let scale = T::from_f64(2.0) / T::from_len(self.size());
        Ok(spectrum[..=self.half_size()].iter().map(|bin| bin.norm() * scale).collect())
    }

    /// Inverse transform keeping only the real part of each sample.
    pub fn inverse_real(&self, input: &[Complex<T>]) -> Result<Vec<T>, FftError> {
        Ok(self.inverse(input)?.into_iter().map(|sample| sample.re).collect())
    }

    /// Rebuilds a real signal from the non-redundant bins `0..=N/2`.
    ///
    /// Missing bins are zero; bins above N/2 are the conjugates of their
    /// mirrors.
    pub fn inverse_real_half(&self, half_spectrum: &[Complex<T>]) -> Result<Vec<T>, FftError> {
        let n = self.size();
        let bins = self.half_size() + 1;
        if half_spectrum.len() > bins {
            return Err(FftError::SizeMismatch { expected: bins, actual: half_spectrum.len() });
        }

        let mut spectrum = vec![Complex::zero(); n];
        spectrum[..half_spectrum.len()].copy_from_slice(half_spectrum);
        for k in 1..self.half_size() {
            spectrum[n - k] = spectrum[k].conj();
        }

        self.inverse_real(&spectrum)
    }
}

/// Splits the N/2-point transform of packed even/odd samples into bins
/// `0..=N/2` of the N-point real transform.
///
/// `twiddles[k]` must be `exp(-j·2πk/N)`.
fn unweave<T: Sample>(packed: &[Complex<T>], twiddles: &[Complex<T>], out: &mut [Complex<T>]) {
    let m = packed.len();
    let half = T::from_f64(0.5);
    let minus_half_i = Complex::new(T::zero(), -half);

    for k in 0..m {
        let a = packed[k];
        let b = packed[(m - k) % m].conj();
        let even = (a + b).scale(half);
        let odd = (a - b) * minus_half_i;

        if k == 0 {
            // Nyquist bin: the rotation at N/2 is -1.
            out[m] = even - odd;
        }
        out[k] = even + twiddles[k] * odd;
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
