//! Stateless transforms for callers without a fixed block size.
//!
//! Each call rounds the input length up to a power of two, builds a
//! single-direction twiddle table for it and drops the table on return.
//! The `*_with` variants take the butterfly back-end explicitly.

use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::Zero;

use crate::common::{Direction, FftError};
use super::complex::transform_len;
use super::core::{ButterflyStrategy, Radix2Dit, Sample, execute, normalize};

pub fn fft<T: Sample>(samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    fft_with(&Radix2Dit, samples)
}

pub fn ifft<T: Sample>(samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    ifft_with(&Radix2Dit, samples)
}

pub fn rfft<T: Sample>(samples: &[T]) -> Result<Vec<Complex<T>>, FftError> {
    rfft_with(&Radix2Dit, samples)
}

pub fn irfft<T: Sample>(samples: &[Complex<T>]) -> Result<Vec<T>, FftError> {
    irfft_with(&Radix2Dit, samples)
}

pub fn half_spectrum<T: Sample>(samples: &[T]) -> Result<Vec<T>, FftError> {
    half_spectrum_with(&Radix2Dit, samples)
}

pub fn fft_with<T, S>(strategy: &S, samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>
where
    T: Sample,
    S: ButterflyStrategy<T> + ?Sized,
{
    let mut buffer = padded(samples)?;
    execute(&mut buffer, None, Direction::Forward, strategy)?;
    Ok(buffer)
}

pub fn ifft_with<T, S>(strategy: &S, samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>
where
    T: Sample,
    S: ButterflyStrategy<T> + ?Sized,
{
    let mut buffer = padded(samples)?;
    execute(&mut buffer, None, Direction::Inverse, strategy)?;
    normalize(&mut buffer);
    Ok(buffer)
}

pub fn rfft_with<T, S>(strategy: &S, samples: &[T]) -> Result<Vec<Complex<T>>, FftError>
where
    T: Sample,
    S: ButterflyStrategy<T> + ?Sized,
{
    let promoted: Vec<Complex<T>> = samples.iter().map(|&x| Complex::new(x, T::zero())).collect();
    fft_with(strategy, &promoted)
}

pub fn irfft_with<T, S>(strategy: &S, samples: &[Complex<T>]) -> Result<Vec<T>, FftError>
where
    T: Sample,
    S: ButterflyStrategy<T> + ?Sized,
{
    Ok(ifft_with(strategy, samples)?.into_iter().map(|sample| sample.re).collect())
}

/// Magnitudes of bins `0..=N/2` scaled by `2/N`, N being the rounded length.
pub fn half_spectrum_with<T, S>(strategy: &S, samples: &[T]) -> Result<Vec<T>, FftError>
where
    T: Sample,
    S: ButterflyStrategy<T> + ?Sized,
{
    let spectrum = rfft_with(strategy, samples)?;
    let n = spectrum.len();
    let scale = T::from_f64(2.0) / T::from_len(n);
    Ok(spectrum[..=n / 2].iter().map(|bin| bin.norm() * scale).collect())
}

fn padded<T: Sample>(samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = transform_len(samples.len())?;
    let mut buffer = Vec::with_capacity(n);
    buffer.extend_from_slice(samples);
    buffer.resize(n, Complex::zero());
    Ok(buffer)
}

#[cfg(test)]
#[path = "oneshot_tests.rs"]
mod tests;
