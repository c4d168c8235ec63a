use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::Zero;

use crate::common::{Direction, FftConfig, FftError, FftProcess, OverflowPolicy};
use super::core::{ButterflyStrategy, Radix2Dit, Sample, execute, normalize};
use super::twiddle::{TableLayout, TwiddleTable};

/// Rounds a requested block length up to the transform size.
pub fn transform_len(requested: usize) -> Result<usize, FftError> {
    if requested == 0 {
        return Err(FftError::InvalidLength(requested));
    }
    requested
        .checked_next_power_of_two()
        .ok_or(FftError::InvalidLength(requested))
}

/// Reusable transform for blocks of up to `size()` samples.
///
/// The twiddle table is computed once at construction and only read
/// afterwards, so a shared `&Fft` can serve concurrent calls: every
/// transform works on a buffer it allocates itself.
#[derive(Debug, Clone)]
pub struct Fft<T: Sample, S = Radix2Dit> {
    twiddles: TwiddleTable<T>,
    n: usize,
    half: usize,
    config: FftConfig,
    strategy: S,
}

impl<T: Sample> Fft<T> {
    /// Prepares a transform for `max_len` samples, rounded up to a power of two.
    pub fn new(max_len: usize) -> Result<Self, FftError> {
        Self::with_strategy(max_len, Radix2Dit)
    }
}

impl<T: Sample, S: ButterflyStrategy<T>> Fft<T, S> {
    pub fn with_strategy(max_len: usize, strategy: S) -> Result<Self, FftError> {
        Self::with_config(max_len, FftConfig::default(), strategy)
    }

    pub fn with_config(max_len: usize, config: FftConfig, strategy: S) -> Result<Self, FftError> {
        let n = transform_len(max_len)?;
        let twiddles = TwiddleTable::new(n, TableLayout::Both)?;
        tracing::debug!(requested = max_len, size = n, "prepared radix-2 transform");

        Ok(Self { twiddles, n, half: n / 2, config, strategy })
    }

    /// Unnormalized forward transform of `input`, zero-padded to `size()`.
    pub fn forward(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut buffer = self.load(input, Complex::zero())?;
        execute(&mut buffer, Some(&self.twiddles), Direction::Forward, &self.strategy)?;
        Ok(buffer)
    }

    /// Inverse transform scaled by `1/size()`, so `inverse(forward(x)) == x`.
    pub fn inverse(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut buffer = self.load(input, Complex::zero())?;
        execute(&mut buffer, Some(&self.twiddles), Direction::Inverse, &self.strategy)?;
        normalize(&mut buffer);
        Ok(buffer)
    }

    /// Transforms a buffer of exactly `size()` samples in place.
    pub fn process(&self, buffer: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch { expected: self.n, actual: buffer.len() });
        }

        execute(buffer, Some(&self.twiddles), direction, &self.strategy)?;
        if direction == Direction::Inverse {
            normalize(buffer);
        }

        Ok(())
    }

    /// Transform size N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// N / 2.
    pub fn half_size(&self) -> usize {
        self.half
    }

    pub fn config(&self) -> &FftConfig {
        &self.config
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub(crate) fn twiddles(&self) -> &TwiddleTable<T> {
        &self.twiddles
    }

    /// Copies `input` into a fresh buffer of `size()` samples, padding with `fill`.
    pub(crate) fn load<U: Copy>(&self, input: &[U], fill: U) -> Result<Vec<U>, FftError> {
        let mut len = input.len();
        if len > self.n {
            match self.config.overflow {
                OverflowPolicy::Reject => {
                    return Err(FftError::SizeMismatch { expected: self.n, actual: len });
                }
                OverflowPolicy::Truncate => {
                    tracing::warn!(
                        size = self.n,
                        dropped = len - self.n,
                        "input longer than transform size, truncating"
                    );
                    len = self.n;
                }
            }
        }

        let mut buffer = Vec::with_capacity(self.n);
        buffer.extend_from_slice(&input[..len]);
        buffer.resize(self.n, fill);
        Ok(buffer)
    }
}

impl<T: Sample, S: ButterflyStrategy<T>> FftProcess<Complex<T>> for Fft<T, S> {
    fn process(&self, buffer: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
        Fft::process(self, buffer, direction)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
