// src/common.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    #[error("Transform length must be a positive, representable size (got {0})")]
    InvalidLength(usize),
    #[error("Size must be a power of 2 (got {0})")]
    NotPowerOfTwo(usize),
    #[error("Data buffer of length {actual} does not fit FFT size {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Twiddle table holds no {0:?} rotations")]
    MissingRotation(Direction),
}

/// Sign convention of the transform kernel.
///
/// `Forward` is the canonical `exp(-j·2πk/N)` rotation, `Inverse` the
/// anti-canonical `exp(+j·2πk/N)`. Correlation and convolution callers rely
/// on this pairing, so it never changes between entry points.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Sign of the exponent in the rotation factor.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// What a facade does with input longer than its transform size.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum OverflowPolicy {
    /// Fail with [`FftError::SizeMismatch`] before touching any data.
    #[default]
    Reject,
    /// Drop the tail and log a warning.
    Truncate,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct FftConfig {
    pub overflow: OverflowPolicy,
}

impl FftConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

/// In-place transform over a caller-owned buffer.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], direction: Direction) -> Result<(), FftError>;
}
