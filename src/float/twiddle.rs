// src/float/twiddle.rs

use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex;

use crate::common::{Direction, FftError};
use super::core::{Sample, sin_cos};

/// Which rotation directions a [`TwiddleTable`] stores.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TableLayout {
    /// `size` entries: forward rotations followed by inverse rotations.
    Both,
    /// `size / 2` entries for one direction only.
    Single(Direction),
}

/// Precomputed rotation factors for a radix-2 transform of `size` points.
///
/// Entry `k` of a direction's slice is `exp(sign·j·2πk/size)` for
/// `k < size / 2`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable<T> {
    factors: Vec<Complex<T>>,
    size: usize,
    layout: TableLayout,
}

impl<T: Sample> TwiddleTable<T> {
    pub fn new(size: usize, layout: TableLayout) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::InvalidLength(size));
        }
        if !size.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo(size));
        }

        let half = size / 2;
        let mut factors = Vec::with_capacity(size);
        match layout {
            TableLayout::Both => {
                precompute_twiddles(&mut factors, size, half, Direction::Forward);
                precompute_twiddles(&mut factors, size, half, Direction::Inverse);
            }
            TableLayout::Single(direction) => {
                precompute_twiddles(&mut factors, size, half, direction);
            }
        }

        Ok(Self { factors, size, layout })
    }

    /// Rotations for `direction`, `size / 2` entries long.
    pub fn rotations(&self, direction: Direction) -> Result<&[Complex<T>], FftError> {
        let half = self.size / 2;
        match (self.layout, direction) {
            (TableLayout::Both, Direction::Forward) => Ok(&self.factors[..half]),
            (TableLayout::Both, Direction::Inverse) => Ok(&self.factors[half..]),
            (TableLayout::Single(stored), _) if stored == direction => Ok(&self.factors),
            _ => Err(FftError::MissingRotation(direction)),
        }
    }

    /// Transform length the table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn layout(&self) -> TableLayout {
        self.layout
    }
}

fn precompute_twiddles<T: Sample>(
    factors: &mut Vec<Complex<T>>,
    size: usize,
    count: usize,
    direction: Direction,
) {
    for k in 0..count {
        let angle = direction.sign() * 2.0 * PI * (k as f64) / (size as f64);
        let (sin, cos) = sin_cos(angle);
        factors.push(Complex::new(T::from_f64(cos), T::from_f64(sin)));
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
