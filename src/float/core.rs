// src/float/core.rs

use core::fmt::Debug;
use num_complex::Complex;
use num_traits::Float;

use crate::common::{Direction, FftError};
use super::twiddle::{TableLayout, TwiddleTable};

/// Real scalar the engine computes in. Implemented for `f32` and `f64`.
pub trait Sample: Float + Debug + Send + Sync + 'static {
    /// Narrows an `f64` value (twiddle angles are evaluated in double precision).
    fn from_f64(value: f64) -> Self;

    /// Converts a transform length into a scale factor.
    fn from_len(len: usize) -> Self;
}

impl Sample for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn from_len(len: usize) -> Self {
        len as f32
    }
}

impl Sample for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_len(len: usize) -> Self {
        len as f64
    }
}

/// Agnostic sin/cos helper.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return libm::sincos(angle);
}

/// Position of `index` after reversing its lowest `bits` bits.
pub fn bit_reversed_index(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Reorders `buffer` into bit-reversed index order, in place.
///
/// `j` walks the reversed counter alongside `i`; each pair is swapped once,
/// when `i < j`. The length must be a power of two.
pub fn bit_reverse_permute<T>(buffer: &mut [T]) {
    let n = buffer.len();
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Butterfly back-end applied after bit reversal.
///
/// `twiddles` holds the rotations of one direction for a table of size
/// `buffer.len() * twiddle_stride`; index `k * twiddle_stride` is
/// `exp(±j·2πk/buffer.len())`.
pub trait ButterflyStrategy<T: Sample> {
    fn butterflies(&self, buffer: &mut [Complex<T>], twiddles: &[Complex<T>], twiddle_stride: usize);
}

/// Iterative radix-2 decimation-in-time passes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Radix2Dit;

impl<T: Sample> ButterflyStrategy<T> for Radix2Dit {
    fn butterflies(&self, buffer: &mut [Complex<T>], twiddles: &[Complex<T>], twiddle_stride: usize) {
        let n = buffer.len();
        let mut half = 1;
        let mut tw_index = n >> 1;

        while half < n {
            let step = tw_index * twiddle_stride;
            for block in buffer.chunks_exact_mut(half << 1) {
                let (evens, odds) = block.split_at_mut(half);
                for (k, (even, odd)) in evens.iter_mut().zip(odds.iter_mut()).enumerate() {
                    let a = *even;
                    let t = *odd * twiddles[k * step];
                    *even = a + t;
                    *odd = a - t;
                }
            }
            half <<= 1;
            tw_index >>= 1;
        }
    }
}

impl<T: Sample, S: ButterflyStrategy<T> + ?Sized> ButterflyStrategy<T> for &S {
    fn butterflies(&self, buffer: &mut [Complex<T>], twiddles: &[Complex<T>], twiddle_stride: usize) {
        (**self).butterflies(buffer, twiddles, twiddle_stride)
    }
}

/// Runs one unnormalized transform of `buffer` in place.
///
/// With a cached table the rotations are sampled at the stride matching
/// `buffer.len()`; without one a single-direction table is built for this call.
pub(crate) fn execute<T, S>(
    buffer: &mut [Complex<T>],
    cached: Option<&TwiddleTable<T>>,
    direction: Direction,
    strategy: &S,
) -> Result<(), FftError>
where
    T: Sample,
    S: ButterflyStrategy<T> + ?Sized,
{
    let n = buffer.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(n));
    }

    match cached {
        Some(table) => {
            if table.size() < n {
                return Err(FftError::SizeMismatch { expected: table.size(), actual: n });
            }
            let twiddles = table.rotations(direction)?;
            bit_reverse_permute(buffer);
            strategy.butterflies(buffer, twiddles, table.size() / n);
        }
        None => {
            tracing::trace!(size = n, ?direction, "building one-shot twiddle table");
            let table = TwiddleTable::new(n, TableLayout::Single(direction))?;
            let twiddles = table.rotations(direction)?;
            bit_reverse_permute(buffer);
            strategy.butterflies(buffer, twiddles, 1);
        }
    }

    Ok(())
}

/// Divides every sample by the buffer length.
pub(crate) fn normalize<T: Sample>(buffer: &mut [Complex<T>]) {
    let scale = T::one() / T::from_len(buffer.len());
    for sample in buffer.iter_mut() {
        *sample = sample.scale(scale);
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
