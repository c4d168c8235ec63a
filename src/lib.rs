#![no_std]

//! Radix-2 Cooley-Tukey FFT with precomputed twiddle tables.
//!
//! [`Fft`] owns a table sized to a fixed block length and serves forward,
//! inverse and real-signal transforms from it. The free functions in
//! [`float::oneshot`] build a table per call for ad-hoc use.

#[macro_use]
extern crate alloc;

// Enables the standard library for tests and for native trigonometry.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{Direction, FftConfig, FftError, FftProcess, OverflowPolicy};
pub use float::{
    ButterflyStrategy, Fft, Radix2Dit, Sample, TableLayout, TwiddleTable, bit_reverse_permute,
    bit_reversed_index, transform_len,
};
pub use float::oneshot::{
    fft, fft_with, half_spectrum, half_spectrum_with, ifft, ifft_with, irfft, irfft_with, rfft,
    rfft_with,
};
pub use num_complex::{Complex, Complex32, Complex64};
