pub mod complex;
pub mod convolve;
pub mod oneshot;
pub mod real;
pub mod twiddle;
mod core;

pub use crate::common::{ Direction, FftError, FftProcess };
pub use self::core::{ ButterflyStrategy, Radix2Dit, Sample, bit_reverse_permute, bit_reversed_index };
pub use complex::{ Fft, transform_len };
pub use twiddle::{ TableLayout, TwiddleTable };
