//! Radix-2 fast Fourier transforms over complex sequences.
//!
//! Two independent entry points compute the same DFT for any power-of-two
//! length `N >= 2`:
//!
//! - [`fft_recursive`]: divide-and-conquer decimation in time. Splits the
//!   input into even/odd halves, recurses, and recombines through the
//!   twiddle factors of each level.
//! - [`fft_iterative`]: bit-reversal permutation followed by `log2(N)`
//!   butterfly stages over a pair of working buffers.
//!
//! Both agree element-wise to floating tolerance, and both report contract
//! violations as [`FftError`] instead of computing a wrong result.
//!
//! [1] https://inst.eecs.berkeley.edu/~ee123/sp15/Notes/Lecture08_FFT_and_SpectAnalysis.key.pdf

pub use num_complex::{Complex, Complex32, Complex64};

pub use crate::complex::{checked_div, Diagnostic};
pub use crate::error::FftError;
pub use crate::iterative::fft_iterative;
pub use crate::recursive::fft_recursive;

mod bit_rev;
mod complex;
mod error;
mod iterative;
mod recursive;
mod twiddles;
