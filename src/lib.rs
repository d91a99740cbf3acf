//! Discrete Fourier transforms by several competing algorithms, and the tooling to compare them.
//!
//! | Kernel | Accepted lengths |
//! |---|---|
//! | [`naive_dft`] | any |
//! | [`fft_radix2_recursive`], [`fft_radix2_iterative`] | powers of 2 |
//! | [`fft_radix4_recursive`], [`fft_radix4_iterative`] | powers of 4 |
//! | [`fft_mixed_radix_iterative`], [`fft_mixed_radix_recursive`] | powers of 2 |
//!
//! Every kernel computes the forward transform `X[k] = Σ_n x[n]·e^{-2πikn/N}` (no scaling), is
//! generic over the scalar type (`f64` or `f32`) and rejects a length it cannot handle with
//! [`FftError::InvalidLength`] before doing any work.
//!
//! ```
//! use radixfft::{fft_mixed_radix_iterative, Complex64};
//!
//! let input: Vec<Complex64> = (1..=4).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let output = fft_mixed_radix_iterative(&input).unwrap();
//! assert!((output[0] - Complex64::new(10.0, 0.0)).norm() < 1e-12);
//! ```
//!
//! The [`registry`] and [`bencher`] modules measure the kernels against each other.

pub use num_complex::{Complex, Complex32, Complex64};

pub use crate::algorithms::mixed::{
    fft_mixed_radix_iterative, fft_mixed_radix_iterative_in_place, fft_mixed_radix_recursive,
};
pub use crate::algorithms::naive::naive_dft;
pub use crate::algorithms::radix2::{
    fft_radix2_from_real, fft_radix2_iterative, fft_radix2_iterative_in_place,
    fft_radix2_recursive,
};
pub use crate::algorithms::radix4::{
    fft_radix4_iterative, fft_radix4_iterative_in_place, fft_radix4_recursive,
};
pub use crate::error::{FftError, FftResult};
pub use crate::permutation::{bit_reverse_permutation, digit_reverse_permutation};
pub use crate::registry::{KernelRegistry, TransformFn};
pub use crate::twiddles::twiddles;

pub mod algorithms;
pub mod bencher;
pub mod cases;
mod error;
pub mod kernels;
pub mod options;
pub mod permutation;
pub mod planner;
pub mod registry;
pub mod twiddles;
pub mod utils;
