//! FFT Butterfly Kernels
//!
//! This module contains the butterfly stage executors. A stage combines every block of `M`
//! contiguous elements of the working buffer, using the same twiddle set for each block. The
//! kernels are compiled for several CPU feature levels and selected at runtime.
//!
//! ## Organization
//!
//! - `radix2`: two-way butterflies, one stage doubles the transform size
//! - `radix4`: four-way butterflies, one stage quadruples the transform size

pub mod radix2;
pub mod radix4;

use num_complex::Complex;
use num_traits::Float;

pub use radix2::{butterfly2, fft_chunk_2, fft_chunk_n};
pub use radix4::{butterfly4, fft_chunk_n_radix4, QuarterOrder};

use crate::twiddles::StageTwiddles;
use crate::utils::Radix;

/// Apply one butterfly stage in place, dispatching on the radix of `twiddles`.
///
/// `buf.len()` must be a multiple of `twiddles.m`; any trailing partial block is left untouched.
/// Every block of the stage is finished when this returns.
pub fn apply_stage<T: Float>(
    buf: &mut [Complex<T>],
    twiddles: &StageTwiddles<T>,
    order: QuarterOrder,
) {
    debug_assert_eq!(buf.len() % twiddles.m, 0);

    match twiddles.radix {
        Radix::Two if twiddles.m == 2 => fft_chunk_2(buf),
        Radix::Two => fft_chunk_n(buf, &twiddles.w),
        Radix::Four => fft_chunk_n_radix4(buf, &twiddles.w, &twiddles.w2, &twiddles.w3, order),
    }
}
