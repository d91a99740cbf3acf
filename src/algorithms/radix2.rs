//! Radix-2 Cooley-Tukey FFT
//!
//! Two renditions of the same decomposition:
//!
//! 1. [`fft_radix2_recursive`] splits the input into even and odd samples, transforms both
//!    halves, and merges them with one radix-2 butterfly per output pair.
//! 2. [`fft_radix2_iterative`] applies the bit-reversal permutation once, then runs the merges
//!    bottom-up, stage by stage, for block sizes `2, 4, 8, …, N`.
//!
//! Both require the length to be a power of 2.
use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

use crate::error::FftResult;
use crate::kernels::butterfly2;
use crate::planner::{Plan, Strategy};
use crate::twiddles::twiddles;
use crate::utils::{promote_real, Radix};

/// Recursive radix-2 FFT. Works on private copies at every level; the input is untouched.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) unless the length is a
/// power of 2.
pub fn fft_radix2_recursive<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> FftResult<Vec<Complex<T>>> {
    Radix::Two.validate(input.len())?;
    Ok(recurse(input))
}

fn recurse<T: Float + FloatConst>(x: &[Complex<T>]) -> Vec<Complex<T>> {
    let big_n = x.len();
    if big_n == 1 {
        return x.to_vec();
    }

    let (evens, odds): (Vec<_>, Vec<_>) = x.chunks_exact(2).map(|c| (c[0], c[1])).unzip();
    let evens = recurse(&evens);
    let odds = recurse(&odds);

    let half = big_n >> 1;
    let tw = twiddles::<T>(big_n, Radix::Two);
    let mut output = vec![Complex::zero(); big_n];
    let (first_half, second_half) = output.split_at_mut(half);

    first_half
        .iter_mut()
        .zip(second_half.iter_mut())
        .zip(evens.iter().zip(odds.iter()))
        .zip(tw.w.iter())
        .for_each(|(((out0, out1), (even, odd)), w)| {
            (*out0, *out1) = butterfly2(*even, *odd, *w);
        });

    output
}

/// Iterative radix-2 FFT on a copy of `input`.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) unless the length is a
/// power of 2.
pub fn fft_radix2_iterative<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> FftResult<Vec<Complex<T>>> {
    let mut output = input.to_vec();
    fft_radix2_iterative_in_place(&mut output)?;
    Ok(output)
}

/// Iterative radix-2 FFT that overwrites `buf` with its transform.
///
/// The length is validated before `buf` is touched: on error `buf` still holds its input.
pub fn fft_radix2_iterative_in_place<T: Float + FloatConst>(
    buf: &mut [Complex<T>],
) -> FftResult<()> {
    let plan = Plan::new(buf.len(), Strategy::Radix2)?;
    plan.execute(buf)
}

/// Iterative radix-2 FFT of real samples.
///
/// The samples are first promoted to a private complex buffer, which is then transformed in
/// place and returned.
pub fn fft_radix2_from_real<T: Float + FloatConst>(reals: &[T]) -> FftResult<Vec<Complex<T>>> {
    let mut buf = promote_real(reals);
    fft_radix2_iterative_in_place(&mut buf)?;
    Ok(buf)
}
