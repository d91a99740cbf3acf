//! Radix-4 Cooley-Tukey FFT
//!
//! The input is split four ways by residue mod 4 and the four quarter-size transforms are merged
//! with radix-4 butterflies, halving the number of passes a radix-2 transform would need. The
//! iterative form reorders the input by reversing its base-4 digits, then runs stages of block
//! size `4, 16, 64, …, N`.
//!
//! Both require the length to be a power of 4.
use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

use crate::error::FftResult;
use crate::kernels::butterfly4;
use crate::planner::{Plan, Strategy};
use crate::twiddles::{twiddles, StageTwiddles};
use crate::utils::Radix;

/// Recursive radix-4 FFT. Works on private copies at every level; the input is untouched.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) unless the length is a
/// power of 4, before any sub-transform is computed.
pub fn fft_radix4_recursive<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> FftResult<Vec<Complex<T>>> {
    Radix::Four.validate(input.len())?;
    Ok(recurse(input))
}

fn recurse<T: Float + FloatConst>(x: &[Complex<T>]) -> Vec<Complex<T>> {
    if x.len() == 1 {
        return x.to_vec();
    }

    let [x0, x1, x2, x3] = split_by_residue(x).map(|sub| recurse(&sub));
    combine_quarters(&x0, &x1, &x2, &x3)
}

/// Split `x` into its four stride-4 subsequences, `x[r], x[r + 4], x[r + 8], …`
pub(crate) fn split_by_residue<T: Copy>(x: &[Complex<T>]) -> [Vec<Complex<T>>; 4] {
    let quarter = x.len() >> 2;
    let mut subs: [Vec<Complex<T>>; 4] = std::array::from_fn(|_| Vec::with_capacity(quarter));
    for chunk in x.chunks_exact(4) {
        for (sub, z) in subs.iter_mut().zip(chunk) {
            sub.push(*z);
        }
    }
    subs
}

/// Merge the transforms of the four residue classes into the transform of their union
pub(crate) fn combine_quarters<T: Float + FloatConst>(
    x0: &[Complex<T>],
    x1: &[Complex<T>],
    x2: &[Complex<T>],
    x3: &[Complex<T>],
) -> Vec<Complex<T>> {
    let quarter = x0.len();
    let big_n = quarter << 2;
    let StageTwiddles { w, w2, w3, .. } = twiddles::<T>(big_n, Radix::Four);

    let mut output = vec![Complex::zero(); big_n];
    for k in 0..quarter {
        let outs = butterfly4(x0[k], x1[k], x2[k], x3[k], w[k], w2[k], w3[k]);
        for (q, out) in outs.into_iter().enumerate() {
            output[q * quarter + k] = out;
        }
    }
    output
}

/// Iterative radix-4 FFT on a copy of `input`.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) unless the length is a
/// power of 4.
pub fn fft_radix4_iterative<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> FftResult<Vec<Complex<T>>> {
    let mut output = input.to_vec();
    fft_radix4_iterative_in_place(&mut output)?;
    Ok(output)
}

/// Iterative radix-4 FFT that overwrites `buf` with its transform.
///
/// The length is validated before `buf` is touched: on error `buf` still holds its input.
pub fn fft_radix4_iterative_in_place<T: Float + FloatConst>(
    buf: &mut [Complex<T>],
) -> FftResult<()> {
    let plan = Plan::new(buf.len(), Strategy::Radix4)?;
    plan.execute(buf)
}
