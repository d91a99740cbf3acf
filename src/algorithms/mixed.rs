//! Mixed Radix (4, then 2) FFT
//!
//! Accepts any power of 2 while doing most of the work in radix-4 passes.
//!
//! The iterative form reorders by the radix-2 bit reversal. After that permutation the four
//! quarters of every radix-4 block hold the transforms of residues 0, 2, 1, 3 rather than
//! 0, 1, 2, 3, so the radix-4 stages read their middle two quarters swapped
//! ([`QuarterOrder::BitReversed`](crate::kernels::QuarterOrder::BitReversed)). When `log2(N)` is
//! odd the radix-4 stages end at block size `N / 2` and a final radix-2 stage of size `N` merges
//! the two halves.
use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

use crate::algorithms::radix4::{combine_quarters, split_by_residue};
use crate::error::FftResult;
use crate::kernels::butterfly2;
use crate::planner::{Plan, Strategy};
use crate::twiddles::twiddles;
use crate::utils::Radix;

/// Iterative mixed-radix FFT on a copy of `input`.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) unless the length is a
/// power of 2.
pub fn fft_mixed_radix_iterative<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> FftResult<Vec<Complex<T>>> {
    let mut output = input.to_vec();
    fft_mixed_radix_iterative_in_place(&mut output)?;
    Ok(output)
}

/// Iterative mixed-radix FFT that overwrites `buf` with its transform.
///
/// The length is validated before `buf` is touched: on error `buf` still holds its input.
pub fn fft_mixed_radix_iterative_in_place<T: Float + FloatConst>(
    buf: &mut [Complex<T>],
) -> FftResult<()> {
    let plan = Plan::new(buf.len(), Strategy::MixedRadix)?;
    plan.execute(buf)
}

/// Recursive mixed-radix FFT: splits four ways while the length is divisible by 4, and two ways
/// otherwise. Any power of 2.
pub fn fft_mixed_radix_recursive<T: Float + FloatConst>(
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

    if big_n % 4 == 0 {
        let [x0, x1, x2, x3] = split_by_residue(x).map(|sub| recurse(&sub));
        return combine_quarters(&x0, &x1, &x2, &x3);
    }

    // big_n == 2
    let tw = twiddles::<T>(big_n, Radix::Two);
    let mut output = vec![Complex::zero(); big_n];
    (output[0], output[1]) = butterfly2(x[0], x[1], tw.w[0]);
    output
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, random_signal, rustfft_forward};

    use super::*;
    use crate::error::FftError;

    #[test]
    fn fft() {
        for k in 0..14 {
            let n = 1 << k;
            let input = random_signal(n);
            let expected = rustfft_forward(&input);

            let iterative = fft_mixed_radix_iterative(&input).unwrap();
            assert_complex_closeness(&iterative, &expected, 1e-9);

            let recursive = fft_mixed_radix_recursive(&input).unwrap();
            assert_complex_closeness(&recursive, &expected, 1e-9);
        }
    }

    #[test]
    fn four_points() {
        let input: Vec<Complex64> = (1..=4).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let expected = [
            Complex64::new(10.0, 0.0),
            Complex64::new(-2.0, 2.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(-2.0, -2.0),
        ];
        assert_complex_closeness(&fft_mixed_radix_iterative(&input).unwrap(), &expected, 1e-12);
        assert_complex_closeness(&fft_mixed_radix_recursive(&input).unwrap(), &expected, 1e-12);
    }

    /// 2^10 and 2^9 take the closing radix-2 stage at opposite parities of log2(N)
    #[test]
    fn trailing_radix2_stage() {
        for len in [2, 8, 32, 512, 2048] {
            let input = random_signal(len);
            let output = fft_mixed_radix_iterative(&input).unwrap();
            assert_complex_closeness(&output, &rustfft_forward(&input), 1e-9);
        }
    }

    #[test]
    fn invalid_length() {
        let input = random_signal(24);
        let err = FftError::InvalidLength { radix: 2, len: 24 };
        assert_eq!(fft_mixed_radix_iterative(&input), Err(err));
        assert_eq!(fft_mixed_radix_recursive(&input), Err(err));
    }
}
