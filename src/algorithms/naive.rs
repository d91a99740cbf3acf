//! Direct evaluation of the DFT definition
use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

use crate::error::FftResult;
use crate::twiddles::twiddle;

/// Naive DFT, `X[k] = Σ_n x[n]·e^{-2πikn/N}`. `O(N²)` complexity.
///
/// Accepts any length and never fails; an empty input gives an empty output. The `N` roots of
/// unity are evaluated once and indexed by `k·n mod N`.
pub fn naive_dft<T: Float + FloatConst>(input: &[Complex<T>]) -> FftResult<Vec<Complex<T>>> {
    let big_n = input.len();
    let roots: Vec<Complex<T>> = (0..big_n).map(|j| twiddle(j, big_n)).collect();

    let output = (0..big_n)
        .map(|k| {
            let mut idx = 0;
            input.iter().fold(Complex::zero(), |acc, x| {
                let w = roots[idx];
                idx += k;
                if idx >= big_n {
                    idx -= big_n;
                }
                acc + *x * w
            })
        })
        .collect();

    Ok(output)
}
