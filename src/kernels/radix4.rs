//! Radix-4 Butterfly Kernels
//!
//! Decimation-in-time butterflies combining four quarter-size transforms at once. Algebraically
//! this is two cascaded radix-2 stages, computed directly so a transform of length `4^s` only
//! needs `s` passes.
//!
use num_complex::Complex;
use num_traits::Float;

/// Which sub-transform each quarter of a block holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum QuarterOrder {
    /// Quarters hold the sub-transforms of residues 0, 1, 2, 3 (mod 4).
    /// This is what a digit-reversal permutation produces.
    #[default]
    Natural,
    /// Quarters hold the sub-transforms of residues 0, 2, 1, 3 (mod 4).
    /// This is what a bit-reversal permutation produces.
    BitReversed,
}

/// Multiply by `-i`: `(a + bi) * (-i) = b - ai`
#[inline(always)]
fn mul_neg_i<T: Float>(z: Complex<T>) -> Complex<T> {
    Complex::new(z.im, -z.re)
}

/// Single radix-4 butterfly.
///
/// ```text
/// T0 = x0 +   w·x1 + w²·x2 +   w³·x3
/// T1 = x0 - i·w·x1 - w²·x2 + i·w³·x3
/// T2 = x0 -   w·x1 + w²·x2 -   w³·x3
/// T3 = x0 + i·w·x1 - w²·x2 - i·w³·x3
/// ```
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn butterfly4<T: Float>(
    x0: Complex<T>,
    x1: Complex<T>,
    x2: Complex<T>,
    x3: Complex<T>,
    w1: Complex<T>,
    w2: Complex<T>,
    w3: Complex<T>,
) -> [Complex<T>; 4] {
    let a = w1 * x1;
    let b = w2 * x2;
    let c = w3 * x3;

    let even_sum = x0 + b;
    let even_diff = x0 - b;
    let odd_sum = a + c;
    let odd_diff = mul_neg_i(a - c);

    [
        even_sum + odd_sum,
        even_diff + odd_diff,
        even_sum - odd_sum,
        even_diff - odd_diff,
    ]
}

/// One radix-4 stage over every block of size `4 * w1.len()`.
///
/// `w1[k]`, `w2[k]`, `w3[k]` are `W_M^k`, `W_M^{2k}`, `W_M^{3k}` for the stage's block size `M`.
/// Outputs are always written in natural order; `order` only describes where the inputs are.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn fft_chunk_n_radix4<T: Float>(
    buf: &mut [Complex<T>],
    w1: &[Complex<T>],
    w2: &[Complex<T>],
    w3: &[Complex<T>],
    order: QuarterOrder,
) {
    let dist = w1.len();
    let chunk_size = dist << 2;

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s01, s23) = chunk.split_at_mut(dist << 1);
        let (s0, s1) = s01.split_at_mut(dist);
        let (s2, s3) = s23.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(s2.iter_mut())
            .zip(s3.iter_mut())
            .zip(w1.iter().zip(w2.iter()).zip(w3.iter()))
            .for_each(|((((z0, z1), z2), z3), ((w1, w2), w3))| {
                let (in1, in2) = match order {
                    QuarterOrder::Natural => (*z1, *z2),
                    QuarterOrder::BitReversed => (*z2, *z1),
                };

                let [t0, t1, t2, t3] = butterfly4(*z0, in1, in2, *z3, *w1, *w2, *w3);
                *z0 = t0;
                *z1 = t1;
                *z2 = t2;
                *z3 = t3;
            });
    });
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::assert_complex_closeness;

    use super::*;
    use crate::kernels::radix2::{fft_chunk_2, fft_chunk_n};
    use crate::twiddles::twiddles;
    use crate::utils::Radix;

    #[test]
    fn four_point_dft() {
        let one = Complex64::new(1.0, 0.0);
        let out = butterfly4(
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
            Complex64::new(4.0, 0.0),
            one,
            one,
            one,
        );
        assert_eq!(
            out,
            [
                Complex64::new(10.0, 0.0),
                Complex64::new(-2.0, 2.0),
                Complex64::new(-2.0, 0.0),
                Complex64::new(-2.0, -2.0),
            ]
        );
    }

    /// A radix-4 stage over bit-reversed quarters equals two radix-2 stages
    #[test]
    fn bit_reversed_quarters_match_two_radix2_stages() {
        let input: Vec<Complex64> = (0..64)
            .map(|i| Complex64::new((i as f64).sin(), (i as f64 * 0.5).cos()))
            .collect();

        // 16-point blocks built from four 4-point sub-transforms already in place
        let mut radix2 = input.clone();
        let tw8 = twiddles::<f64>(8, Radix::Two);
        let tw16 = twiddles::<f64>(16, Radix::Two);
        fft_chunk_n(&mut radix2, &tw8.w);
        fft_chunk_n(&mut radix2, &tw16.w);

        let mut radix4 = input;
        let tw = twiddles::<f64>(16, Radix::Four);
        fft_chunk_n_radix4(&mut radix4, &tw.w, &tw.w2, &tw.w3, QuarterOrder::BitReversed);

        assert_complex_closeness(&radix4, &radix2, 1e-12);
    }

    #[test]
    fn first_stage_has_unit_twiddles() {
        let input: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 1.0)).collect();

        let mut radix2 = input.clone();
        fft_chunk_2(&mut radix2);
        let tw4 = twiddles::<f64>(4, Radix::Two);
        fft_chunk_n(&mut radix2, &tw4.w);

        let mut radix4 = input;
        let tw = twiddles::<f64>(4, Radix::Four);
        fft_chunk_n_radix4(&mut radix4, &tw.w, &tw.w2, &tw.w3, QuarterOrder::BitReversed);

        assert_complex_closeness(&radix4, &radix2, 1e-12);
    }
}
