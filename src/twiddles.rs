//! Twiddle factors, the complex roots of unity each butterfly stage rotates by.
//!
//! Every factor is evaluated from its own angle. Generating them by repeated multiplication with
//! a single base root accumulates rounding error along long stages, so that is avoided here.

use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::utils::{to_float, Radix};

/// `W_m^k = e^{-2πik/m}`
#[inline]
pub fn twiddle<T: Float + FloatConst>(k: usize, m: usize) -> Complex<T> {
    let angle = -T::TAU() * to_float::<T>(k) / to_float::<T>(m);
    let (sin, cos) = angle.sin_cos();
    Complex::new(cos, sin)
}

/// Twiddle factors for one stage of block size `m`.
///
/// `w[k] = W_m^k` for `k` in `[0, m / radix)`. For radix 4, `w2` and `w3` hold `W_m^{2k}` and
/// `W_m^{3k}`; they are empty for radix 2.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTwiddles<T> {
    /// The block size of the stage
    pub m: usize,
    /// The butterfly radix the stage combines with
    pub radix: Radix,
    pub w: Vec<Complex<T>>,
    pub w2: Vec<Complex<T>>,
    pub w3: Vec<Complex<T>>,
}

impl<T> StageTwiddles<T> {
    /// Number of butterflies within one block, `m / radix`
    pub fn len(&self) -> usize {
        self.w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }
}

/// Compute the twiddle set for a stage of block size `m` and the given radix.
///
/// Pure function of `(m, radix)`.
///
/// # Panics
///
/// Panics if `m` is not a multiple of the radix
pub fn twiddles<T: Float + FloatConst>(m: usize, radix: Radix) -> StageTwiddles<T> {
    assert!(
        m >= radix.value() && m % radix.value() == 0,
        "block size {m} is not a multiple of {radix}"
    );
    let dist = m / radix.value();

    let w = (0..dist).map(|k| twiddle(k, m)).collect();
    let (w2, w3) = match radix {
        Radix::Two => (Vec::new(), Vec::new()),
        Radix::Four => (
            (0..dist).map(|k| twiddle(2 * k, m)).collect(),
            (0..dist).map(|k| twiddle(3 * k, m)).collect(),
        ),
    };

    StageTwiddles { m, radix, w, w2, w3 }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn twiddles_8() {
        let tw = twiddles::<f64>(8, Radix::Two);
        assert_eq!(tw.len(), 4);
        let expected = [
            (1.0, 0.0),
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (0.0, -1.0),
            (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        ];

        for (w, (re, im)) in tw.w.iter().zip(expected) {
            assert_float_closeness(w.re, re, 1e-15);
            assert_float_closeness(w.im, im, 1e-15);
        }
        assert!(tw.w2.is_empty() && tw.w3.is_empty());
    }

    #[test]
    fn radix4_powers_match_direct_products() {
        for m in [4, 16, 64, 256, 1024] {
            let tw = twiddles::<f64>(m, Radix::Four);
            assert_eq!(tw.len(), m / 4);
            for k in 0..tw.len() {
                let sq = tw.w[k] * tw.w[k];
                let cube = sq * tw.w[k];
                assert_float_closeness(tw.w2[k].re, sq.re, 1e-12);
                assert_float_closeness(tw.w2[k].im, sq.im, 1e-12);
                assert_float_closeness(tw.w3[k].re, cube.re, 1e-12);
                assert_float_closeness(tw.w3[k].im, cube.im, 1e-12);
            }
        }
    }

    #[test]
    fn roots_lie_on_unit_circle() {
        let tw = twiddles::<f64>(1 << 16, Radix::Two);
        for w in tw.w {
            assert_float_closeness(w.norm(), 1.0, 1e-14);
        }
    }

    #[test]
    fn single_precision() {
        let w = twiddle::<f32>(1, 4);
        assert_float_closeness(w.re, 0.0, 1e-6);
        assert_float_closeness(w.im, -1.0, 1e-6);
    }

    #[test]
    #[should_panic]
    fn block_size_not_a_multiple_of_radix() {
        let _ = twiddles::<f64>(2, Radix::Four);
    }
}
