//! Length validation and buffer helpers shared by every kernel

use std::fmt;

use num_complex::Complex;
use num_traits::Float;

use crate::error::{FftError, FftResult};

/// Branching factor of a Cooley-Tukey decomposition
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Radix {
    Two,
    Four,
}

impl Radix {
    /// The radix as a number
    pub const fn value(self) -> usize {
        match self {
            Radix::Two => 2,
            Radix::Four => 4,
        }
    }

    /// Number of bits a single base-`radix` digit occupies
    pub const fn digit_bits(self) -> u32 {
        match self {
            Radix::Two => 1,
            Radix::Four => 2,
        }
    }

    /// Returns `true` if `len` is a positive power of this radix (`1` included)
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            Radix::Two => is_power_of_two(len),
            Radix::Four => is_power_of_four(len),
        }
    }

    /// Fails with [`FftError::InvalidLength`] unless `len` is a positive power of this radix
    pub fn validate(self, len: usize) -> FftResult<()> {
        if self.accepts(len) {
            Ok(())
        } else {
            Err(FftError::InvalidLength {
                radix: self.value(),
                len,
            })
        }
    }

    /// `log_radix(len)` for a length this radix accepts
    pub fn num_digits(self, len: usize) -> u32 {
        debug_assert!(self.accepts(len));
        len.trailing_zeros() / self.digit_bits()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "radix-{}", self.value())
    }
}

/// `n > 0 && n & (n - 1) == 0`
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// A power of two whose exponent is even
pub const fn is_power_of_four(n: usize) -> bool {
    is_power_of_two(n) && n.trailing_zeros() % 2 == 0
}

/// Converts an index or length into the scalar type of a transform
#[inline]
pub(crate) fn to_float<T: Float>(n: usize) -> T {
    T::from(n).expect("every usize is representable as a float")
}

/// Promote real samples to complex ones with a zero imaginary part
pub fn promote_real<T: Float>(reals: &[T]) -> Vec<Complex<T>> {
    reals.iter().map(|&re| Complex::new(re, T::zero())).collect()
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two() {
        assert!(!is_power_of_two(0));
        for k in 0..20 {
            assert!(is_power_of_two(1 << k));
        }
        for n in [3, 6, 12, 1000, 1023] {
            assert!(!is_power_of_two(n));
        }
    }

    #[test]
    fn powers_of_four() {
        assert!(!is_power_of_four(0));
        for k in 0..10 {
            assert!(is_power_of_four(1 << (2 * k)));
            assert!(!is_power_of_four(1 << (2 * k + 1)));
        }
        assert!(!is_power_of_four(12));
    }

    #[test]
    fn validate_reports_radix_and_length() {
        assert_eq!(Radix::Two.validate(1024), Ok(()));
        assert_eq!(
            Radix::Two.validate(6),
            Err(FftError::InvalidLength { radix: 2, len: 6 })
        );
        assert_eq!(
            Radix::Four.validate(8),
            Err(FftError::InvalidLength { radix: 4, len: 8 })
        );
        assert_eq!(
            Radix::Four.validate(0),
            Err(FftError::InvalidLength { radix: 4, len: 0 })
        );
    }

    #[test]
    fn digit_counts() {
        assert_eq!(Radix::Two.num_digits(1), 0);
        assert_eq!(Radix::Two.num_digits(1024), 10);
        assert_eq!(Radix::Four.num_digits(1024), 5);
        assert_eq!(Radix::Four.num_digits(16), 2);
    }

    #[test]
    fn promote_and_combine() {
        let promoted = promote_real(&[1.0, 2.0, 3.0]);
        assert_eq!(
            promoted,
            vec![
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(3.0, 0.0)
            ]
        );

        let combined = combine_re_im(&[1.0, 3.0], &[2.0, 4.0]);
        assert_eq!(combined, vec![Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)]);
    }
}
