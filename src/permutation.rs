//! Bit-reversal and digit-reversal permutations.
//!
//! The iterative kernels reorder their input so that every butterfly stage finds the outputs of
//! the previous stage in contiguous blocks, exactly the grouping the recursive decomposition
//! produces. For radix-2 this is the bit-reversal of each index in `log2(N)` bits; for radix-4 it
//! is the reversal of the base-4 digits of each index in `log4(N)` digits.
//!
//! Both permutations are involutions (`σ(σ(i)) == i`): a base-4 digit of a power-of-4 length
//! occupies exactly two bits, so reversing the digit order twice is the identity. This lets them be
//! applied in place by swapping each pair once.
//!
//! Besides the index tables there are two in-place algorithms for bit reversal that do not need
//! the table at all, see [`bit_rev_gray`] and [`bit_rev_naive`].

use crate::error::FftResult;
use crate::utils::Radix;

/// Signature shared by the in-place bit-reversal algorithms
pub type BitRevFunc<T> = fn(&mut [T], usize);

/// Reverse the lowest `num_digits` digits of `index`, each `digit_bits` wide
#[inline]
fn reverse_digits(mut index: usize, num_digits: u32, digit_bits: u32) -> usize {
    let mask = (1 << digit_bits) - 1;
    let mut reversed = 0;
    for _ in 0..num_digits {
        reversed = (reversed << digit_bits) | (index & mask);
        index >>= digit_bits;
    }
    reversed
}

fn digit_reversal_table(len: usize, radix: Radix) -> FftResult<Vec<usize>> {
    radix.validate(len)?;
    let num_digits = radix.num_digits(len);
    let digit_bits = radix.digit_bits();

    Ok((0..len)
        .map(|i| reverse_digits(i, num_digits, digit_bits))
        .collect())
}

/// `σ(i)` is the bit-reversal of `i` in `log2(len)` bits.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) if `len` is not a
/// positive power of 2.
pub fn bit_reverse_permutation(len: usize) -> FftResult<Vec<usize>> {
    digit_reversal_table(len, Radix::Two)
}

/// `σ(i)` is the reversal of the base-4 digits of `i` in `log4(len)` digits.
///
/// Fails with [`FftError::InvalidLength`](crate::FftError::InvalidLength) if `len` is not a
/// positive power of 4.
pub fn digit_reverse_permutation(len: usize) -> FftResult<Vec<usize>> {
    digit_reversal_table(len, Radix::Four)
}

/// Out-of-place reorder: `output[i] = input[permutation[i]]`
///
/// # Panics
///
/// Panics if `permutation` indexes outside of `input`
pub fn apply_permutation<T: Copy>(input: &[T], permutation: &[usize]) -> Vec<T> {
    permutation.iter().map(|&j| input[j]).collect()
}

/// In-place reorder by an involutive permutation (every bit/digit reversal is one).
///
/// Each pair is swapped once, when `i < σ(i)`.
pub fn permute_in_place<T>(buf: &mut [T], permutation: &[usize]) {
    debug_assert_eq!(buf.len(), permutation.len());
    for (i, &j) in permutation.iter().enumerate() {
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// ## References
/// [1] <https://www.katjaas.nl/bitreversal/bitreversal.html>
pub fn bit_rev_gray<T>(buf: &mut [T], log_n: usize) {
    let mut nodd: usize;
    let mut noddrev; // to hold bitwise negated or odd values

    let big_n = 1 << log_n;
    let halfn = big_n >> 1; // frequently used 'constants'
    let quartn = big_n >> 2;
    let nmin1 = big_n - 1;

    let mut forward = halfn; // variable initialisations
    let mut rev = 1;

    let mut i: usize = quartn;
    while i > 0 {
        // start of bit reversed permutation loop, N/4 iterations
        // Gray code generator for even values:

        let zeros = i.trailing_zeros();
        forward ^= 2 << zeros; // toggle one bit of forward
        rev ^= quartn >> zeros; // toggle one bit of rev

        // swap even and ~even conditionally
        if forward < rev {
            buf.swap(forward, rev);
            nodd = nmin1 ^ forward; // compute the bitwise negations
            noddrev = nmin1 ^ rev;
            buf.swap(nodd, noddrev); // swap bitwise-negated pairs
        }

        nodd = forward ^ 1; // compute the odd values from the even
        noddrev = rev ^ halfn;

        // swap odd unconditionally
        buf.swap(nodd, noddrev);
        i -= 1;
    }
}

/// Slow, naive implementation of bit reversal
pub fn bit_rev_naive<T>(buf: &mut [T], _log_n: usize) {
    let n = buf.len();
    let mut j = 0;

    for i in 1..n {
        let mut bit = n >> 1;

        while (j & bit) != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            buf.swap(i, j);
        }
    }
}

/// Bit reversal driven by a freshly built index table
pub fn bit_rev_table<T>(buf: &mut [T], log_n: usize) {
    let num_digits = log_n as u32;
    for i in 0..buf.len() {
        let j = reverse_digits(i, num_digits, 1);
        if i < j {
            buf.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FftError;

    /// Top down bit reverse interleaving. This is a very simple and well known approach that we
    /// only use for testing the bit reverse algorithms.
    fn top_down_bit_reverse_permutation<T: Copy + Clone>(x: &[T]) -> Vec<T> {
        if x.len() == 1 {
            return x.to_vec();
        }

        let mut y = Vec::with_capacity(x.len());
        let mut evens = Vec::with_capacity(x.len() >> 1);
        let mut odds = Vec::with_capacity(x.len() >> 1);

        let mut i = 1;
        while i < x.len() {
            evens.push(x[i - 1]);
            odds.push(x[i]);
            i += 2;
        }

        y.extend_from_slice(&top_down_bit_reverse_permutation(&evens));
        y.extend_from_slice(&top_down_bit_reverse_permutation(&odds));
        y
    }

    /// Same as above, but splitting four ways by residue mod 4
    fn top_down_digit_reverse_permutation<T: Copy + Clone>(x: &[T]) -> Vec<T> {
        if x.len() == 1 {
            return x.to_vec();
        }

        let mut y = Vec::with_capacity(x.len());
        for r in 0..4 {
            let sub: Vec<T> = x.iter().skip(r).step_by(4).copied().collect();
            y.extend_from_slice(&top_down_digit_reverse_permutation(&sub));
        }
        y
    }

    #[test]
    fn bit_reverse_small() {
        assert_eq!(bit_reverse_permutation(1).unwrap(), vec![0]);
        assert_eq!(bit_reverse_permutation(2).unwrap(), vec![0, 1]);
        assert_eq!(
            bit_reverse_permutation(8).unwrap(),
            vec![0, 4, 2, 6, 1, 5, 3, 7]
        );
    }

    #[test]
    fn digit_reverse_small() {
        assert_eq!(digit_reverse_permutation(1).unwrap(), vec![0]);
        assert_eq!(digit_reverse_permutation(4).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(
            digit_reverse_permutation(16).unwrap(),
            vec![0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]
        );
    }

    #[test]
    fn invalid_lengths() {
        assert_eq!(
            bit_reverse_permutation(12),
            Err(FftError::InvalidLength { radix: 2, len: 12 })
        );
        assert_eq!(
            bit_reverse_permutation(0),
            Err(FftError::InvalidLength { radix: 2, len: 0 })
        );
        assert_eq!(
            digit_reverse_permutation(32),
            Err(FftError::InvalidLength { radix: 4, len: 32 })
        );
    }

    #[test]
    fn bit_reversal_is_an_involution() {
        for n in 0..16 {
            let big_n = 1 << n;
            let sigma = bit_reverse_permutation(big_n).unwrap();
            assert!((0..big_n).all(|i| sigma[sigma[i]] == i));
        }
    }

    #[test]
    fn digit_reversal_is_an_involution() {
        for n in 0..8 {
            let big_n = 1 << (2 * n);
            let sigma = digit_reverse_permutation(big_n).unwrap();
            assert!((0..big_n).all(|i| sigma[sigma[i]] == i));
        }
    }

    #[test]
    fn tables_match_top_down_splits() {
        for n in 0..12 {
            let big_n = 1 << n;
            let x: Vec<usize> = (0..big_n).collect();
            let sigma = bit_reverse_permutation(big_n).unwrap();
            assert_eq!(
                apply_permutation(&x, &sigma),
                top_down_bit_reverse_permutation(&x)
            );
        }

        for n in 0..6 {
            let big_n = 1 << (2 * n);
            let x: Vec<usize> = (0..big_n).collect();
            let sigma = digit_reverse_permutation(big_n).unwrap();
            assert_eq!(
                apply_permutation(&x, &sigma),
                top_down_digit_reverse_permutation(&x)
            );
        }
    }

    #[test]
    fn in_place_matches_out_of_place() {
        let big_n = 256;
        let x: Vec<usize> = (0..big_n).collect();
        for sigma in [
            bit_reverse_permutation(big_n).unwrap(),
            digit_reverse_permutation(big_n).unwrap(),
        ] {
            let mut buf = x.clone();
            permute_in_place(&mut buf, &sigma);
            assert_eq!(buf, apply_permutation(&x, &sigma));
        }
    }

    #[test]
    fn test_gray_bit_reversal() {
        let n = 3;
        let big_n = 1 << n;
        let mut buf: Vec<f64> = (0..big_n).map(f64::from).collect();
        bit_rev_gray(&mut buf, n);
        assert_eq!(buf, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);

        let n = 4;
        let big_n = 1 << n;
        let mut buf: Vec<f64> = (0..big_n).map(f64::from).collect();
        bit_rev_gray(&mut buf, n);
        assert_eq!(
            buf,
            vec![
                0.0, 8.0, 4.0, 12.0, 2.0, 10.0, 6.0, 14.0, 1.0, 9.0, 5.0, 13.0, 3.0, 11.0, 7.0,
                15.0,
            ]
        );
    }

    #[test]
    fn in_place_algorithms_agree() {
        let algorithms: [BitRevFunc<usize>; 3] = [bit_rev_gray, bit_rev_naive, bit_rev_table];
        for n in 0..16 {
            let big_n = 1 << n;
            let expected = top_down_bit_reverse_permutation(&(0..big_n).collect::<Vec<_>>());
            for algorithm in algorithms {
                let mut v: Vec<usize> = (0..big_n).collect();
                algorithm(&mut v, n);
                assert_eq!(v, expected);
            }
        }
    }
}
