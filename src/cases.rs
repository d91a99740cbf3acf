//! Input families for the benchmarking driver
//!
//! Random inputs are drawn uniformly from `[0, 1)` from a seeded generator, so a run can be
//! reproduced by reusing its seed.
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `len` complex samples, both components uniform in `[0, 1)`
pub fn random_complex<R: Rng>(rng: &mut R, len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|_| Complex64::new(rng.gen(), rng.gen()))
        .collect()
}

/// `len` real samples uniform in `[0, 1)`, stored with a zero imaginary part
pub fn random_real<R: Rng>(rng: &mut R, len: usize) -> Vec<Complex64> {
    (0..len).map(|_| Complex64::new(rng.gen(), 0.0)).collect()
}

/// Four hand-checkable inputs: `[1]`, `[1, 2, 3, 4]`, `[0, 1, 0, -1]` and `[1+1i, …, 4+4i]`
pub fn simple_cases() -> Vec<Vec<Complex64>> {
    let real = |values: &[f64]| -> Vec<Complex64> {
        values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
    };

    vec![
        real(&[1.0]),
        real(&[1.0, 2.0, 3.0, 4.0]),
        real(&[0.0, 1.0, 0.0, -1.0]),
        (1..=4)
            .map(|i| Complex64::new(i as f64, i as f64))
            .collect(),
    ]
}

/// Real inputs of length `2^0` to `2^9`
pub fn real_cases(seed: u64) -> Vec<Vec<Complex64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..10).map(|k| random_real(&mut rng, 1 << k)).collect()
}

/// Complex inputs of length `2^0` to `2^9`
pub fn complex_cases(seed: u64) -> Vec<Vec<Complex64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..10).map(|k| random_complex(&mut rng, 1 << k)).collect()
}

/// [`real_cases`] followed by [`complex_cases`]
pub fn combined_cases(seed: u64) -> Vec<Vec<Complex64>> {
    let mut cases = real_cases(seed);
    cases.extend(complex_cases(seed.wrapping_add(1)));
    cases
}

/// Complex inputs of length `4^1` to `4^9`
pub fn power_of_four_cases(seed: u64) -> Vec<Vec<Complex64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..10).map(|k| random_complex(&mut rng, 1 << (2 * k))).collect()
}

/// Complex inputs of length `2^1` to `2^max_log2`
pub fn speed_cases(seed: u64, max_log2: u32) -> Vec<Vec<Complex64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=max_log2)
        .map(|k| random_complex(&mut rng, 1 << k))
        .collect()
}
