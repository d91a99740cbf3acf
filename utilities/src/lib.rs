pub extern crate rustfft;

// export rustfft as the reference transform for radixfft tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::{Complex, Complex64};
use rustfft::num_traits::Float;
use rustfft::FftPlanner;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex sequences agree elementwise, on both components.
///
/// # Panics
///
/// Panics if the lengths differ or if any component is too far from its expected value
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "sequence lengths differ");
    for (z, e) in actual.iter().zip(expected.iter()) {
        assert_float_closeness(z.re, e.re, epsilon);
        assert_float_closeness(z.im, e.im, epsilon);
    }
}

/// Fill `signal` with random complex values, both components uniform in `[-1, 1)`
pub fn gen_random_signal<T>(signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }
}

/// Allocate a random complex signal of length `len`
pub fn random_signal(len: usize) -> Vec<Complex64> {
    let mut signal = vec![Complex64::new(0.0, 0.0); len];
    gen_random_signal(&mut signal);
    signal
}

/// Forward transform computed by RustFFT, used as the trusted reference
pub fn rustfft_forward(input: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 16;
        let signal = random_signal(big_n);

        assert!(signal
            .iter()
            .all(|z| (-1.0..1.0).contains(&z.re) && (-1.0..1.0).contains(&z.im)));

        // mean of a uniform distribution on [-1, 1) is 0
        let mean_re = signal.iter().map(|z| z.re).sum::<f64>() / big_n as f64;
        assert_float_closeness(mean_re, 0.0, 0.05);
    }

    #[test]
    fn reference_impulse() {
        let mut input = vec![Complex64::new(0.0, 0.0); 8];
        input[0] = Complex64::new(1.0, 0.0);
        let output = rustfft_forward(&input);
        assert_complex_closeness(&output, &[Complex64::new(1.0, 0.0); 8], 1e-12);
    }
}
