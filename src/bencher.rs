//! Accuracy and speed benchmarking of registered kernels, and selection of the fastest
//! implementation on the current hardware

use std::time::{Duration, Instant};

use num_complex::Complex64;

use crate::cases::random_complex;
use crate::error::FftError;
use crate::options::BitReverseAlgorithm;
use crate::permutation::{bit_rev_gray, bit_rev_naive, bit_rev_table, BitRevFunc};
use crate::registry::{KernelRegistry, TransformFn};

/// Knobs of the benchmarking driver
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Relative tolerance of the elementwise comparison against the reference
    pub rtol: f64,
    /// Absolute tolerance of the elementwise comparison against the reference
    pub atol: f64,
    /// Calls made on a throwaway input before any case is timed
    pub warmup_rounds: usize,
    pub warmup_len: usize,
    /// Timed calls per case; the reported time is their mean
    pub speed_rounds: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
            warmup_rounds: 10,
            warmup_len: 256,
            speed_rounds: 1,
        }
    }
}

/// Outcome of one kernel on one accuracy case
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    pub kernel: String,
    /// 1-based position of the case in its family
    pub case: usize,
    pub len: usize,
    pub mae: Option<f64>,
    pub mse: Option<f64>,
    /// Within tolerance of the reference
    pub passed: bool,
    /// Set when the kernel (or the reference) refused the input
    pub error: Option<FftError>,
}

/// Outcome of one kernel on one speed case
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedReport {
    pub kernel: String,
    pub case: usize,
    pub len: usize,
    pub elapsed: Option<Duration>,
    pub error: Option<FftError>,
}

impl SpeedReport {
    /// Time spent per output bin
    pub fn per_bin(&self) -> Option<Duration> {
        let elapsed = self.elapsed?;
        if self.len == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(
            elapsed.as_secs_f64() / self.len as f64,
        ))
    }
}

/// Elementwise `|a - e| <= atol + rtol * |e|`. Sequences of different lengths are never close.
pub fn allclose(actual: &[Complex64], expected: &[Complex64], rtol: f64, atol: f64) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(a, e)| (a - e).norm() <= atol + rtol * e.norm())
}

/// Mean of `|a - e|`, `0` for empty sequences
pub fn mean_absolute_error(actual: &[Complex64], expected: &[Complex64]) -> f64 {
    mean(actual, expected, |d| d)
}

/// Mean of `|a - e|²`, `0` for empty sequences
pub fn mean_squared_error(actual: &[Complex64], expected: &[Complex64]) -> f64 {
    mean(actual, expected, |d| d * d)
}

fn mean(actual: &[Complex64], expected: &[Complex64], f: impl Fn(f64) -> f64) -> f64 {
    let n = actual.len().min(expected.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = actual
        .iter()
        .zip(expected.iter())
        .map(|(a, e)| f((a - e).norm()))
        .sum();
    sum / n as f64
}

/// Compare `kernel` against `reference` on every case
pub fn measure_accuracy(
    name: &str,
    kernel: TransformFn,
    cases: &[Vec<Complex64>],
    reference: TransformFn,
    config: &BenchConfig,
) -> Vec<AccuracyReport> {
    cases
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let mut report = AccuracyReport {
                kernel: name.to_string(),
                case: i + 1,
                len: input.len(),
                mae: None,
                mse: None,
                passed: false,
                error: None,
            };

            let outputs = kernel(input).and_then(|out| Ok((out, reference(input)?)));
            match outputs {
                Ok((output, expected)) => {
                    let mae = mean_absolute_error(&output, &expected);
                    let mse = mean_squared_error(&output, &expected);
                    report.mae = Some(mae);
                    report.mse = Some(mse);
                    report.passed = allclose(&output, &expected, config.rtol, config.atol);

                    if report.passed {
                        tracing::debug!(
                            kernel = name,
                            case = i + 1,
                            len = input.len(),
                            mae,
                            mse,
                            "pass"
                        );
                    } else {
                        tracing::warn!(
                            kernel = name,
                            case = i + 1,
                            len = input.len(),
                            mae,
                            mse,
                            "numerical mismatch"
                        );
                    }
                }
                Err(err) => {
                    tracing::debug!(
                        kernel = name,
                        case = i + 1,
                        len = input.len(),
                        %err,
                        "kernel error"
                    );
                    report.error = Some(err);
                }
            }

            report
        })
        .collect()
}

/// Time `kernel` on every case, after warming it up on a random input
pub fn measure_speed(
    name: &str,
    kernel: TransformFn,
    cases: &[Vec<Complex64>],
    config: &BenchConfig,
) -> Vec<SpeedReport> {
    let warmup_input = random_complex(&mut rand::thread_rng(), config.warmup_len);
    for _ in 0..config.warmup_rounds {
        if let Err(err) = kernel(&warmup_input) {
            tracing::warn!(kernel = name, %err, "warm-up failed");
            break;
        }
    }

    let rounds = config.speed_rounds.max(1);
    cases
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let mut report = SpeedReport {
                kernel: name.to_string(),
                case: i + 1,
                len: input.len(),
                elapsed: None,
                error: None,
            };

            let start = Instant::now();
            let outcome = (0..rounds).try_for_each(|_| kernel(input).map(drop));
            let elapsed = start.elapsed() / rounds as u32;

            match outcome {
                Ok(()) => {
                    tracing::debug!(
                        kernel = name,
                        case = i + 1,
                        len = input.len(),
                        ?elapsed,
                        "timed"
                    );
                    report.elapsed = Some(elapsed);
                }
                Err(err) => {
                    tracing::debug!(
                        kernel = name,
                        case = i + 1,
                        len = input.len(),
                        %err,
                        "kernel error"
                    );
                    report.error = Some(err);
                }
            }

            report
        })
        .collect()
}

/// [`measure_accuracy`] for every registered kernel, sorted by kernel name, then case
pub fn benchmark_accuracy(
    registry: &KernelRegistry,
    cases: &[Vec<Complex64>],
    reference: TransformFn,
    config: &BenchConfig,
) -> Vec<AccuracyReport> {
    let mut reports: Vec<AccuracyReport> = registry
        .lookup_all()
        .flat_map(|(name, kernel)| measure_accuracy(name, kernel, cases, reference, config))
        .collect();
    reports.sort_by(|a, b| (&a.kernel, a.case).cmp(&(&b.kernel, b.case)));
    reports
}

/// [`measure_speed`] for every registered kernel, sorted by kernel name, then case
pub fn benchmark_speed(
    registry: &KernelRegistry,
    cases: &[Vec<Complex64>],
    config: &BenchConfig,
) -> Vec<SpeedReport> {
    let mut reports: Vec<SpeedReport> = registry
        .lookup_all()
        .flat_map(|(name, kernel)| measure_speed(name, kernel, cases, config))
        .collect();
    reports.sort_by(|a, b| (&a.kernel, a.case).cmp(&(&b.kernel, b.case)));
    reports
}

/// Benchmarks every registered kernel on `data` and returns the name of the fastest one.
///
/// Kernels that reject `data` are skipped. Returns `None` if none accepts it.
pub fn find_fastest_kernel<'a>(
    registry: &'a KernelRegistry,
    data: &[Complex64],
    iterations: usize,
) -> Option<&'a str> {
    let mut results = Vec::new();

    for (name, kernel) in registry.lookup_all() {
        // Warm-up run, doubles as the length check
        if kernel(data).is_err() {
            continue;
        }

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = kernel(data);
        }
        let elapsed = start.elapsed().as_nanos();

        results.push((name, elapsed));
    }

    results
        .into_iter()
        .min_by_key(|(_, time)| *time)
        .map(|(name, _)| name)
}

/// Benchmarks multiple implementations and returns the fastest one
fn find_fastest_implementation(
    implementations: &[(BitReverseAlgorithm, BitRevFunc<u8>)],
    test_data: &[u8],
    iterations: usize,
) -> BitReverseAlgorithm {
    let mut results = Vec::new();
    let log_n = test_data.len().ilog2() as usize;

    for (algorithm, func) in implementations.iter() {
        // Create a fresh copy of test data for each implementation
        let mut data = test_data.to_vec();

        // Warm-up run
        func(&mut data, log_n);

        let start = Instant::now();
        for _ in 0..iterations {
            // Reset data between iterations
            data.copy_from_slice(test_data);
            func(&mut data, log_n);
        }
        let elapsed = start.elapsed().as_nanos();

        results.push((*algorithm, elapsed));
    }

    results
        .into_iter()
        .min_by_key(|(_, time)| *time)
        .map_or(BitReverseAlgorithm::default(), |(algorithm, _)| algorithm)
}

/// Time every in-place bit reversal algorithm on `2^log_n` elements and return the fastest
pub fn measure_fastest_bit_reversal_impl(log_n: usize) -> BitReverseAlgorithm {
    let implementations: &[(BitReverseAlgorithm, BitRevFunc<u8>)] = &[
        (BitReverseAlgorithm::Table, bit_rev_table),
        (BitReverseAlgorithm::Gray, bit_rev_gray),
        (BitReverseAlgorithm::Naive, bit_rev_naive),
    ];

    let test_data: Vec<u8> = (0..=255).cycle().take(1 << log_n).collect();
    let iterations = 10;

    let fastest = find_fastest_implementation(implementations, &test_data, iterations);
    tracing::debug!(log_n, ?fastest, "measured bit reversal algorithms");
    fastest
}
