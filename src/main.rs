use radixfft::bencher::{benchmark_accuracy, benchmark_speed, BenchConfig};
use radixfft::cases::{combined_cases, simple_cases, speed_cases};
use radixfft::{naive_dft, KernelRegistry};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SEED: u64 = 0x5eed;
const MAX_SPEED_LOG2: u32 = 14;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    init_logging();

    let registry = KernelRegistry::with_builtin_kernels();
    let config = BenchConfig::default();

    tracing::info!("warming up");
    benchmark_accuracy(&registry, &simple_cases(), naive_dft::<f64>, &config);

    tracing::info!("testing accuracy");
    let accuracy = benchmark_accuracy(&registry, &combined_cases(SEED), naive_dft::<f64>, &config);
    for report in &accuracy {
        match (&report.error, report.mae, report.mse) {
            (Some(err), _, _) => tracing::info!(
                kernel = %report.kernel,
                case = report.case,
                len = report.len,
                %err,
                "error"
            ),
            (None, Some(mae), Some(mse)) => tracing::info!(
                kernel = %report.kernel,
                case = report.case,
                len = report.len,
                mae,
                mse,
                passed = report.passed,
                "accuracy"
            ),
            _ => {}
        }
    }
    let passed = accuracy.iter().filter(|r| r.passed).count();
    tracing::info!(passed, total = accuracy.len(), "accuracy done");

    tracing::info!("testing speed");
    let speed = benchmark_speed(&registry, &speed_cases(SEED, MAX_SPEED_LOG2), &config);
    for report in &speed {
        if let (Some(elapsed), Some(per_bin)) = (report.elapsed, report.per_bin()) {
            tracing::info!(
                kernel = %report.kernel,
                case = report.case,
                len = report.len,
                ?elapsed,
                ?per_bin,
                "speed"
            );
        }
    }
}
