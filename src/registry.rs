//! Named collection of transform kernels
//!
//! The registry is an explicit value built by the host application, kernels are added one call at a
//! time. Names are unique: registering under a taken name stores the kernel under a suffixed name
//! instead of replacing the existing entry.
use std::collections::HashMap;
use std::fmt;

use num_complex::Complex64;

use crate::algorithms::mixed::{fft_mixed_radix_iterative, fft_mixed_radix_recursive};
use crate::algorithms::naive::naive_dft;
use crate::algorithms::radix2::{fft_radix2_iterative, fft_radix2_recursive};
use crate::algorithms::radix4::{fft_radix4_iterative, fft_radix4_recursive};
use crate::error::FftResult;

/// Signature every registered kernel has. The input is never mutated.
pub type TransformFn = fn(&[Complex64]) -> FftResult<Vec<Complex64>>;

/// Insertion-ordered mapping from kernel name to kernel
#[derive(Clone, Default)]
pub struct KernelRegistry {
    entries: Vec<(String, TransformFn)>,
    /// Last suffix handed out per base name
    duplicates: HashMap<String, usize>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every kernel of this crate, in double precision
    pub fn with_builtin_kernels() -> Self {
        let mut registry = Self::new();
        registry.register("naive_dft", naive_dft::<f64>);
        registry.register("fft_radix2_recursive", fft_radix2_recursive::<f64>);
        registry.register("fft_radix2_iterative", fft_radix2_iterative::<f64>);
        registry.register("fft_radix4_recursive", fft_radix4_recursive::<f64>);
        registry.register("fft_radix4_iterative", fft_radix4_iterative::<f64>);
        registry.register("fft_mixed_radix_iterative", fft_mixed_radix_iterative::<f64>);
        registry.register("fft_mixed_radix_recursive", fft_mixed_radix_recursive::<f64>);
        registry
    }

    /// Add `kernel` under `name` and return the key it was stored under.
    ///
    /// If `name` is taken the kernel is stored as `{name}_1`, `{name}_2`, … (the first suffix not
    /// in use) and a warning is logged. Existing entries are never replaced.
    pub fn register(&mut self, name: impl Into<String>, kernel: TransformFn) -> String {
        let base = name.into();
        let mut key = base.clone();

        if self.get(&key).is_some() {
            let mut suffix = self.duplicates.get(&base).copied().unwrap_or(0);
            loop {
                suffix += 1;
                key = format!("{base}_{suffix}");
                if self.get(&key).is_none() {
                    break;
                }
            }
            self.duplicates.insert(base.clone(), suffix);
            tracing::warn!(name = %base, registered_as = %key, "duplicate kernel name");
        }

        self.entries.push((key.clone(), kernel));
        tracing::info!(name = %key, "registered transform kernel");
        key
    }

    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, kernel)| *kernel)
    }

    /// Every `(name, kernel)` pair in registration order
    pub fn lookup_all(&self) -> impl Iterator<Item = (&str, TransformFn)> + '_ {
        self.entries
            .iter()
            .map(|(name, kernel)| (name.as_str(), *kernel))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for KernelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
