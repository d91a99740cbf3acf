//! The planner module provides a convenient interface for planning and executing the iterative
//! transforms. A [`Plan`] validates the length once, then pre-computes the input permutation and
//! the twiddle factors of every stage, so executing it repeatedly on buffers of the same length
//! does no setup work.
//!
//! A plan is never mutated by [`Plan::execute`] and can be shared between threads.
use std::fmt;

use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::error::{FftError, FftResult};
use crate::kernels::{apply_stage, QuarterOrder};
use crate::options::{BitReverseAlgorithm, Options};
use crate::permutation::{
    bit_rev_gray, bit_rev_naive, bit_reverse_permutation, digit_reverse_permutation,
    permute_in_place, BitRevFunc,
};
use crate::twiddles::{twiddles, StageTwiddles};
use crate::utils::{is_power_of_four, Radix};

/// How the stages of an iterative transform are laid out
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bit reversal, then radix-2 stages `M = 2, 4, 8, …, N`. Any power of 2.
    Radix2,
    /// Digit reversal, then radix-4 stages `M = 4, 16, 64, …, N`. Any power of 4.
    Radix4,
    /// Bit reversal, then radix-4 stages while `M <= N`, closed by one radix-2 stage of size `N`
    /// when `N` is not a power of 4. Any power of 2.
    MixedRadix,
}

impl Strategy {
    /// The radix the length of a transform has to be a power of
    pub const fn required_radix(self) -> Radix {
        match self {
            Strategy::Radix2 | Strategy::MixedRadix => Radix::Two,
            Strategy::Radix4 => Radix::Four,
        }
    }

    /// Where the radix-4 stages of this strategy find their quarter inputs
    const fn quarter_order(self) -> QuarterOrder {
        match self {
            Strategy::Radix4 => QuarterOrder::Natural,
            Strategy::Radix2 | Strategy::MixedRadix => QuarterOrder::BitReversed,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Radix2 => f.write_str("radix-2"),
            Strategy::Radix4 => f.write_str("radix-4"),
            Strategy::MixedRadix => f.write_str("mixed radix-4/2"),
        }
    }
}

/// How the input is reordered before the first stage
enum Reorder<T> {
    /// Swap by a precomputed bit or digit reversal table
    Table(Vec<usize>),
    /// In-place bit reversal without a table
    InPlace(BitRevFunc<Complex<T>>),
}

/// Pre-computed permutation and per-stage twiddle factors for one length and strategy
pub struct Plan<T> {
    len: usize,
    log_n: usize,
    strategy: Strategy,
    reorder: Reorder<T>,
    /// Twiddles for every stage, in execution order (strictly increasing block size)
    pub stages: Vec<StageTwiddles<T>>,
}

impl<T: Float + FloatConst> Plan<T> {
    /// Create a plan for a transform of `len` points, with options guessed from `len`.
    ///
    /// Fails with [`FftError::InvalidLength`] if `len` does not suit the strategy.
    pub fn new(len: usize, strategy: Strategy) -> FftResult<Self> {
        Self::with_options(len, strategy, &Options::guess_options(len))
    }

    /// Create a plan for a transform of `len` points
    pub fn with_options(len: usize, strategy: Strategy, opts: &Options) -> FftResult<Self> {
        strategy.required_radix().validate(len)?;
        let log_n = len.ilog2() as usize;

        let reorder = match strategy {
            Strategy::Radix4 => Reorder::Table(digit_reverse_permutation(len)?),
            Strategy::Radix2 | Strategy::MixedRadix => match opts.bit_reverse {
                BitReverseAlgorithm::Table => Reorder::Table(bit_reverse_permutation(len)?),
                BitReverseAlgorithm::Gray => Reorder::InPlace(bit_rev_gray),
                BitReverseAlgorithm::Naive => Reorder::InPlace(bit_rev_naive),
            },
        };

        let stages = stage_twiddles(len, strategy);

        tracing::debug!(
            len,
            %strategy,
            stages = stages.len(),
            bit_reverse = ?opts.bit_reverse,
            "built transform plan"
        );

        Ok(Self {
            len,
            log_n,
            strategy,
            reorder,
            stages,
        })
    }
}

impl<T: Float> Plan<T> {
    /// The length this plan transforms
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of butterfly passes over the buffer
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Transform `buf` in place: permute, then run every stage in order.
    ///
    /// Fails with [`FftError::LengthMismatch`] if `buf` is not the planned length; `buf` is left
    /// untouched in that case.
    pub fn execute(&self, buf: &mut [Complex<T>]) -> FftResult<()> {
        if buf.len() != self.len {
            return Err(FftError::LengthMismatch {
                expected: self.len,
                actual: buf.len(),
            });
        }

        match &self.reorder {
            Reorder::Table(permutation) => permute_in_place(buf, permutation),
            Reorder::InPlace(bit_rev) => bit_rev(buf, self.log_n),
        }

        let order = self.strategy.quarter_order();
        for stage in &self.stages {
            apply_stage(buf, stage, order);
        }

        Ok(())
    }
}

/// Twiddle sets of every stage of a validated length, in increasing block size
fn stage_twiddles<T: Float + FloatConst>(
    len: usize,
    strategy: Strategy,
) -> Vec<StageTwiddles<T>> {
    let mut stages = Vec::new();

    match strategy {
        Strategy::Radix2 => {
            let mut m = 2;
            while m <= len {
                stages.push(twiddles(m, Radix::Two));
                m <<= 1;
            }
        }
        Strategy::Radix4 => {
            let mut m = 4;
            while m <= len {
                stages.push(twiddles(m, Radix::Four));
                m <<= 2;
            }
        }
        Strategy::MixedRadix => {
            let mut m = 4;
            while m <= len {
                stages.push(twiddles(m, Radix::Four));
                m <<= 2;
            }
            // The radix-4 stages stop at len / 2, one radix-2 pass of size len closes the gap
            if len > 1 && !is_power_of_four(len) {
                stages.push(twiddles(len, Radix::Two));
            }
        }
    }

    stages
}
