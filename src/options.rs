/// Options to tune the iterative kernels.
///
/// Calling the kernels without specifying options will automatically select reasonable defaults
/// depending on the input size.
///
/// Options never change the result of a transform, only how the permutation is carried out.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub bit_reverse: BitReverseAlgorithm,
}

impl Options {
    /// Pick options for a transform of `input_size` points
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if input_size < 1 << 4 {
            options.bit_reverse = BitReverseAlgorithm::Table;
        } else {
            options.bit_reverse = BitReverseAlgorithm::Gray;
        }
        options
    }

    /// Use the given bit reversal algorithm
    pub fn with_bit_reverse(mut self, bit_reverse: BitReverseAlgorithm) -> Self {
        self.bit_reverse = bit_reverse;
        self
    }
}

/// The algorithm to use for the radix-2 bit reversal of radix-2 and mixed-radix plans.
/// Radix-4 plans always use a digit reversal table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Precompute the bit reversal permutation and swap by it
    Table,
    /// Gray code driven in-place swaps, no index table is kept
    Gray,
    /// Straightforward reversed-counter swaps
    Naive,
}
