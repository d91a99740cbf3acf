//! Error types returned by the transform kernels and plans

use thiserror::Error;

/// Result type for transform operations
pub type FftResult<T> = Result<T, FftError>;

/// Errors a transform kernel can raise before doing any work
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FftError {
    /// The input length is not a positive power of the radix the kernel requires
    #[error("input length {len} is not a positive power of {radix}")]
    InvalidLength { radix: usize, len: usize },

    /// A buffer handed to a [`Plan`](crate::planner::Plan) was not the planned length
    #[error("buffer length {actual} does not match the planned length {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
