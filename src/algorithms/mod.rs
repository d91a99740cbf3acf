//! Transform Kernels
//!
//! Every kernel runs the same pipeline, **Validate → Permute → Combine**, and only differs in
//! how the combine step is structured.
//!
//! ## Available Algorithms
//!
//! - **Naive DFT**: direct `O(N²)` summation. The only kernel accepting any length, `0` included.
//!
//! - **Recursive radix-2 / radix-4**: copying divide and conquer. The permutation is implicit in
//!   the even/odd (stride-4) split at every level.
//!
//! - **Iterative radix-2 / radix-4**: an explicit bit (digit) reversal up front, then one
//!   butterfly pass per stage from the smallest block size to `N`.
//!
//! - **Mixed radix**: radix-4 stages over a bit-reversed buffer, closed by a radix-2 stage when
//!   the length is not a power of 4. The recursive variant splits four ways while it can.
//!
//! ## Ownership
//!
//! Kernels taking `&[Complex<T>]` never touch the caller's data and return a new sequence. The
//! `_in_place` variants overwrite the caller's buffer with its transform.

pub mod mixed;
pub mod naive;
pub mod radix2;
pub mod radix4;
