//! Radix-2 Butterfly Kernels
//!
//! Decimation-in-time butterflies: the two halves of every block hold the transforms of the even
//! and odd samples, and are merged as `t = w_k * b; b' = a - t; a' = a + t`.
//!
use num_complex::Complex;
use num_traits::Float;

/// Single radix-2 butterfly, returns `(a + w·b, a - w·b)`
#[inline(always)]
pub fn butterfly2<T: Float>(
    a: Complex<T>,
    b: Complex<T>,
    w: Complex<T>,
) -> (Complex<T>, Complex<T>) {
    let t = w * b;
    (a + t, a - t)
}

/// Butterfly for chunk_size == 2, where the only twiddle is `W_2^0 = 1`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_chunk_2<T: Float>(buf: &mut [Complex<T>]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// One radix-2 stage over every block of size `2 * twiddles.len()`.
///
/// `twiddles[k] = W_M^k` for the stage's block size `M`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn fft_chunk_n<T: Float>(buf: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let dist = twiddles.len();
    let chunk_size = dist << 1;

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(twiddles.iter())
            .for_each(|((a, b), w)| {
                let (out0, out1) = butterfly2(*a, *b, *w);
                *a = out0;
                *b = out1;
            });
    });
}
