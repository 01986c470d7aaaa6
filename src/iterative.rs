use std::mem;

use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

use crate::bit_rev::bit_reverse;
use crate::error::{validate_length, FftError};
use crate::twiddles::generate_twiddles;

/// FFT -- iterative butterfly network.
///
/// Permutes the input by bit reversal, then runs `log2(N)` butterfly stages
/// over a pair of working buffers that swap roles between stages. Produces
/// the same result as [`fft_recursive`](crate::fft_recursive) to floating
/// tolerance.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the input length is below 2 or not
/// a power of two.
pub fn fft_iterative<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> Result<Vec<Complex<T>>, FftError> {
    let stages = validate_length(input.len())?;
    let n = input.len();

    let twiddles = generate_twiddles(n / 2);

    let mut x: Vec<Complex<T>> = (0..n).map(|i| input[bit_reverse(i, stages)]).collect();
    let mut y = vec![Complex::zero(); n];

    for q in 0..stages {
        let dist = 1 << q;
        let stride = (n / 2) >> q;
        butterfly_stage(&x, &mut y, &twiddles, dist, stride);
        // The stage output becomes the next stage's input.
        mem::swap(&mut x, &mut y);
    }

    Ok(x)
}

/// One butterfly stage: groups of `2 * dist` elements, each pair `dist`
/// apart combined through every `stride`-th twiddle factor.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
fn butterfly_stage<T: Float>(
    x: &[Complex<T>],
    y: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    dist: usize,
    stride: usize,
) {
    let chunk_size = dist << 1;

    x.chunks_exact(chunk_size)
        .zip(y.chunks_exact_mut(chunk_size))
        .for_each(|(x_chunk, y_chunk)| {
            let (x_s0, x_s1) = x_chunk.split_at(dist);
            let (y_s0, y_s1) = y_chunk.split_at_mut(dist);

            x_s0.iter()
                .zip(x_s1.iter())
                .zip(y_s0.iter_mut())
                .zip(y_s1.iter_mut())
                .zip(twiddles.iter().step_by(stride))
                .for_each(|((((x0, x1), y0), y1), w)| {
                    let t = *w * *x1;
                    *y0 = *x0 + t;
                    *y1 = *x0 - t;
                });
        });
}
