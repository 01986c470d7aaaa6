use num_complex::Complex;
use num_traits::{Float, FloatConst, Zero};

use crate::error::{validate_length, FftError};
use crate::twiddles::generate_twiddles;

/// FFT -- recursive decimation in time.
///
/// Splits the input into even- and odd-indexed halves, transforms each half,
/// and recombines them through the twiddle factors of the current size.
/// Every recursion frame owns its own scratch buffers, released when the
/// frame returns.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the input length is below 2 or not
/// a power of two.
pub fn fft_recursive<T: Float + FloatConst>(
    input: &[Complex<T>],
) -> Result<Vec<Complex<T>>, FftError> {
    validate_length(input.len())?;
    Ok(transform(input))
}

/// Recursion body. Lengths below the public entry point are halves of an
/// already validated power of two.
fn transform<T: Float + FloatConst>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = input.len();
    if n == 2 {
        return vec![input[0] + input[1], input[0] - input[1]];
    }

    let twiddles = generate_twiddles(n / 2);

    // Stride-2 decimation: even-indexed samples land in the low half, odd in
    // the high half.
    let (evens, odds): (Vec<_>, Vec<_>) = input.chunks_exact(2).map(|c| (c[0], c[1])).unzip();

    let g = transform(&evens);
    let h = transform(&odds);

    let mut out = vec![Complex::zero(); n];
    combine(&g, &h, &twiddles, &mut out);
    out
}

/// Radix-2 recombination of two half transforms:
/// `out[i] = G[i] + W^i H[i]`, `out[n/2 + i] = G[i] - W^i H[i]`.
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
fn combine<T: Float>(
    g: &[Complex<T>],
    h: &[Complex<T>],
    twiddles: &[Complex<T>],
    out: &mut [Complex<T>],
) {
    let (out_lo, out_hi) = out.split_at_mut(g.len());

    out_lo
        .iter_mut()
        .zip(out_hi.iter_mut())
        .zip(g.iter())
        .zip(h.iter())
        .zip(twiddles.iter())
        .for_each(|((((lo, hi), g), h), w)| {
            let t = *w * *h;
            *lo = *g + t;
            *hi = *g - t;
        });
}
