use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Successive roots of unity, in the order the butterfly stages consume them.
///
/// Seeded with `W = e^{-i pi / num_roots}` and `W^0 = 1`; each step advances
/// by a single complex multiplication instead of re-evaluating the
/// exponential.
pub(crate) struct Twiddles<T> {
    step: Complex<T>,
    current: Complex<T>,
}

impl<T: Float + FloatConst> Twiddles<T> {
    /// `num_roots` is the total number of roots of unity to be generated,
    /// i.e. half the transform size.
    pub fn new(num_roots: usize) -> Self {
        let theta = -T::PI() / T::from(num_roots).unwrap();
        Self {
            step: Complex::cis(theta),
            current: Complex::new(T::one(), T::zero()),
        }
    }
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = Complex<T>;

    fn next(&mut self) -> Option<Complex<T>> {
        let w = self.current;
        self.current = self.current * self.step;
        Some(w)
    }
}

/// Builds the `dist` twiddle factors `W_N^k` of a transform of size
/// `N = 2 * dist`.
pub(crate) fn generate_twiddles<T: Float + FloatConst>(dist: usize) -> Vec<Complex<T>> {
    Twiddles::new(dist).take(dist).collect()
}
