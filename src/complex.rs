//! Thin additions over the [`num_complex`] value type: checked division and
//! the `Z( re , im )` diagnostic notation.
//!
//! Arithmetic, conjugation, modulus (`norm`), argument (`arg`), and the
//! exponential all come from [`num_complex::Complex`] itself.

use std::fmt;

use num_complex::Complex;
use num_traits::{Float, Zero};

use crate::error::FftError;

/// Complex division that reports a zero-modulus divisor instead of
/// producing NaNs.
///
/// # Errors
///
/// Returns [`FftError::DivisionByZero`] when `den` has zero modulus.
pub fn checked_div<T: Float>(num: Complex<T>, den: Complex<T>) -> Result<Complex<T>, FftError> {
    if den.norm_sqr().is_zero() {
        return Err(FftError::DivisionByZero);
    }
    Ok(num / den)
}

/// Wraps a complex value in the `Z( re , im )` notation for diagnostics.
///
/// ```
/// use twofft::{Complex64, Diagnostic};
///
/// let z = Complex64::new(1.5, -0.25);
/// assert_eq!(Diagnostic(z).to_string(), "Z( 1.5 , -0.25 )");
/// ```
pub struct Diagnostic<T>(pub Complex<T>);

impl<T: fmt::Display> fmt::Display for Diagnostic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z( {} , {} )", self.0.re, self.0.im)
    }
}
