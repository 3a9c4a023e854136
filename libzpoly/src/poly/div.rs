use crate::errors::{PolyError, Result};
use crate::poly::Poly;

use log::debug;
use num_rational::BigRational;

impl Poly {
    /// Divides one polynomial by another, returning a tuple of (quotient, remainder) or an error
    /// if division failed.
    ///
    /// Division is carried out over the rationals, so it always succeeds for a non-zero
    /// `denominator`. The result satisfies `numerator = quotient * denominator + remainder`, where
    /// the remainder is either zero or of lower degree than the denominator.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // (x^2 - 1) / (x - 1) -> ((x + 1), 0)
    /// assert_eq!(
    ///     Poly::divmod(&poly![0 => -1, 2 => 1]?, &poly![0 => -1, 1 => 1]?),
    ///     Ok((poly![0 => 1, 1 => 1]?, Poly::zero()))
    /// );
    ///
    /// // (x^2 + 1) / 2x -> (x/2, 1)
    /// assert_eq!(
    ///     Poly::divmod(&poly![0 => 1, 2 => 1]?, &poly![1 => 2]?),
    ///     Ok((Poly::monomial(1, BigRational::new(1.into(), 2.into())), Poly::one()))
    /// );
    /// ```
    pub fn divmod(numerator: &Poly, denominator: &Poly) -> Result<(Poly, Poly)> {
        if denominator.is_zero() {
            return Err(PolyError::DivisionByZeroPolynomial);
        }

        let mut quo = Poly::zero();
        let mut rem = numerator.clone();
        while let Some((pow, scale)) = fit(&rem, denominator) {
            let d_rem_old = rem.max_degree();
            let term = Poly::monomial(pow, scale);

            // Subtract (current term * denominator) from the rest of the polynomial we need to
            // divide.
            rem = rem.add(&term.neg().mul(denominator));
            debug!("fit {} against {}: remainder is now {}", term, denominator, rem);
            debug_assert!(
                rem.is_zero() || rem.max_degree() < d_rem_old,
                "remainder degree did not decrease"
            );

            quo = quo.add(&term);
        }

        debug!(
            "({}) / ({}) = {} rem {}",
            numerator, denominator, quo, rem
        );
        Ok((quo, rem))
    }

    /// Divides `self` by `other`. See [Poly::divmod].
    #[inline]
    pub fn div_rem(&self, other: &Poly) -> Result<(Poly, Poly)> {
        Self::divmod(self, other)
    }
}

/// Computes the quotient term `scale*x^pow` that cancels the leading term of `rem` against the
/// leading term of `divisor`.
///
/// Returns nothing once `rem` can no longer be reduced, i.e. when it is zero or of lower degree
/// than `divisor`, or if `divisor` is zero.
fn fit(rem: &Poly, divisor: &Poly) -> Option<(usize, BigRational)> {
    if rem.is_zero() || divisor.is_zero() {
        return None;
    }
    let pow = rem.max_degree().checked_sub(divisor.max_degree())?;
    Some((pow, rem.lc() / divisor.lc()))
}

#[cfg(feature = "benchmark-internals")]
pub fn _fit(rem: &Poly, divisor: &Poly) -> Option<(usize, BigRational)> {
    fit(rem, divisor)
}
