use crate::poly::Poly;

use num_rational::BigRational;
use num_traits::Zero;
use std::collections::BTreeMap;

impl Poly {
    /// Multiplies `self` by `other` with a sparse schoolbook convolution, O(n₁·n₂) in the number
    /// of terms.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // (3x^2 + 2x + 1) * (2x^2 + x) -> 6x^4 + 7x^3 + 4x^2 + x
    /// assert_eq!(
    ///     poly![0 => 1, 1 => 2, 2 => 3]?.mul(&poly![1 => 1, 2 => 2]?),
    ///     poly![1 => 1, 2 => 4, 3 => 7, 4 => 6]?
    /// );
    /// ```
    pub fn mul(&self, other: &Poly) -> Poly {
        let mut products: BTreeMap<usize, BigRational> = BTreeMap::new();
        for (ld, lc) in self.terms() {
            for (rd, rc) in other.terms() {
                *products
                    .entry(ld + rd)
                    .or_insert_with(BigRational::zero) += lc * rc;
            }
        }
        products.retain(|_, coeff| !coeff.is_zero());
        Poly::from_nonzero_terms(products)
    }

    /// Multiplies a term of form `coeff`x^`pow` to `self`.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // (2x + 1) * 3x^2 -> 6x^3 + 3x^2
    /// assert_eq!(poly![0 => 1, 1 => 2]?.mul_term(2, &3.into()), poly![2 => 3, 3 => 6]?);
    /// ```
    pub fn mul_term(&self, pow: usize, coeff: &BigRational) -> Poly {
        if coeff.is_zero() || self.is_zero() {
            return Poly::zero();
        }
        let shifted = self
            .terms()
            .items()
            .map(|(degree, c)| (degree + pow, c * coeff))
            .collect();
        Poly::from_nonzero_terms(shifted)
    }

    /// Multiplies each term in the polynomial by a scalar.
    #[inline]
    pub fn mul_scalar(&self, c: &BigRational) -> Poly {
        self.mul_term(0, c)
    }
}

forward_binop!(Mul, mul);
