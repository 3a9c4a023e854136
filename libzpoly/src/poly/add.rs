use crate::poly::Poly;

use core::cmp::max;
use num_rational::BigRational;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::ops;

impl Poly {
    /// Adds `other` to `self`, yielding a new polynomial.
    ///
    /// Every degree up to the larger of the two degrees is looked up in both operands, so this is
    /// O(m log n) for degree m and n terms rather than a linear merge of the term lists.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // 1 + (3x^2 + 2x + 1) -> 3x^2 + 2x + 2
    /// assert_eq!(poly![0 => 1]?.add(&poly![0 => 1, 1 => 2, 2 => 3]?), poly![0 => 2, 1 => 2, 2 => 3]?);
    /// ```
    pub fn add(&self, other: &Poly) -> Poly {
        let zero = BigRational::zero();
        let mut sums = BTreeMap::new();
        for degree in 0..=max(self.max_degree(), other.max_degree()) {
            let lhs = self.terms().get(degree).unwrap_or(&zero);
            let rhs = other.terms().get(degree).unwrap_or(&zero);
            let sum = lhs + rhs;
            if !sum.is_zero() {
                sums.insert(degree, sum);
            }
        }
        Poly::from_nonzero_terms(sums)
    }

    /// Negates each term of the polynomial.
    pub fn neg(&self) -> Poly {
        let negated = self
            .terms()
            .items()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(degree, coeff)| (*degree, -coeff))
            .collect();
        Poly::from_nonzero_terms(negated)
    }

    /// Subtracts `other` from `self` by adding its negation.
    pub fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.neg())
    }
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);

impl ops::Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly::neg(self)
    }
}
