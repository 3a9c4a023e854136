#![allow(clippy::should_implement_trait)]

use crate::errors::{PolyError, Result};
use crate::term_seq::{Term, TermSeq};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, One, Zero};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

/// Implements a binary operator on borrowed [Poly] operands by forwarding to the inherent method
/// of the same name.
///
/// Only borrowed operands are covered. With `impl Add for Poly`, `p.add(&q)` resolves to the
/// consuming trait method rather than the inherent one.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl std::ops::$imp<&Poly> for &Poly {
            type Output = Poly;

            fn $method(self, rhs: &Poly) -> Poly {
                Poly::$method(self, rhs)
            }
        }
    };
}

/// Creates a new polynomial from `degree => coefficient` pairs with integer coefficients,
/// returning a [Result].
///
/// # Examples:
///
/// ```ignore
/// poly![0 => -4, 2 => 1]; // x^2 - 4
/// poly![]; // the zero polynomial
/// ```
#[macro_export]
macro_rules! poly {
    ($($degree:expr => $coeff:expr),+ $(,)?) => (
        $crate::Poly::from_ints(vec![$(($degree, $coeff)),+])
    );

    () => {
        Ok::<$crate::Poly, $crate::PolyError>($crate::Poly::zero())
    };
}

mod add;
mod div;
mod mul;

#[cfg(feature = "benchmark-internals")]
pub use div::_fit;

/// A univariate polynomial with exact rational coefficients, stored sparsely.
///
/// Only terms with a non-zero coefficient are kept. The one exception is the zero polynomial,
/// which is represented by the single term `0*x^0` so that the term set is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Poly {
    terms: TermSeq<BigRational>,
}

impl TryFrom<BTreeMap<usize, i64>> for Poly {
    type Error = PolyError;

    fn try_from(map: BTreeMap<usize, i64>) -> Result<Poly> {
        Self::from_ints(map)
    }
}

impl Poly {
    /// Creates a polynomial from a mapping of degree to coefficient.
    ///
    /// The mapping must be non-empty and may not contain zero coefficients, with one exception:
    /// `{0: 0}` creates the [zero polynomial](Poly::zero).
    pub fn new(map: BTreeMap<usize, BigRational>) -> Result<Self> {
        Self::from_seq(TermSeq::new(map))
    }

    /// Creates a polynomial from `(degree, coefficient)` pairs in any order. Besides the
    /// requirements of [Poly::new], no degree may appear twice.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Term<BigRational>>,
    {
        Self::from_seq(TermSeq::try_from_pairs(pairs)?)
    }

    /// Creates a polynomial with integer coefficients.
    pub fn from_ints<I, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, C)>,
        C: Into<BigInt>,
    {
        Self::from_pairs(
            pairs
                .into_iter()
                .map(|(degree, coeff)| (degree, BigRational::from_integer(coeff.into()))),
        )
    }

    fn from_seq(terms: TermSeq<BigRational>) -> Result<Self> {
        if terms.is_empty() {
            return Err(PolyError::EmptyPolynomial);
        }
        let zero_at = terms
            .items()
            .find(|(_, coeff)| coeff.is_zero())
            .map(|(degree, _)| *degree);
        match zero_at {
            Some(0) if terms.len() == 1 => Ok(Self::zero()),
            Some(degree) => Err(PolyError::InvalidTerm {
                degree,
                reason: "coefficient is zero",
            }),
            None => Ok(Self { terms }),
        }
    }

    /// Wraps the result of an arithmetic operation. Zero coefficients must already be removed; if
    /// nothing is left, the zero polynomial is returned.
    pub(crate) fn from_nonzero_terms(map: BTreeMap<usize, BigRational>) -> Self {
        debug_assert!(map.values().all(|coeff| !coeff.is_zero()));
        if map.is_empty() {
            Self::zero()
        } else {
            Self {
                terms: TermSeq::new(map),
            }
        }
    }

    /// The zero polynomial, `0*x^0`.
    pub fn zero() -> Self {
        Self::constant(BigRational::zero())
    }

    /// The constant polynomial `1*x^0`.
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    fn constant(c: BigRational) -> Self {
        let mut map = BTreeMap::new();
        map.insert(0, c);
        Self {
            terms: TermSeq::new(map),
        }
    }

    /// Creates the single-term polynomial `coeff*x^degree`. A zero `coeff` yields the zero
    /// polynomial.
    pub fn monomial(degree: usize, coeff: BigRational) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }
        let mut map = BTreeMap::new();
        map.insert(degree, coeff);
        Self::from_nonzero_terms(map)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.leading_term().1.is_zero()
    }

    /// The number of stored terms. This is 1 for the zero polynomial.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn terms(&self) -> &TermSeq<BigRational> {
        &self.terms
    }

    // Every constructor guarantees at least one term, so neither of these can go out of bounds.
    #[inline]
    fn leading_term(&self) -> &Term<BigRational> {
        let terms = self.terms.as_slice();
        &terms[terms.len() - 1]
    }

    #[inline]
    fn trailing_term(&self) -> &Term<BigRational> {
        &self.terms.as_slice()[0]
    }

    /// Gets the degree of the polynomial.
    #[inline]
    pub fn max_degree(&self) -> usize {
        self.leading_term().0
    }

    /// Gets the degree of the lowest-order term.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.trailing_term().0
    }

    #[inline]
    pub fn max_degree_value(&self) -> &BigRational {
        &self.leading_term().1
    }

    #[inline]
    pub fn min_degree_value(&self) -> &BigRational {
        &self.trailing_term().1
    }

    /// Returns the leading coefficient, i.e. the coefficient of the highest-degree term.
    /// The leading coefficient of the zero polynomial is 0.
    #[inline]
    pub fn lc(&self) -> &BigRational {
        self.max_degree_value()
    }

    /// Returns the coefficient of `x^degree`, which is 0 for degrees without a stored term.
    pub fn coeff(&self, degree: usize) -> BigRational {
        self.terms
            .get(degree)
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    /// Evaluates the polynomial at a value `x`.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // (x^2 - 4)(1) -> -3
    /// assert_eq!(poly![0 => -4, 2 => 1]?.eval(&BigRational::one()), BigRational::from_integer((-3).into()));
    /// ```
    pub fn eval(&self, x: &BigRational) -> BigRational {
        self.terms
            .items()
            .fold(BigRational::zero(), |res, (degree, coeff)| {
                res + coeff * pow(x.clone(), *degree)
            })
    }

    /// Renders the polynomial as `<coeff>*x^<degree>` terms joined by ` + `, lowest degree first.
    /// This is for display only and is not meant to be parsed back.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.terms.items() {
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{}*x^{}", coeff, degree)?;
            first = false;
        }
        Ok(())
    }
}
