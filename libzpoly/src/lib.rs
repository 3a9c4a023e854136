//! Exact arithmetic on sparse univariate polynomials.
//!
//! A [Poly] stores its non-zero terms in a [TermSeq], a sorted sequence of `(degree, coefficient)`
//! pairs searched by bisection. Coefficients are [BigRational]s, so division never loses
//! precision.

mod errors;
pub use errors::{PolyError, Result};

mod term_seq;
pub use term_seq::{Term, TermSeq};

mod poly;
pub use poly::Poly;

#[cfg(feature = "benchmark-internals")]
pub use poly::_fit;

pub use num_rational::BigRational;

#[cfg(test)]
mod proptests;
