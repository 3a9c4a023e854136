//! Errors produced by term sequences and polynomial arithmetic.
//!
//! Every error here is a contract violation by the caller (malformed input, an out-of-range
//! lookup, division by zero), never a transient condition, so none of them are worth retrying.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// A term that cannot be stored, e.g. a duplicated degree or a zero coefficient.
    #[error("Invalid term at degree {degree}: {reason}")]
    InvalidTerm { degree: usize, reason: &'static str },
    #[error("Index {index} is out of range for a sequence of {len} terms")]
    IndexOutOfRange { index: usize, len: usize },
    /// A binary search missed and the caller supplied no default.
    #[error("No term of degree {degree}")]
    KeyNotFound { degree: usize },
    #[error("Cannot take the first or last term of an empty sequence")]
    EmptySequence,
    #[error("A polynomial must have at least one term")]
    EmptyPolynomial,
    #[error("Cannot divide by the zero polynomial")]
    DivisionByZeroPolynomial,
}

pub type Result<T> = std::result::Result<T, PolyError>;
