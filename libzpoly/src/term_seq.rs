use crate::errors::{PolyError, Result};

use std::collections::BTreeMap;

/// A degree-value pair.
pub type Term<V> = (usize, V);

/// An immutable sequence of [terms](Term), sorted strictly ascending by degree.
///
/// The sequence is built once and never resized, so it is stored as a flat vector and searched by
/// bisection rather than hashed.
///
/// # Examples:
///
/// ```ignore
/// let seq = TermSeq::new(vec![(4, 4), (0, 1), (1, 2)].into_iter().collect());
/// assert_eq!(seq.get_by_key(4, None), Ok(&4));
/// assert_eq!(seq.get_by_key(3, Some(&0)), Ok(&0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TermSeq<V> {
    terms: Vec<Term<V>>,
}

impl<V> From<BTreeMap<usize, V>> for TermSeq<V> {
    fn from(map: BTreeMap<usize, V>) -> Self {
        Self::new(map)
    }
}

impl<V> TermSeq<V> {
    /// Creates a sequence from a degree mapping. A [BTreeMap] already iterates in ascending key
    /// order with unique keys, so this cannot fail.
    pub fn new(map: BTreeMap<usize, V>) -> Self {
        Self {
            terms: map.into_iter().collect(),
        }
    }

    /// Creates a sequence from pairs in any order.
    /// If two pairs share a degree, an [InvalidTerm](PolyError::InvalidTerm) error is returned.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Term<V>>,
    {
        let mut terms: Vec<Term<V>> = pairs.into_iter().collect();
        terms.sort_by_key(|(degree, _)| *degree);
        if let Some(dup) = terms.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(PolyError::InvalidTerm {
                degree: dup[0].0,
                reason: "degree appears more than once",
            });
        }
        Ok(Self { terms })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the `n`th term in ascending degree order.
    pub fn get_by_nth(&self, n: usize) -> Result<&Term<V>> {
        self.terms.get(n).ok_or(PolyError::IndexOutOfRange {
            index: n,
            len: self.terms.len(),
        })
    }

    /// Looks up the value at `degree` by binary search.
    pub fn get(&self, degree: usize) -> Option<&V> {
        let (mut lo, mut hi) = (0, self.terms.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.terms[mid].0 < degree {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        // `lo` is now the first index whose degree is not less than `degree`.
        match self.terms.get(lo) {
            Some((d, value)) if *d == degree => Some(value),
            _ => None,
        }
    }

    /// Looks up the value at `degree`, falling back on `default` if there is no such term.
    ///
    /// Any provided default is returned on a miss, including a zero value; only the absence of a
    /// default produces a [KeyNotFound](PolyError::KeyNotFound) error.
    pub fn get_by_key<'a>(&'a self, degree: usize, default: Option<&'a V>) -> Result<&'a V> {
        self.get(degree)
            .or(default)
            .ok_or(PolyError::KeyNotFound { degree })
    }

    /// Returns the term of lowest degree.
    #[inline]
    pub fn first(&self) -> Result<&Term<V>> {
        self.terms.first().ok_or(PolyError::EmptySequence)
    }

    /// Returns the term of highest degree.
    #[inline]
    pub fn last(&self) -> Result<&Term<V>> {
        self.terms.last().ok_or(PolyError::EmptySequence)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Term<V>] {
        &self.terms
    }

    /// Iterates over all terms in ascending degree order.
    pub fn items(&self) -> std::slice::Iter<'_, Term<V>> {
        self.terms.iter()
    }
}

impl<'a, V> IntoIterator for &'a TermSeq<V> {
    type Item = &'a Term<V>;
    type IntoIter = std::slice::Iter<'a, Term<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}
