//! Property-based tests for polynomial arithmetic.

use crate::{Poly, PolyError, TermSeq};

use num_rational::BigRational;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategy for generating small non-zero integer coefficients
fn small_coeff() -> impl Strategy<Value = i64> {
    (-50i64..50i64).prop_filter("coefficient must be non-zero", |c| *c != 0)
}

// Strategy for generating sparse term mappings (degree 0-11, 1-5 terms)
fn term_map() -> impl Strategy<Value = BTreeMap<usize, i64>> {
    proptest::collection::btree_map(0usize..12, small_coeff(), 1..6)
}

fn nonzero_poly() -> impl Strategy<Value = Poly> {
    term_map().prop_map(|m| Poly::from_ints(m).unwrap())
}

// Mostly non-zero, with the zero polynomial mixed in
fn small_poly() -> impl Strategy<Value = Poly> {
    prop_oneof![
        1 => Just(Poly::zero()),
        9 => nonzero_poly(),
    ]
}

fn small_rational() -> impl Strategy<Value = BigRational> {
    (-20i64..20i64, 1i64..10i64).prop_map(|(n, d)| BigRational::new(n.into(), d.into()))
}

proptest! {
    #[test]
    fn term_seq_lookup_matches_map(
        m in proptest::collection::btree_map(0usize..64, any::<i32>(), 0..20),
        k in 0usize..64
    ) {
        let seq = TermSeq::new(m.clone());
        prop_assert_eq!(seq.get(k), m.get(&k));
        prop_assert_eq!(seq.get_by_key(k, Some(&0)).cloned(), Ok(*m.get(&k).unwrap_or(&0)));
        if !m.contains_key(&k) {
            prop_assert_eq!(seq.get_by_key(k, None), Err(PolyError::KeyNotFound { degree: k }));
        }
    }

    #[test]
    fn degrees_match_mapping(m in term_map()) {
        let p = Poly::from_ints(m.clone()).unwrap();
        prop_assert_eq!(p.max_degree(), *m.keys().max().unwrap());
        prop_assert_eq!(p.min_degree(), *m.keys().min().unwrap());
        prop_assert_eq!(p.len(), m.len());
    }

    // Polynomial ring axioms

    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn poly_add_identity(a in small_poly()) {
        let zero = Poly::zero();
        prop_assert_eq!(a.add(&zero), a.clone());
        prop_assert_eq!(zero.add(&a), a);
    }

    #[test]
    fn poly_additive_inverse(a in small_poly()) {
        prop_assert!(a.sub(&a).is_zero());
        prop_assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        // a * (b + c) = a * b + a * c
        let left = a.mul(&b.add(&c));
        let right = a.mul(&b).add(&a.mul(&c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn poly_mul_identity(a in small_poly()) {
        prop_assert_eq!(a.mul(&Poly::one()), a);
    }

    #[test]
    fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!(a.mul(&b).max_degree(), a.max_degree() + b.max_degree());
    }

    // Division

    #[test]
    fn divmod_reconstructs_numerator(n in small_poly(), d in nonzero_poly()) {
        let (q, r) = Poly::divmod(&n, &d).unwrap();
        prop_assert!(r.is_zero() || r.max_degree() < d.max_degree());
        prop_assert_eq!(q.mul(&d).add(&r), n);
    }

    #[test]
    fn divmod_of_product_is_exact(a in nonzero_poly(), b in nonzero_poly()) {
        let (q, r) = Poly::divmod(&a.mul(&b), &b).unwrap();
        prop_assert_eq!(q, a);
        prop_assert!(r.is_zero());
    }

    #[test]
    fn divmod_by_zero_fails(n in small_poly()) {
        prop_assert_eq!(Poly::divmod(&n, &Poly::zero()), Err(PolyError::DivisionByZeroPolynomial));
    }

    // Evaluation and rendering

    #[test]
    fn eval_is_a_ring_homomorphism(a in small_poly(), b in small_poly(), x in small_rational()) {
        prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
    }

    #[test]
    fn render_is_idempotent(a in small_poly()) {
        prop_assert_eq!(a.render(), a.render());
        prop_assert_eq!(a.render().split(" + ").count(), a.len());
    }
}
