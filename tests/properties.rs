//! Property-based tests for the arithmetic laws.

use proptest::prelude::*;

use arithmetica::{
    domains::{
        float::F64,
        fraction::{Fraction, Rational},
        integer::Integer,
        value::Value,
        Arithmetic, Euclidean, Localizable,
    },
    error::ErrorKind,
    poly::univariate::Polynomial,
    tensors::{vector::Vector, ProductArithmetic},
};

fn small_integer() -> impl Strategy<Value = Integer> {
    (-1000i64..1000i64).prop_map(Integer::new)
}

fn nonzero_integer() -> impl Strategy<Value = Integer> {
    small_integer().prop_filter("denominator must be non-zero", |n| !n.is_zero())
}

fn rational() -> impl Strategy<Value = Rational> {
    (small_integer(), nonzero_integer())
        .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

// Fractions of reals are never reduced, so every representative survives
fn real_fraction() -> impl Strategy<Value = Fraction<F64>> {
    ((-50i64..50i64), (1i64..50i64))
        .prop_map(|(n, d)| Fraction::new(F64::from(n as f64), F64::from(d as f64)).unwrap())
}

fn rational_poly() -> impl Strategy<Value = Polynomial<Rational>> {
    proptest::collection::vec(rational(), 1..=5)
        .prop_map(|c| Polynomial::from_coefficients(c).unwrap())
}

fn nonzero_rational_poly() -> impl Strategy<Value = Polynomial<Rational>> {
    rational_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

fn value_vector(len: usize) -> impl Strategy<Value = Vector<Value>> {
    proptest::collection::vec((-100i64..100i64).prop_map(Value::from), len)
        .prop_map(Vector::new)
}

fn real_vector(len: usize) -> impl Strategy<Value = Vector<F64>> {
    proptest::collection::vec((-1e3..1e3f64).prop_map(F64::from), len).prop_map(Vector::new)
}

proptest! {
    #[test]
    fn subtraction_undoes_addition(a in rational(), b in rational()) {
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    #[test]
    fn division_undoes_multiplication(a in rational(), b in rational()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.multiply(&b).unwrap().divide(&b).unwrap(), a);
    }

    #[test]
    fn representative_is_idempotent(n in small_integer(), d in nonzero_integer()) {
        let (n1, d1) = Integer::representative(n, d);
        let (n2, d2) = Integer::representative(n1.clone(), d1.clone());
        prop_assert_eq!((n1, d1), (n2, d2));
    }

    #[test]
    fn cross_multiplication_equality(a in real_fraction(), b in real_fraction()) {
        let lhs = a.numerator().multiply(b.denominator()).unwrap();
        let rhs = b.numerator().multiply(a.denominator()).unwrap();
        prop_assert_eq!(a == b, lhs == rhs);
        prop_assert_eq!(a == b, b == a);
        prop_assert!(a == a);
    }

    #[test]
    fn scaled_fractions_are_equal(a in real_fraction(), k in 1i64..20) {
        let k = F64::from(k as f64);
        let b = Fraction::new(
            a.numerator().multiply(&k).unwrap(),
            a.denominator().multiply(&k).unwrap(),
        ).unwrap();
        let c = Fraction::new(
            b.numerator().multiply(&k).unwrap(),
            b.denominator().multiply(&k).unwrap(),
        ).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &c);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn fraction_sum(a in real_fraction(), b in real_fraction()) {
        let s = a.add(&b).unwrap();
        let num = b.denominator().multiply(a.numerator()).unwrap()
            .add(&a.denominator().multiply(b.numerator()).unwrap()).unwrap();
        let den = a.denominator().multiply(b.denominator()).unwrap();
        prop_assert_eq!(s.numerator(), &num);
        prop_assert_eq!(s.denominator(), &den);
    }

    #[test]
    fn integer_powers(a in rational(), n in 0i64..6) {
        let mut expected = a.one().unwrap();
        for _ in 0..n {
            expected = expected.multiply(&a).unwrap();
        }
        prop_assert_eq!(a.pow(n).unwrap(), expected);
    }

    #[test]
    fn euclidean_division(a in rational_poly(), b in nonzero_rational_poly()) {
        let (q, r) = a.quot_rem(&b).unwrap();
        prop_assert!(r.is_zero() || r.degree() < b.degree());
        prop_assert_eq!(q.multiply(&b).unwrap().add(&r).unwrap(), a);
    }

    #[test]
    fn integer_euclidean_division(a in small_integer(), b in nonzero_integer()) {
        let (q, r) = a.quot_rem(&b).unwrap();
        prop_assert!(!r.is_negative());
        prop_assert!(r.degree() < b.degree());
        prop_assert_eq!(q.multiply(&b).unwrap().add(&r).unwrap(), a);
    }

    #[test]
    fn vector_add_subtract(a in value_vector(4), b in value_vector(4)) {
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    #[test]
    fn real_vector_add_subtract(a in real_vector(3), b in real_vector(3)) {
        let r = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert!(r.equals_within(&a, 1e-9).unwrap());
    }

    #[test]
    fn shape_mismatch(a in value_vector(2), b in value_vector(3)) {
        prop_assert_eq!(a.add(&b).unwrap_err().kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn equal_vectors_hash_equally(a in value_vector(5)) {
        let b = a.add(&a.zero()).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.product_hash(), b.product_hash());
    }
}
