use arithmetica::{
    domains::{
        fraction::{Fraction, Rational},
        integer::Integer,
        value::Value,
        Arithmetic, Euclidean,
    },
    error::{ArithmeticError, ErrorKind},
    factory::ValueFactory,
    poly::univariate::Polynomial,
    tensors::{dense::DenseVector, matrix::Matrix, vector::Vector, ProductValue},
};

#[test]
fn cubic_division() {
    let f = ValueFactory::new();
    let x3_minus_1 =
        Polynomial::from_coefficients(vec![f.integer(-1), f.zero(), f.zero(), f.one()]).unwrap();
    let x_minus_1 = Polynomial::from_coefficients(vec![f.integer(-1), f.one()]).unwrap();

    let q = x3_minus_1.quotient(&x_minus_1).unwrap();
    let r = x3_minus_1.modulo(&x_minus_1).unwrap();

    assert_eq!(q.coefficients(), &[f.one(), f.one(), f.one()]);
    assert!(r.is_zero());
    assert_eq!(q.multiply(&x_minus_1).unwrap(), x3_minus_1);
}

#[test]
fn polynomial_gcd() {
    // gcd((x-1)(x+2), (x-1)(x-3)) is a multiple of x-1
    let a = Polynomial::from_coefficients(
        [-2, 1, 1].map(|c| Rational::try_from((c, 1)).unwrap()).to_vec(),
    )
    .unwrap();
    let b = Polynomial::from_coefficients(
        [3, -4, 1].map(|c| Rational::try_from((c, 1)).unwrap()).to_vec(),
    )
    .unwrap();

    let g = a.gcd(&b).unwrap();
    assert_eq!(g.degree(), Some(1));
    assert!(g.evaluate(&Rational::try_from((1, 1)).unwrap()).unwrap().is_zero());
}

#[test]
fn degree_cache_through_values() {
    let f = ValueFactory::new();
    let mut p =
        Polynomial::from_coefficients(vec![f.integer(1), f.integer(2), f.integer(5)]).unwrap();
    p.set(2, f.zero()).unwrap();
    assert_eq!(p.degree(), Some(1));
    assert_eq!(p.coefficients(), &[f.integer(1), f.integer(2)]);

    p.set(0, f.zero()).unwrap();
    assert_eq!(p.degree(), Some(1));

    assert_eq!(
        p.get(3).unwrap_err(),
        ArithmeticError::IndexOutOfBounds {
            index: 3,
            capacity: 3
        }
    );
}

#[test]
fn fraction_sum_formula() {
    let a = Rational::try_from((2, 3)).unwrap();
    let b = Rational::try_from((5, 7)).unwrap();
    let (na, sa) = (a.numerator().clone(), a.denominator().clone());
    let (nb, tb) = (b.numerator().clone(), b.denominator().clone());

    let expected = Fraction::new(
        tb.multiply(&na)
            .unwrap()
            .add(&sa.multiply(&nb).unwrap())
            .unwrap(),
        sa.multiply(&tb).unwrap(),
    )
    .unwrap();
    assert_eq!(a.add(&b).unwrap(), expected);
    assert_eq!(expected, Rational::try_from((29, 21)).unwrap());
}

#[test]
fn fraction_division_by_zero() {
    let a = Fraction::new(Integer::new(1), Integer::new(2)).unwrap();
    assert_eq!(
        a.divide(&a.zero()).unwrap_err(),
        ArithmeticError::DivisionByZero
    );
    assert_eq!(
        a.inverse().unwrap().inverse().unwrap(),
        a
    );
}

#[test]
fn product_shapes() {
    let f = ValueFactory::new();
    let v2 = f.vector(vec![f.one(), f.one()]);
    let v3 = f.vector(vec![f.one(), f.one(), f.one()]);
    assert_eq!(v2.add(&v3).unwrap_err().kind(), ErrorKind::IllegalArgument);

    let m = f
        .matrix(vec![vec![f.integer(1), f.integer(2)], vec![f.integer(3), f.integer(4)]])
        .unwrap();
    assert_eq!(m.add(&v2).unwrap_err().kind(), ErrorKind::IllegalArgument);

    let inv = m.inverse().unwrap();
    assert_eq!(m.multiply(&inv).unwrap(), m.one().unwrap());
    assert!(m.power(&f.integer(-2)).unwrap().multiply(&m.pow(2).unwrap()).unwrap().is_one());

    let singular = f
        .matrix(vec![vec![f.integer(1), f.integer(2)], vec![f.integer(2), f.integer(4)]])
        .unwrap();
    assert_eq!(singular.inverse().unwrap_err(), ArithmeticError::Singular);
}

#[test]
fn dense_fast_path() {
    let f = ValueFactory::new().with_dense_vectors(true);
    let dense = f.real_vector(vec![1., 2., 3.]);
    let generic = f.vector(vec![f.real(1.), f.integer(1), f.rational(1, 2).unwrap()]);

    let sum = dense.add(&generic).unwrap();
    let Value::Product(ProductValue::Vector(v)) = &sum else {
        panic!("Expected a generic vector, got {:?}", sum);
    };
    assert_eq!(v[0], f.real(2.));
    assert_eq!(v[2], f.real(3.5));
    assert_eq!(DenseVector::try_from_generic(v), Some(DenseVector::new(vec![2., 3., 3.5])));

    let twice = dense.add(&dense).unwrap();
    assert!(matches!(twice, Value::Product(ProductValue::Dense(_))));

    // generic vectors of reals are not demoted implicitly
    let g = Value::from(Vector::new(vec![f.real(1.), f.real(2.), f.real(3.)]));
    assert!(matches!(
        g.add(&g).unwrap(),
        Value::Product(ProductValue::Vector(_))
    ));
}

#[test]
fn symbolic_values() {
    let f = ValueFactory::new();
    let a = f.symbol("a");

    assert_eq!(a.multiply(&f.one()).unwrap(), a);
    let z = a.multiply(&f.zero()).unwrap();
    assert_eq!(z, f.zero());
    assert!(!z.is_symbolic());

    let e = a.add(&f.integer(2)).unwrap().multiply(&a).unwrap();
    assert!(e.is_symbolic());
    assert!(e.norm().is_nan());
    assert!(!e.is_zero());
    assert_eq!(e.to_string(), "((a+2)*a)");

    let m = Matrix::from_linear(vec![a.clone(), f.zero(), f.zero(), a.clone()], 2, 2).unwrap();
    let scaled = Value::from(m).multiply(&f.integer(1)).unwrap();
    assert!(matches!(scaled, Value::Product(ProductValue::Matrix(_))));
}
