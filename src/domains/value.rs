//! The closed set of algebraic values and the dispatch between them.
//!
//! Binary operations on a pair of [Value]s are resolved in the following order:
//! 1. If either side is symbolic, a deferred composition is built.
//! 2. Two scalars are combined in the numeric tower.
//! 3. A fraction combined with a scalar or polynomial lifts the other side to `x/1`.
//! 4. A polynomial combined with a scalar lifts the scalar to a constant polynomial.
//! 5. Two products are combined elementwise, and a product is scaled by a scalar.
//!
//! Any other combination is an [ArithmeticError::UnsupportedOperation] that names both sides.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use crate::{
    error::{ArithmeticError, Result},
    poly::univariate::Polynomial,
    tensors::{
        dense::DenseVector, matrix::Matrix, tensor::Tensor, vector::Vector, BinaryOperation,
        ProductValue,
    },
};

use super::{
    float::{Complex, F64},
    fraction::{Fraction, Rational},
    integer::Integer,
    scalar::Scalar,
    symbol::{Symbol, Symbolic},
    Arithmetic, Localizable,
};

/// An algebraic value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Scalar(Scalar),
    Fraction(Box<Fraction<Value>>),
    Polynomial(Box<Polynomial<Value>>),
    Product(ProductValue),
    Symbolic(Symbolic),
}

impl Value {
    /// Create a new symbol with the given name.
    pub fn symbol(name: &str) -> Value {
        Value::Symbolic(Symbolic::Symbol(Symbol::new(name)))
    }

    /// Create the fraction `numerator / denominator`.
    /// A fraction of two integers is the rational scalar.
    pub fn fraction(numerator: Value, denominator: Value) -> Result<Value> {
        Ok(Fraction::new(numerator, denominator)?.into())
    }

    /// Create a polynomial from its coefficients, starting with the constant term.
    pub fn polynomial(coefficients: Vec<Value>) -> Result<Value> {
        Ok(Value::Polynomial(Box::new(Polynomial::from_coefficients(
            coefficients,
        )?)))
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Value::Symbolic(_))
    }

    /// Get the value as a real number, if it is a scalar without imaginary part.
    pub fn to_real(&self) -> Option<f64> {
        match self {
            Value::Scalar(s) => s.to_f64(),
            _ => None,
        }
    }

    fn binary(&self, other: &Value, op: BinaryOperation) -> Result<Value> {
        match (self, other) {
            (Value::Symbolic(_), _) | (_, Value::Symbolic(_)) => Ok(match op {
                BinaryOperation::Add => Symbolic::add(self, other),
                BinaryOperation::Subtract => Symbolic::subtract(self, other),
                BinaryOperation::Multiply => Symbolic::multiply(self, other),
            }),
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(op.apply(a, b)?)),
            (Value::Fraction(a), Value::Fraction(b)) => Ok(op.apply(a.as_ref(), b.as_ref())?.into()),
            (Value::Fraction(a), b @ (Value::Scalar(_) | Value::Polynomial(_))) => {
                let b = Fraction::from_numerator(b.clone())?;
                Ok(op.apply(a.as_ref(), &b)?.into())
            }
            (a @ (Value::Scalar(_) | Value::Polynomial(_)), Value::Fraction(b)) => {
                let a = Fraction::from_numerator(a.clone())?;
                Ok(op.apply(&a, b.as_ref())?.into())
            }
            (Value::Polynomial(a), Value::Polynomial(b)) => {
                Ok(op.apply(a.as_ref(), b.as_ref())?.into())
            }
            (Value::Polynomial(a), Value::Scalar(_)) => {
                let b = a.constant(other.clone());
                Ok(op.apply(a.as_ref(), &b)?.into())
            }
            (Value::Scalar(_), Value::Polynomial(b)) => {
                let a = b.constant(self.clone());
                Ok(op.apply(&a, b.as_ref())?.into())
            }
            (Value::Product(a), Value::Product(b)) => Ok(Value::Product(op.apply(a, b)?)),
            (Value::Scalar(_), Value::Product(p)) if op == BinaryOperation::Multiply => {
                Ok(Value::Product(p.scale_by(self)?))
            }
            (Value::Product(p), Value::Scalar(_)) if op == BinaryOperation::Multiply => {
                Ok(Value::Product(p.scale_by(other)?))
            }
            _ => Err(self.unsupported_with(op.name(), other)),
        }
    }

    fn unsupported_with(&self, operation: &'static str, other: &Value) -> ArithmeticError {
        ArithmeticError::unsupported(
            operation,
            format!("{} and {}", self.type_name(), other.type_name()),
        )
    }
}

impl Localizable for Value {
    /// Fractions of two integer scalars are reduced, all others are kept as is.
    fn representative(numerator: Self, denominator: Self) -> (Self, Self) {
        match (numerator, denominator) {
            (Value::Scalar(Scalar::Integer(n)), Value::Scalar(Scalar::Integer(d)))
                if !d.is_zero() =>
            {
                let (n, d) = Integer::representative(n, d);
                (Value::from(n), Value::from(d))
            }
            (n, d) => (n, d),
        }
    }
}

impl Arithmetic for Value {
    fn zero(&self) -> Self {
        match self {
            Value::Scalar(s) => Value::Scalar(s.zero()),
            Value::Fraction(f) => f.zero().into(),
            Value::Polynomial(p) => p.zero().into(),
            Value::Product(p) => Value::Product(p.zero()),
            Value::Symbolic(_) => Value::from(0),
        }
    }

    fn one(&self) -> Result<Self> {
        Ok(match self {
            Value::Scalar(s) => Value::Scalar(s.one()?),
            Value::Fraction(f) => f.one()?.into(),
            Value::Polynomial(p) => p.one()?.into(),
            Value::Product(p) => Value::Product(p.one()?),
            Value::Symbolic(_) => Value::from(1),
        })
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.binary(other, BinaryOperation::Add)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.binary(other, BinaryOperation::Subtract)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        self.binary(other, BinaryOperation::Multiply)
    }

    fn minus(&self) -> Self {
        match self {
            Value::Scalar(s) => Value::Scalar(s.minus()),
            Value::Fraction(f) => f.minus().into(),
            Value::Polynomial(p) => p.minus().into(),
            Value::Product(p) => Value::Product(p.minus()),
            Value::Symbolic(_) => Symbolic::minus(self),
        }
    }

    fn inverse(&self) -> Result<Self> {
        Ok(match self {
            Value::Scalar(s) => Value::Scalar(s.inverse()?),
            Value::Fraction(f) => f.inverse()?.into(),
            Value::Polynomial(p) => p.inverse()?.into(),
            Value::Product(p) => Value::Product(p.inverse()?),
            Value::Symbolic(_) => Symbolic::inverse(self),
        })
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Value::Symbolic(_), _) | (_, Value::Symbolic(_)) => Symbolic::divide(self, other),
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a.divide(b)?)),
            (Value::Fraction(a), Value::Fraction(b)) => Ok(a.divide(b)?.into()),
            (Value::Fraction(a), b @ (Value::Scalar(_) | Value::Polynomial(_))) => {
                Ok(a.divide(&Fraction::from_numerator(b.clone())?)?.into())
            }
            (a @ (Value::Scalar(_) | Value::Polynomial(_)), Value::Fraction(b)) => {
                Ok(Fraction::from_numerator(a.clone())?.divide(b)?.into())
            }
            _ => self.multiply(&other.inverse()?),
        }
    }

    fn power(&self, exponent: &Self) -> Result<Self> {
        if self.is_symbolic() || exponent.is_symbolic() {
            return Ok(Symbolic::power(self, exponent));
        }

        match exponent.integer_exponent() {
            Some(n) => self.pow(n),
            None => Err(ArithmeticError::unsupported(
                "power",
                format!(
                    "{} with exponent {}",
                    self.type_name(),
                    exponent.type_name()
                ),
            )),
        }
    }

    fn norm(&self) -> f64 {
        match self {
            Value::Scalar(s) => s.norm(),
            Value::Fraction(f) => f.norm(),
            Value::Polynomial(p) => p.norm(),
            Value::Product(p) => p.norm(),
            Value::Symbolic(_) => f64::NAN,
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_zero(),
            Value::Fraction(f) => f.is_zero(),
            Value::Polynomial(p) => p.is_zero(),
            Value::Product(p) => p.is_zero(),
            Value::Symbolic(_) => false,
        }
    }

    fn is_one(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_one(),
            Value::Fraction(f) => f.is_one(),
            Value::Polynomial(p) => p.is_one(),
            Value::Product(p) => p.is_one(),
            Value::Symbolic(_) => false,
        }
    }

    fn type_name(&self) -> String {
        match self {
            Value::Scalar(s) => s.type_name(),
            Value::Fraction(f) => f.type_name(),
            Value::Polynomial(p) => p.type_name(),
            Value::Product(p) => p.type_name(),
            Value::Symbolic(Symbolic::Symbol(_)) => "symbol".to_owned(),
            Value::Symbolic(Symbolic::Composition { .. }) => "symbolic expression".to_owned(),
        }
    }

    fn integer_exponent(&self) -> Option<i64> {
        match self {
            Value::Scalar(s) => s.integer_exponent(),
            Value::Fraction(f) => f.integer_exponent(),
            Value::Polynomial(p) => p.integer_exponent(),
            Value::Product(_) | Value::Symbolic(_) => None,
        }
    }

    /// Symbolic values are only equal within a tolerance if they are identical,
    /// unless the tolerance is infinite.
    fn equals_within(&self, other: &Self, tolerance: f64) -> Result<bool> {
        if self.is_symbolic() || other.is_symbolic() {
            return Ok(tolerance == f64::INFINITY || self == other);
        }

        Ok(self.distance(other)? < tolerance)
    }

    fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => a.compare(b),
            (Value::Fraction(a), Value::Fraction(b)) => a.compare(b),
            (Value::Fraction(a), b @ Value::Scalar(_)) => {
                a.compare(&Fraction::from_numerator(b.clone())?)
            }
            (a @ Value::Scalar(_), Value::Fraction(b)) => {
                Fraction::from_numerator(a.clone())?.compare(b)
            }
            _ => Err(self.unsupported_with("compare", other)),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(s) => Display::fmt(s, f),
            Value::Fraction(r) => Display::fmt(r, f),
            Value::Polynomial(p) => write!(f, "({})", p),
            Value::Product(p) => Display::fmt(p, f),
            Value::Symbolic(s) => Display::fmt(s, f),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(i32, i64, f64, Integer, Rational, Complex);

impl From<F64> for Value {
    fn from(value: F64) -> Self {
        Value::Scalar(Scalar::Real(value))
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<Fraction<Value>> for Value {
    fn from(value: Fraction<Value>) -> Self {
        if let (Value::Scalar(Scalar::Integer(n)), Value::Scalar(Scalar::Integer(d))) =
            (value.numerator(), value.denominator())
        {
            if let Ok(r) = Rational::new(n.clone(), d.clone()) {
                return Value::from(r);
            }
        }

        Value::Fraction(Box::new(value))
    }
}

impl From<Polynomial<Value>> for Value {
    fn from(value: Polynomial<Value>) -> Self {
        Value::Polynomial(Box::new(value))
    }
}

impl From<ProductValue> for Value {
    fn from(value: ProductValue) -> Self {
        Value::Product(value)
    }
}

impl From<DenseVector> for Value {
    fn from(value: DenseVector) -> Self {
        Value::Product(ProductValue::Dense(value))
    }
}

impl From<Vector<Value>> for Value {
    fn from(value: Vector<Value>) -> Self {
        Value::Product(ProductValue::Vector(value))
    }
}

impl From<Matrix<Value>> for Value {
    fn from(value: Matrix<Value>) -> Self {
        Value::Product(ProductValue::Matrix(value))
    }
}

impl From<Tensor<Value>> for Value {
    fn from(value: Tensor<Value>) -> Self {
        Value::Product(ProductValue::Tensor(value))
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbolic(Symbolic::Symbol(value))
    }
}

impl From<Symbolic> for Value {
    fn from(value: Symbolic) -> Self {
        Value::Symbolic(value)
    }
}
