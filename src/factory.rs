//! The default value factory.
//!
//! A [ValueFactory] holds the process-wide defaults, such as the tolerance used for
//! approximate comparisons and the representation of vectors of reals. The global
//! factory is created from the environment on first use:
//! - `ARITHMETICA_TOLERANCE`: the default tolerance, a non-negative float (default `1e-10`)
//! - `ARITHMETICA_DENSE_VECTORS`: set to `0` or `false` to store real vectors generically
//!
//! A different factory can be installed before first use with [ValueFactory::install],
//! or passed explicitly to code that should not depend on global state.

use std::env;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::{
    domains::{
        float::Complex,
        fraction::Rational,
        integer::Integer,
        value::Value,
        Arithmetic,
    },
    error::{ArithmeticError, Result},
    poly::univariate::Polynomial,
    tensors::{dense::DenseVector, matrix::Matrix, vector::Vector},
};

static GLOBAL_FACTORY: OnceCell<ValueFactory> = OnceCell::new();

const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Creates values and holds the default settings of the library.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueFactory {
    tolerance: f64,
    dense_vectors: bool,
}

impl Default for ValueFactory {
    fn default() -> Self {
        ValueFactory {
            tolerance: DEFAULT_TOLERANCE,
            dense_vectors: true,
        }
    }
}

impl ValueFactory {
    /// Create a factory with the built-in defaults.
    pub fn new() -> ValueFactory {
        ValueFactory::default()
    }

    /// Set the default tolerance, which must be a non-negative number.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<ValueFactory> {
        if tolerance.is_nan() || tolerance < 0. {
            return Err(ArithmeticError::IllegalArgument(format!(
                "invalid tolerance {}",
                tolerance
            )));
        }

        self.tolerance = tolerance;
        Ok(self)
    }

    /// Choose whether vectors of reals use the dense representation.
    pub fn with_dense_vectors(mut self, dense_vectors: bool) -> ValueFactory {
        self.dense_vectors = dense_vectors;
        self
    }

    /// Create a factory from the `ARITHMETICA_*` environment variables.
    /// Malformed values are ignored with a warning.
    pub fn from_env() -> ValueFactory {
        let mut factory = ValueFactory::default();

        if let Ok(t) = env::var("ARITHMETICA_TOLERANCE") {
            match t.trim().parse::<f64>() {
                Ok(tol) if tol >= 0. => factory.tolerance = tol,
                _ => warn!("Ignoring invalid ARITHMETICA_TOLERANCE: {}", t),
            }
        }

        if let Ok(d) = env::var("ARITHMETICA_DENSE_VECTORS") {
            match d.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => factory.dense_vectors = true,
                "0" | "false" | "no" | "off" => factory.dense_vectors = false,
                _ => warn!("Ignoring invalid ARITHMETICA_DENSE_VECTORS: {}", d),
            }
        }

        factory
    }

    /// Get the global factory, initializing it from the environment on first use.
    pub fn global() -> &'static ValueFactory {
        GLOBAL_FACTORY.get_or_init(|| {
            let factory = ValueFactory::from_env();
            debug!("Initialized global value factory: {:?}", factory);
            factory
        })
    }

    /// Install `factory` as the global factory. Only the first factory is accepted,
    /// whether it was installed or initialized by [ValueFactory::global].
    /// Any later factory is returned as the error.
    pub fn install(factory: ValueFactory) -> std::result::Result<(), ValueFactory> {
        GLOBAL_FACTORY.set(factory)?;
        debug!("Installed global value factory");
        Ok(())
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn dense_vectors(&self) -> bool {
        self.dense_vectors
    }

    pub fn zero(&self) -> Value {
        Value::from(0)
    }

    pub fn one(&self) -> Value {
        Value::from(1)
    }

    /// The sentinel for values without a numeric result.
    pub fn nan(&self) -> Value {
        Value::from(f64::NAN)
    }

    pub fn integer(&self, n: impl Into<Integer>) -> Value {
        let n: Integer = n.into();
        Value::from(n)
    }

    /// Create the rational number `num / den`.
    pub fn rational(&self, num: impl Into<Integer>, den: impl Into<Integer>) -> Result<Value> {
        Ok(Value::from(Rational::new(num.into(), den.into())?))
    }

    pub fn real(&self, x: f64) -> Value {
        Value::from(x)
    }

    pub fn complex(&self, re: f64, im: f64) -> Value {
        Value::from(Complex::new(re, im))
    }

    pub fn symbol(&self, name: &str) -> Value {
        Value::symbol(name)
    }

    /// Create a polynomial from its coefficients, starting with the constant term.
    pub fn polynomial(&self, coefficients: Vec<Value>) -> Result<Value> {
        Ok(Polynomial::from_coefficients(coefficients)?.into())
    }

    pub fn vector(&self, components: Vec<Value>) -> Value {
        Vector::new(components).into()
    }

    /// Create a vector of reals, using the dense representation if enabled.
    pub fn real_vector(&self, components: Vec<f64>) -> Value {
        let dense = DenseVector::new(components);
        if self.dense_vectors {
            dense.into()
        } else {
            dense.to_generic().into()
        }
    }

    pub fn matrix(&self, rows: Vec<Vec<Value>>) -> Result<Value> {
        Ok(Matrix::from_nested_vec(rows)?.into())
    }

    /// Test if two values are equal within the default tolerance.
    pub fn approx_eq(&self, a: &Value, b: &Value) -> Result<bool> {
        a.equals_within(b, self.tolerance)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{value::Value, Arithmetic},
        error::ErrorKind,
        factory::ValueFactory,
        tensors::ProductValue,
    };

    #[test]
    fn builder() {
        let f = ValueFactory::new().with_tolerance(0.5).unwrap();
        assert_eq!(f.tolerance(), 0.5);
        assert_eq!(
            ValueFactory::new().with_tolerance(-1.).unwrap_err().kind(),
            ErrorKind::IllegalArgument
        );

        assert!(f.approx_eq(&f.real(1.), &f.real(1.4)).unwrap());
        assert!(!f.approx_eq(&f.real(1.), &f.real(1.5)).unwrap());
    }

    #[test]
    fn constructors() {
        let f = ValueFactory::new();
        assert!(f.zero().is_zero());
        assert!(f.one().is_one());
        assert!(f.nan().norm().is_nan());
        assert_eq!(f.rational(4, 2).unwrap(), f.integer(2));
        assert_eq!(
            f.rational(1, 0).unwrap_err().kind(),
            ErrorKind::ArithmeticFailure
        );
        assert_eq!(f.complex(0., 1.).norm(), 1.);
        assert!(f.symbol("x").is_symbolic());
        assert!(f.polynomial(vec![]).is_err());
        assert!(f.matrix(vec![vec![f.one()], vec![]]).is_err());
    }

    #[test]
    fn vector_representation() {
        let dense = ValueFactory::new().real_vector(vec![1., 2.]);
        let generic = ValueFactory::new()
            .with_dense_vectors(false)
            .real_vector(vec![1., 2.]);

        assert!(matches!(dense, Value::Product(ProductValue::Dense(_))));
        assert!(matches!(generic, Value::Product(ProductValue::Vector(_))));
        assert_eq!(dense, generic);
    }

    #[test]
    fn install_first_wins() {
        let first = ValueFactory::global().clone();
        let rejected = ValueFactory::new().with_tolerance(0.25).unwrap();
        assert_eq!(ValueFactory::install(rejected.clone()), Err(rejected));
        assert_eq!(ValueFactory::global(), &first);
    }
}
