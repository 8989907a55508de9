//! A vector of machine floats that bypasses the generic value machinery.
//!
//! The dense representation only interacts with other dense vectors. Every mixed
//! operation goes through [DenseVector::to_generic] first, see
//! [ProductValue](super::ProductValue).

use std::fmt::{Display, Formatter};

use crate::{
    domains::{float::F64, scalar::Scalar, value::Value},
    error::{ArithmeticError, Result},
};

use super::vector::Vector;

/// A vector of `f64` components.
#[derive(Clone, Debug, Default)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    pub fn new(data: Vec<f64>) -> DenseVector {
        DenseVector { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Convert to a generic vector of real values.
    pub fn to_generic(&self) -> Vector<Value> {
        Vector::new(
            self.data
                .iter()
                .map(|x| Value::Scalar(Scalar::Real(F64::from(*x))))
                .collect(),
        )
    }

    /// Convert a generic vector back to the dense representation,
    /// if all of its components are real numbers.
    pub fn try_from_generic(v: &Vector<Value>) -> Option<DenseVector> {
        v.as_slice()
            .iter()
            .map(|c| match c {
                Value::Scalar(Scalar::Real(r)) => Some(r.into_inner()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(DenseVector::new)
    }

    #[inline]
    fn zip_with(&self, other: &DenseVector, op: impl Fn(f64, f64) -> f64) -> Result<DenseVector> {
        if self.len() != other.len() {
            return Err(ArithmeticError::shape_mismatch(self.len(), other.len()));
        }

        Ok(DenseVector {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| op(*a, *b))
                .collect(),
        })
    }

    pub fn add(&self, other: &DenseVector) -> Result<DenseVector> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn subtract(&self, other: &DenseVector) -> Result<DenseVector> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn multiply_elementwise(&self, other: &DenseVector) -> Result<DenseVector> {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn dot(&self, other: &DenseVector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(ArithmeticError::shape_mismatch(self.len(), other.len()));
        }

        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    pub fn scale(&self, s: f64) -> DenseVector {
        DenseVector {
            data: self.data.iter().map(|x| s * x).collect(),
        }
    }

    pub fn minus(&self) -> DenseVector {
        DenseVector {
            data: self.data.iter().map(|x| -x).collect(),
        }
    }

    pub fn zero(&self) -> DenseVector {
        DenseVector {
            data: vec![0.; self.len()],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0.)
    }

    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }
}

impl PartialEq for DenseVector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| F64::from(*a) == F64::from(*b))
    }
}

impl Display for DenseVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str(")")
    }
}
