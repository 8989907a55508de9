use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::Index,
};

use crate::{
    domains::Arithmetic,
    error::{ArithmeticError, Result},
};

use super::ProductArithmetic;

/// An n-dimensional vector.
#[derive(Clone, Debug)]
pub struct Vector<E: Arithmetic> {
    pub(crate) data: Vec<E>,
}

impl<E: Arithmetic> Vector<E> {
    /// Create a new vector from a list of components.
    pub fn new(data: Vec<E>) -> Vector<E> {
        Vector { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, rhs: &Self) -> Result<E> {
        if self.len() != rhs.len() {
            return Err(ArithmeticError::shape_mismatch(self.len(), rhs.len()));
        }

        let mut pairs = self.data.iter().zip(&rhs.data);
        let Some((a, b)) = pairs.next() else {
            return Err(ArithmeticError::IllegalArgument(
                "the scalar product of empty vectors has no ring to live in".to_owned(),
            ));
        };

        let mut res = a.multiply(b)?;
        for (a, b) in pairs {
            res = res.add(&a.multiply(b)?)?;
        }
        Ok(res)
    }
}

impl<E: Arithmetic> ProductArithmetic for Vector<E> {
    type Element = E;
    type Shape = usize;

    fn shape(&self) -> usize {
        self.data.len()
    }

    fn components(&self) -> impl Iterator<Item = &E> {
        self.data.iter()
    }

    fn components_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.data.iter_mut()
    }

    fn instantiate(shape: &usize, fill: &E) -> Self {
        Vector {
            data: vec![fill.clone(); *shape],
        }
    }
}

impl<E: Arithmetic> Index<usize> for Vector<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<E: Arithmetic> PartialEq for Vector<E> {
    fn eq(&self, other: &Self) -> bool {
        self.product_eq(other)
    }
}

impl<E: Arithmetic + Eq> Eq for Vector<E> {}

impl<E: Arithmetic + Hash> Hash for Vector<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.product_hash().hash(state);
    }
}

impl<E: Arithmetic + Display> Display for Vector<E> {
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

impl<E: Arithmetic> Arithmetic for Vector<E> {
    fn zero(&self) -> Self {
        self.zero_elementwise()
    }

    fn one(&self) -> Result<Self> {
        Err(ArithmeticError::unsupported("one", self.type_name()))
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.add_elementwise(other)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.subtract_elementwise(other)
    }

    fn minus(&self) -> Self {
        self.minus_elementwise()
    }

    /// The componentwise product.
    fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_elementwise(other)
    }

    fn norm(&self) -> f64 {
        self.product_norm()
    }

    fn is_zero(&self) -> bool {
        self.product_is_zero()
    }

    fn type_name(&self) -> String {
        format!("vector of length {}", self.len())
    }
}
