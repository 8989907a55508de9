//! Elementwise arithmetic for indexed containers such as vectors, matrices and tensors.
//!
//! A container implements [ProductArithmetic] by providing three hooks: a shape descriptor,
//! an ordered traversal of its components and a factory that creates an instance of a given
//! shape. All elementwise operations, equality and hashing are derived from these hooks.
//!
//! [ProductValue] collects the containers that can appear in a [Value], including the
//! fast [DenseVector] representation, which is promoted to a generic [Vector] when
//! it meets an operand of a different representation.

pub mod dense;
pub mod matrix;
pub mod tensor;
pub mod vector;

use std::{
    convert::Infallible,
    fmt::{Debug, Display, Formatter},
    hash::{BuildHasher, Hash, Hasher},
};

use ahash::RandomState;
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    domains::{value::Value, Arithmetic},
    error::{ArithmeticError, Result},
};

use self::{dense::DenseVector, matrix::Matrix, tensor::Tensor, vector::Vector};

/// A hasher with fixed seeds, so that equal components hash equally in all containers.
fn component_hasher() -> RandomState {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}

/// The shared engine of all indexed containers.
///
/// Two containers are compatible iff their shapes are equal. Containers of the same
/// shape must traverse their components in the same order.
pub trait ProductArithmetic: Sized + Clone {
    type Element: Arithmetic;
    type Shape: Clone + PartialEq + Debug;

    fn shape(&self) -> Self::Shape;

    /// The components in traversal order.
    fn components(&self) -> impl Iterator<Item = &Self::Element>;

    /// The components in the same order as [ProductArithmetic::components].
    fn components_mut(&mut self) -> impl Iterator<Item = &mut Self::Element>;

    /// Create a container of the given shape with every component set to `fill`.
    fn instantiate(shape: &Self::Shape, fill: &Self::Element) -> Self;

    /// Structural equality: equal shapes and pairwise equal components.
    fn product_eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .components()
                .zip(other.components())
                .all(|(a, b)| a == b)
    }

    /// The XOR of all component hashes.
    fn product_hash(&self) -> u64
    where
        Self::Element: Hash,
    {
        let hasher = component_hasher();
        self.components()
            .fold(0, |acc, c| acc ^ BuildHasher::hash_one(&hasher, c))
    }

    /// Apply `op` to every pair of components of two containers of the same shape.
    fn zip_with<E>(
        &self,
        other: &Self,
        mut op: impl FnMut(&Self::Element, &Self::Element) -> std::result::Result<Self::Element, E>,
    ) -> std::result::Result<Self, E>
    where
        E: From<ArithmeticError>,
    {
        let shape = self.shape();
        let other_shape = other.shape();
        if shape != other_shape {
            return Err(ArithmeticError::shape_mismatch(shape, other_shape).into());
        }

        let Some(fill) = self.components().next().map(|c| c.zero()) else {
            return Ok(self.clone());
        };

        let mut res = Self::instantiate(&shape, &fill);
        {
            let mut lhs = self.components();
            let mut rhs = other.components();
            let mut target = res.components_mut();
            loop {
                match (lhs.next(), rhs.next(), target.next()) {
                    (Some(a), Some(b), Some(t)) => *t = op(a, b)?,
                    (None, None, None) => break,
                    _ => panic!("Traversals of containers with shape {:?} differ in length", shape),
                }
            }
        }

        Ok(res)
    }

    /// Apply `op` to every component.
    fn map_with<E>(
        &self,
        mut op: impl FnMut(&Self::Element) -> std::result::Result<Self::Element, E>,
    ) -> std::result::Result<Self, E> {
        let shape = self.shape();
        let Some(fill) = self.components().next().map(|c| c.zero()) else {
            return Ok(self.clone());
        };

        let mut res = Self::instantiate(&shape, &fill);
        {
            let mut source = self.components();
            let mut target = res.components_mut();
            loop {
                match (source.next(), target.next()) {
                    (Some(a), Some(t)) => *t = op(a)?,
                    (None, None) => break,
                    _ => panic!("Traversals of containers with shape {:?} differ in length", shape),
                }
            }
        }

        Ok(res)
    }

    fn add_elementwise(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.add(b))
    }

    fn subtract_elementwise(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.subtract(b))
    }

    fn multiply_elementwise(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.multiply(b))
    }

    fn minus_elementwise(&self) -> Self {
        match self.map_with(|a| Ok::<_, Infallible>(a.minus())) {
            Ok(r) => r,
            Err(e) => match e {},
        }
    }

    fn zero_elementwise(&self) -> Self {
        match self.map_with(|a| Ok::<_, Infallible>(a.zero())) {
            Ok(r) => r,
            Err(e) => match e {},
        }
    }

    /// Compute `s * c` for every component `c`.
    fn scale_by(&self, s: &Self::Element) -> Result<Self> {
        self.map_with(|a| s.multiply(a))
    }

    /// The Euclidean norm of the component norms.
    fn product_norm(&self) -> f64 {
        self.components()
            .map(|c| c.norm() * c.norm())
            .sum::<f64>()
            .sqrt()
    }

    fn product_is_zero(&self) -> bool {
        self.components().all(|c| c.is_zero())
    }
}

/// The shape of a [ProductValue].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductShape {
    Vector(usize),
    Matrix(usize, usize),
    Tensor(SmallVec<[usize; 4]>),
}

/// An indexed container of values.
#[derive(Clone, Debug)]
pub enum ProductValue {
    Dense(DenseVector),
    Vector(Vector<Value>),
    Matrix(Matrix<Value>),
    Tensor(Tensor<Value>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOperation {
    pub(crate) fn apply<T: Arithmetic>(self, a: &T, b: &T) -> Result<T> {
        match self {
            BinaryOperation::Add => a.add(b),
            BinaryOperation::Subtract => a.subtract(b),
            BinaryOperation::Multiply => a.multiply(b),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            BinaryOperation::Add => "add",
            BinaryOperation::Subtract => "subtract",
            BinaryOperation::Multiply => "multiply",
        }
    }
}

impl ProductValue {
    pub fn shape(&self) -> ProductShape {
        match self {
            ProductValue::Dense(d) => ProductShape::Vector(d.len()),
            ProductValue::Vector(v) => ProductShape::Vector(v.shape()),
            ProductValue::Matrix(m) => ProductShape::Matrix(m.nrows(), m.ncols()),
            ProductValue::Tensor(t) => ProductShape::Tensor(t.shape()),
        }
    }

    /// Test if the value uses the fast dense representation.
    pub fn is_dense(&self) -> bool {
        matches!(self, ProductValue::Dense(_))
    }

    /// Convert a dense vector into a generic vector, leaving all other values as is.
    pub fn to_generic(&self) -> ProductValue {
        match self {
            ProductValue::Dense(d) => ProductValue::Vector(d.to_generic()),
            _ => self.clone(),
        }
    }

    pub(crate) fn binary(&self, other: &Self, op: BinaryOperation) -> Result<ProductValue> {
        let compatible = match (self, other, op) {
            (ProductValue::Matrix(a), ProductValue::Matrix(b), BinaryOperation::Multiply) => {
                a.ncols() == b.nrows()
            }
            _ => self.shape() == other.shape(),
        };
        if !compatible {
            return Err(ArithmeticError::shape_mismatch(self.shape(), other.shape()));
        }

        match (self, other) {
            (ProductValue::Dense(a), ProductValue::Dense(b)) => Ok(ProductValue::Dense(match op {
                BinaryOperation::Add => a.add(b)?,
                BinaryOperation::Subtract => a.subtract(b)?,
                BinaryOperation::Multiply => a.multiply_elementwise(b)?,
            })),
            (ProductValue::Dense(a), _) => {
                trace!("Promoting dense vector for {}", op.name());
                ProductValue::Vector(a.to_generic()).binary(other, op)
            }
            (_, ProductValue::Dense(b)) => {
                trace!("Promoting dense vector for {}", op.name());
                self.binary(&ProductValue::Vector(b.to_generic()), op)
            }
            (ProductValue::Vector(a), ProductValue::Vector(b)) => {
                Ok(ProductValue::Vector(op.apply(a, b)?))
            }
            (ProductValue::Matrix(a), ProductValue::Matrix(b)) => {
                Ok(ProductValue::Matrix(op.apply(a, b)?))
            }
            (ProductValue::Tensor(a), ProductValue::Tensor(b)) => {
                Ok(ProductValue::Tensor(op.apply(a, b)?))
            }
            _ => Err(ArithmeticError::shape_mismatch(self.shape(), other.shape())),
        }
    }

    /// Multiply every component by the scalar value `s`.
    ///
    /// Dense vectors stay dense when `s` is a real number.
    pub fn scale_by(&self, s: &Value) -> Result<ProductValue> {
        Ok(match self {
            ProductValue::Dense(d) => match s.to_real() {
                Some(f) => ProductValue::Dense(d.scale(f)),
                None => {
                    trace!("Promoting dense vector for scaling by {}", s);
                    ProductValue::Vector(d.to_generic().scale_by(s)?)
                }
            },
            ProductValue::Vector(v) => ProductValue::Vector(v.scale_by(s)?),
            ProductValue::Matrix(m) => ProductValue::Matrix(m.scale_by(s)?),
            ProductValue::Tensor(t) => ProductValue::Tensor(t.scale_by(s)?),
        })
    }
}

impl PartialEq for ProductValue {
    /// Dense and generic vectors with equal components are equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProductValue::Dense(a), ProductValue::Dense(b)) => a == b,
            (ProductValue::Dense(a), ProductValue::Vector(b))
            | (ProductValue::Vector(b), ProductValue::Dense(a)) => a.to_generic() == *b,
            (ProductValue::Vector(a), ProductValue::Vector(b)) => a == b,
            (ProductValue::Matrix(a), ProductValue::Matrix(b)) => a == b,
            (ProductValue::Tensor(a), ProductValue::Tensor(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ProductValue {}

impl Hash for ProductValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ProductValue::Dense(d) => {
                0u8.hash(state);
                d.to_generic().product_hash().hash(state);
            }
            ProductValue::Vector(v) => {
                0u8.hash(state);
                v.product_hash().hash(state);
            }
            ProductValue::Matrix(m) => {
                1u8.hash(state);
                m.product_hash().hash(state);
            }
            ProductValue::Tensor(t) => {
                2u8.hash(state);
                t.product_hash().hash(state);
            }
        }
    }
}

impl Display for ProductValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductValue::Dense(d) => Display::fmt(d, f),
            ProductValue::Vector(v) => Display::fmt(v, f),
            ProductValue::Matrix(m) => Display::fmt(m, f),
            ProductValue::Tensor(t) => Display::fmt(t, f),
        }
    }
}

impl Arithmetic for ProductValue {
    fn zero(&self) -> Self {
        match self {
            ProductValue::Dense(d) => ProductValue::Dense(d.zero()),
            ProductValue::Vector(v) => ProductValue::Vector(v.zero()),
            ProductValue::Matrix(m) => ProductValue::Matrix(m.zero()),
            ProductValue::Tensor(t) => ProductValue::Tensor(t.zero()),
        }
    }

    fn one(&self) -> Result<Self> {
        match self {
            ProductValue::Matrix(m) => Ok(ProductValue::Matrix(m.one()?)),
            _ => Err(ArithmeticError::unsupported("one", self.type_name())),
        }
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.binary(other, BinaryOperation::Add)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.binary(other, BinaryOperation::Subtract)
    }

    fn minus(&self) -> Self {
        match self {
            ProductValue::Dense(d) => ProductValue::Dense(d.minus()),
            ProductValue::Vector(v) => ProductValue::Vector(v.minus()),
            ProductValue::Matrix(m) => ProductValue::Matrix(m.minus()),
            ProductValue::Tensor(t) => ProductValue::Tensor(t.minus()),
        }
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        self.binary(other, BinaryOperation::Multiply)
    }

    fn inverse(&self) -> Result<Self> {
        match self {
            ProductValue::Matrix(m) => Ok(ProductValue::Matrix(m.inverse()?)),
            _ => Err(ArithmeticError::unsupported("inverse", self.type_name())),
        }
    }

    fn norm(&self) -> f64 {
        match self {
            ProductValue::Dense(d) => d.norm(),
            ProductValue::Vector(v) => v.norm(),
            ProductValue::Matrix(m) => m.norm(),
            ProductValue::Tensor(t) => t.norm(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            ProductValue::Dense(d) => d.is_zero(),
            ProductValue::Vector(v) => v.is_zero(),
            ProductValue::Matrix(m) => m.is_zero(),
            ProductValue::Tensor(t) => t.is_zero(),
        }
    }

    fn is_one(&self) -> bool {
        match self {
            ProductValue::Matrix(m) => m.is_one(),
            _ => false,
        }
    }

    fn type_name(&self) -> String {
        match self {
            ProductValue::Dense(d) => format!("dense vector of length {}", d.len()),
            ProductValue::Vector(v) => v.type_name(),
            ProductValue::Matrix(m) => m.type_name(),
            ProductValue::Tensor(t) => t.type_name(),
        }
    }
}
