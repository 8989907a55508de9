//! Arithmetica is a generic arithmetic layer for algebraic values.
//!
//! Every value, from integers and complex numbers to fractions, polynomials,
//! vectors, matrices and tensors, implements the same [Arithmetic](domains::Arithmetic)
//! contract. Composite operations such as subtraction, division and integer powers are
//! derived from a small set of primitives.
//!
//! For example:
//!
//! ```
//! use arithmetica::{domains::Arithmetic, factory::ValueFactory};
//!
//! let f = ValueFactory::global();
//! let x = f.symbol("x");
//! let p = f.polynomial(vec![f.integer(-1), f.integer(0), f.integer(1)]).unwrap();
//! let h = f.rational(1, 2).unwrap();
//!
//! assert_eq!(p.multiply(&h).unwrap().to_string(), "(-1/2+1/2*x^2)");
//! assert_eq!(x.multiply(&f.one()).unwrap(), x);
//! assert!(x.multiply(&f.zero()).unwrap().is_zero());
//! ```

pub mod domains;
pub mod error;
pub mod factory;
pub mod poly;
pub mod tensors;
