//! Polynomials with coefficients from any [Arithmetic](crate::domains::Arithmetic) value.

pub mod univariate;
