//! Symbols and deferred symbolic compositions.
//!
//! A symbol has no numeric value. Combining it with other values yields a
//! [Symbolic::Composition] that records the operator and its operands, but is never
//! evaluated. Only trivial identities are applied before a composition is built:
//! - `x * 1 = x`, `x * 0 = 0` and `x * -1 = -x`
//! - `x + 0 = x` and `x - 0 = x`
//! - `x / 1 = x`, while `x / 0` is an error
//! - `x ^ 1 = x`
//!
//! Code that is generic over [Value] must therefore tolerate receiving a
//! symbolic value where it would expect a number.

use std::fmt::{Display, Formatter};

use smartstring::alias::String as SmartString;

use crate::error::{ArithmeticError, Result};

use super::{value::Value, Arithmetic};

/// A named quantity without a numeric value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: SmartString,
}

impl Symbol {
    pub fn new(name: &str) -> Symbol {
        Symbol { name: name.into() }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The operation recorded in a deferred composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Minus,
    Inverse,
    Power,
}

/// A symbol, or an unevaluated operation involving at least one symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbolic {
    Symbol(Symbol),
    Composition {
        operator: Operator,
        operands: Vec<Value>,
    },
}

impl From<Symbol> for Symbolic {
    fn from(value: Symbol) -> Self {
        Symbolic::Symbol(value)
    }
}

impl Symbolic {
    /// Record `operator` applied to `operands`, without evaluating it.
    pub fn compose(operator: Operator, operands: Vec<Value>) -> Value {
        Value::Symbolic(Symbolic::Composition { operator, operands })
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Symbolic::Symbol(s) => Some(s),
            Symbolic::Composition { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Symbolic::Symbol(_) => None,
            Symbolic::Composition { operator, .. } => Some(*operator),
        }
    }

    pub fn operands(&self) -> &[Value] {
        match self {
            Symbolic::Symbol(_) => &[],
            Symbolic::Composition { operands, .. } => operands,
        }
    }

    pub(crate) fn add(a: &Value, b: &Value) -> Value {
        if !b.is_symbolic() && b.is_zero() {
            return a.clone();
        }
        if !a.is_symbolic() && a.is_zero() {
            return b.clone();
        }

        Symbolic::compose(Operator::Add, vec![a.clone(), b.clone()])
    }

    pub(crate) fn subtract(a: &Value, b: &Value) -> Value {
        if !b.is_symbolic() && b.is_zero() {
            return a.clone();
        }

        Symbolic::compose(Operator::Subtract, vec![a.clone(), b.clone()])
    }

    pub(crate) fn multiply(a: &Value, b: &Value) -> Value {
        let (symbolic, other) = if a.is_symbolic() { (a, b) } else { (b, a) };

        if !other.is_symbolic() {
            if other.is_one() {
                return symbolic.clone();
            }
            if other.is_zero() {
                return other.clone();
            }
            if other.minus().is_one() {
                return Symbolic::minus(symbolic);
            }
        }

        Symbolic::compose(Operator::Multiply, vec![a.clone(), b.clone()])
    }

    pub(crate) fn divide(a: &Value, b: &Value) -> Result<Value> {
        if !b.is_symbolic() {
            if b.is_zero() {
                return Err(ArithmeticError::DivisionByZero);
            }
            if b.is_one() {
                return Ok(a.clone());
            }
        }

        Ok(Symbolic::compose(
            Operator::Divide,
            vec![a.clone(), b.clone()],
        ))
    }

    pub(crate) fn minus(a: &Value) -> Value {
        Symbolic::compose(Operator::Minus, vec![a.clone()])
    }

    pub(crate) fn inverse(a: &Value) -> Value {
        Symbolic::compose(Operator::Inverse, vec![a.clone()])
    }

    pub(crate) fn power(a: &Value, b: &Value) -> Value {
        if !b.is_symbolic() && b.is_one() {
            return a.clone();
        }

        Symbolic::compose(Operator::Power, vec![a.clone(), b.clone()])
    }
}

impl Display for Symbolic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (operator, operands) = match self {
            Symbolic::Symbol(s) => return Display::fmt(s, f),
            Symbolic::Composition { operator, operands } => (operator, operands),
        };

        match (operator, operands.as_slice()) {
            (Operator::Minus, [a]) => write!(f, "-({})", a),
            (Operator::Inverse, [a]) => write!(f, "({})^-1", a),
            (Operator::Add, [a, b]) => write!(f, "({}+{})", a, b),
            (Operator::Subtract, [a, b]) => write!(f, "({}-{})", a, b),
            (Operator::Multiply, [a, b]) => write!(f, "({}*{})", a, b),
            (Operator::Divide, [a, b]) => write!(f, "({}/{})", a, b),
            (Operator::Power, [a, b]) => write!(f, "({})^({})", a, b),
            (op, args) => {
                write!(f, "{:?}(", op)?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", a)?;
                }
                f.write_str(")")
            }
        }
    }
}
