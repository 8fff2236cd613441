//! Operator tags and variable assignments.
//!
//! Binary nodes carry a [`BinOp`], flattened n-ary nodes carry a [`NaryOp`].
//! Keeping the two tag types apart means an n-ary `Implies` or `Iff` cannot be
//! constructed at all: only the associative connectives can be flattened.

use std::collections::HashMap;
use std::fmt;

/// A mapping from variable names to truth values.
///
/// Evaluation requires the assignment to be total over the scope of the formula.
pub type Assignment = HashMap<String, bool>;

/// Binary logical connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    /// `X & Y`
    And,
    /// `X | Y`
    Or,
    /// `X -> Y`
    Implies,
    /// `X <-> Y`
    Iff,
}

impl BinOp {
    /// Applies the connective to two truth values.
    pub fn apply(self, x: bool, y: bool) -> bool {
        match self {
            BinOp::And => x && y,
            BinOp::Or => x || y,
            BinOp::Implies => !x || y,
            BinOp::Iff => (!x && !y) || (x && y),
        }
    }

    /// Infix symbol used in the canonical signature.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Implies => "->",
            BinOp::Iff => "<->",
        }
    }

    /// Returns the n-ary counterpart of an associative connective.
    pub fn as_nary(self) -> Option<NaryOp> {
        match self {
            BinOp::And => Some(NaryOp::And),
            BinOp::Or => Some(NaryOp::Or),
            BinOp::Implies | BinOp::Iff => None,
        }
    }

    /// Whether the operands may be swapped.
    pub fn is_commutative(self) -> bool {
        !matches!(self, BinOp::Implies)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Associative connective of a flattened clause sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NaryOp {
    And,
    Or,
}

impl NaryOp {
    /// Value of the empty clause sequence: `true` for And, `false` for Or.
    pub fn identity(self) -> bool {
        match self {
            NaryOp::And => true,
            NaryOp::Or => false,
        }
    }

    /// The De Morgan dual.
    pub fn flip(self) -> Self {
        match self {
            NaryOp::And => NaryOp::Or,
            NaryOp::Or => NaryOp::And,
        }
    }
}

impl From<NaryOp> for BinOp {
    fn from(op: NaryOp) -> Self {
        match op {
            NaryOp::And => BinOp::And,
            NaryOp::Or => BinOp::Or,
        }
    }
}

impl fmt::Display for NaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BinOp::from(*self).symbol())
    }
}
