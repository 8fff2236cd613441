//! Catalog of local rewrite rules.
//!
//! Every rule inspects a node and its immediate children only. It returns the
//! rewritten node together with `true`, or the input node unchanged together
//! with `false` when the node does not have the required shape. Rules that
//! report success always return a formula equivalent to their input.
//!
//! Whole-tree rewriting is done by handing a rule to
//! [`traverse`][crate::traversal::traverse].

pub mod associativity;
pub mod commutativity;
pub mod de_morgan;
pub mod distributivity;
pub mod double_negation;
pub mod idempotency;
pub mod substitution;

pub use associativity::{combine, split_nary};
pub use commutativity::commute;
pub use de_morgan::{de_morgan_contract, de_morgan_contract_eager, de_morgan_expand, de_morgan_expand_eager};
pub use distributivity::multiply_out;
pub use double_negation::{add_double_negation, remove_double_negation};
pub use idempotency::remove_idempotency;
pub use substitution::{remove_iff, remove_implies, substitute_by_iff, substitute_by_implies};

use crate::node::Node;
use crate::types::NaryOp;

/// The associative connective at the top of `f`, if it is a (binary or n-ary)
/// conjunction or disjunction.
pub(crate) fn junction(f: &Node) -> Option<NaryOp> {
    match f {
        Node::Binary(op, _, _) => op.as_nary(),
        Node::Nary(op, _) => Some(*op),
        _ => None,
    }
}
