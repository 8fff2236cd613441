//! Commutativity of `&`, `|` and `<->`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::node::Node;

/// Swaps the operands of a commutative binary node, or shuffles the clauses
/// of an n-ary node with a uniformly random permutation drawn from `rng`.
///
/// Implications are left untouched.
pub fn commute<R>(f: Node, rng: &mut R) -> (Node, bool)
where
    R: Rng + ?Sized,
{
    match f {
        Node::Binary(op, x, y) if op.is_commutative() => (Node::Binary(op, y, x), true),
        Node::Nary(op, mut clauses) => {
            clauses.shuffle(rng);
            (Node::Nary(op, clauses), true)
        }
        _ => (f, false),
    }
}
