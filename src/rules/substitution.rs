//! Introduction and elimination of `->` and `<->`.

use crate::node::Node;
use crate::types::BinOp;

/// Rewrites `!A | B` or `B | !A` to `A -> B`.
///
/// When both operands are negated, the left one becomes the antecedent.
pub fn substitute_by_implies(f: Node) -> (Node, bool) {
    match f {
        Node::Binary(BinOp::Or, x, y) => match (*x, *y) {
            (Node::Not(a), b) => (Node::implies(*a, b), true),
            (b, Node::Not(a)) => (Node::implies(*a, b), true),
            (x, y) => (Node::or(x, y), false),
        },
        _ => (f, false),
    }
}

/// Rewrites `(A -> B) & (B -> A)` to `A <-> B`.
///
/// The two implications are matched by signature: the antecedent of each must
/// be syntactically equal to the consequent of the other. Run
/// [`substitute_by_implies`] over the tree first to expose the implications.
pub fn substitute_by_iff(f: Node) -> (Node, bool) {
    if let Node::Binary(BinOp::And, x, y) = &f {
        if let (Node::Binary(BinOp::Implies, a1, b1), Node::Binary(BinOp::Implies, a2, b2)) = (x.as_ref(), y.as_ref()) {
            if a1.signature() == b2.signature() && b1.signature() == a2.signature() {
                return (Node::Binary(BinOp::Iff, a1.clone(), b1.clone()), true);
            }
        }
    }
    (f, false)
}

/// Rewrites `A -> B` to `!A | B`.
pub fn remove_implies(f: Node) -> (Node, bool) {
    match f {
        Node::Binary(BinOp::Implies, x, y) => (Node::or(Node::not(*x), *y), true),
        _ => (f, false),
    }
}

/// Rewrites `A <-> B` to `(!A & !B) | (A & B)`.
pub fn remove_iff(f: Node) -> (Node, bool) {
    match f {
        Node::Binary(BinOp::Iff, x, y) => {
            let both_false = Node::and(Node::not((*x).clone()), Node::not((*y).clone()));
            let both_true = Node::and(*x, *y);
            (Node::or(both_false, both_true), true)
        }
        _ => (f, false),
    }
}
