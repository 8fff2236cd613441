//! Idempotency: `A & A = A` and `A | A = A`.

use std::collections::HashSet;

use crate::node::Node;

/// Removes duplicate clauses from an n-ary node.
///
/// Clauses are compared by signature, so only syntactically identical
/// clauses are merged. The first occurrence of every signature is kept,
/// in its original position.
pub fn remove_idempotency(f: Node) -> (Node, bool) {
    match f {
        Node::Nary(op, clauses) => {
            let mut seen = HashSet::with_capacity(clauses.len());
            let clauses = clauses.into_iter().filter(|c| seen.insert(c.signature())).collect();
            (Node::Nary(op, clauses), true)
        }
        _ => (f, false),
    }
}
