//! Double negation: `!!A = A`.

use crate::node::Node;

/// Wraps the node in two negations. Always applies.
pub fn add_double_negation(f: Node) -> (Node, bool) {
    (Node::not(Node::not(f)), true)
}

/// Unwraps `!!A` to `A`.
pub fn remove_double_negation(f: Node) -> (Node, bool) {
    let inner = match f {
        Node::Not(inner) => inner,
        _ => return (f, false),
    };
    match *inner {
        Node::Not(x) => (*x, true),
        other => (Node::not(other), false),
    }
}
