//! Distributivity: `A & (B | C) = (A & B) | (A & C)` and its dual.

use crate::node::Node;

/// Multiplies the left operand into the right one.
///
/// Applies to a binary conjunction whose right operand is a (binary or n-ary)
/// disjunction, and to a binary disjunction whose right operand is a
/// conjunction. The left operand is never inspected: `(B | C) & A` is left
/// unchanged.
pub fn multiply_out(f: Node) -> (Node, bool) {
    let (op, x, y) = match f {
        Node::Binary(op, x, y) => (op, x, y),
        _ => return (f, false),
    };
    let Some(outer) = op.as_nary() else {
        return (Node::Binary(op, x, y), false);
    };
    let inner = outer.flip();
    match *y {
        Node::Binary(y_op, y1, y2) if y_op.as_nary() == Some(inner) => {
            let left = Node::binary(op, (*x).clone(), *y1);
            let right = Node::binary(op, *x, *y2);
            (Node::binary(y_op, left, right), true)
        }
        Node::Nary(y_op, clauses) if y_op == inner => {
            let clauses = clauses.into_iter().map(|c| Node::binary(op, (*x).clone(), c)).collect();
            (Node::Nary(inner, clauses), true)
        }
        other => (Node::Binary(op, x, Box::new(other)), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::sat::is_equiv;

    fn v(name: &str) -> Node {
        Node::var(name)
    }

    #[test]
    fn test_multiply_out_and_over_or() {
        let f = Node::and(v("A"), Node::or(v("B"), v("C")));
        let (result, ok) = multiply_out(f.clone());
        assert!(ok);
        assert_eq!(result.signature(), "((A & B) | (A & C))");
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_multiply_out_or_over_and() {
        let f = Node::or(v("A"), Node::and(v("B"), v("C")));
        let (result, ok) = multiply_out(f.clone());
        assert!(ok);
        assert_eq!(result.signature(), "((A | B) & (A | C))");
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_multiply_out_nary() {
        let f = Node::and(v("A"), Node::disjunction([v("B"), v("C"), v("D")]));
        let (result, ok) = multiply_out(f.clone());
        assert!(ok);
        assert_eq!(result.signature(), "((A & B) | (A & C) | (A & D))");
        assert!(is_equiv(&f, &result));

        let f = Node::or(Node::not(v("A")), Node::conjunction([v("B"), v("C")]));
        let (result, ok) = multiply_out(f.clone());
        assert!(ok);
        assert_eq!(result.signature(), "((!A | B) & (!A | C))");
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_multiply_out_only_checks_right_operand() {
        let f = Node::and(Node::or(v("B"), v("C")), v("A"));
        let (result, ok) = multiply_out(f.clone());
        assert!(!ok);
        assert_eq!(result, f);
    }

    #[test]
    fn test_multiply_out_does_not_apply() {
        for f in [
            Node::and(v("A"), Node::and(v("B"), v("C"))),
            Node::or(v("A"), Node::disjunction([v("B"), v("C")])),
            Node::implies(v("A"), Node::or(v("B"), v("C"))),
            Node::conjunction([v("A"), Node::or(v("B"), v("C"))]),
            v("A"),
        ] {
            let (result, ok) = multiply_out(f.clone());
            assert!(!ok);
            assert_eq!(result, f);
        }
    }
}
