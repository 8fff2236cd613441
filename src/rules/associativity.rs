//! Associativity: `(A & B) & C = A & (B & C) = A & B & C`, likewise for `|`.

use crate::node::Node;
use crate::types::NaryOp;

/// Folds immediate children with the same connective into one n-ary node.
///
/// Applies to binary and n-ary conjunctions and disjunctions. Only one level
/// is flattened; children with a different connective are kept as clauses.
pub fn combine(f: Node) -> (Node, bool) {
    match f {
        Node::Binary(op, x, y) => match op.as_nary() {
            Some(nary) => {
                let mut clauses = Vec::new();
                extend_clauses(&mut clauses, *x, nary);
                extend_clauses(&mut clauses, *y, nary);
                (Node::Nary(nary, clauses), true)
            }
            None => (Node::Binary(op, x, y), false),
        },
        Node::Nary(op, children) => {
            let mut clauses = Vec::with_capacity(children.len());
            for child in children {
                extend_clauses(&mut clauses, child, op);
            }
            (Node::Nary(op, clauses), true)
        }
        _ => (f, false),
    }
}

fn extend_clauses(clauses: &mut Vec<Node>, node: Node, op: NaryOp) {
    match node {
        Node::Binary(inner, x, y) if inner.as_nary() == Some(op) => {
            clauses.push(*x);
            clauses.push(*y);
        }
        Node::Nary(inner, children) if inner == op => clauses.extend(children),
        _ => clauses.push(node),
    }
}

/// Rebuilds an n-ary node as a right-nested chain of binary nodes.
///
/// No clauses yield the identity constant, a single clause is unwrapped.
pub fn split_nary(f: Node) -> (Node, bool) {
    match f {
        Node::Nary(op, clauses) => {
            let mut rest = clauses.into_iter().rev();
            let split = match rest.next() {
                None => Node::Const(op.identity()),
                Some(last) => rest.fold(last, |acc, clause| Node::binary(op.into(), clause, acc)),
            };
            (split, true)
        }
        _ => (f, false),
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

    fn clause_count(f: &Node, op: NaryOp) -> usize {
        match f {
            Node::Nary(actual, clauses) if *actual == op => clauses.len(),
            _ => panic!("expected n-ary {:?}, got {}", op, f),
        }
    }

    #[test]
    fn test_combine_left_nested_and() {
        let f = Node::and(Node::and(v("A"), v("B")), v("C"));
        let (result, ok) = combine(f.clone());
        assert!(ok);
        assert_eq!(clause_count(&result, NaryOp::And), 3);
        assert_eq!(result.signature(), "(A & B & C)");
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_combine_absorbs_nary_child() {
        let f = Node::and(v("A"), Node::conjunction([v("B"), v("C"), v("D")]));
        let (result, ok) = combine(f.clone());
        assert!(ok);
        assert_eq!(clause_count(&result, NaryOp::And), 4);
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_combine_nary_parent() {
        // A & (B & C) & D
        let f = Node::conjunction([v("A"), Node::and(v("B"), v("C")), v("D")]);
        let (result, ok) = combine(f.clone());
        assert!(ok);
        assert_eq!(clause_count(&result, NaryOp::And), 4);
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_combine_keeps_other_operator_opaque() {
        let f = Node::and(Node::or(v("A"), v("C")), Node::or(v("B"), v("C")));
        let (result, ok) = combine(f.clone());
        assert!(ok);
        assert_eq!(clause_count(&result, NaryOp::And), 2);
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_combine_or() {
        let f = Node::or(v("A"), Node::or(v("B"), Node::disjunction([v("C"), v("D")])));
        let (result, ok) = combine(f.clone());
        assert!(ok);
        // Only the immediate child is folded.
        assert_eq!(clause_count(&result, NaryOp::Or), 3);
        assert_eq!(result.signature(), "(A | B | (C | D))");
        assert!(is_equiv(&f, &result));
    }

    #[test]
    fn test_combine_does_not_apply() {
        for f in [v("A"), Node::implies(v("A"), v("B")), Node::not(Node::and(v("A"), v("B")))] {
            let (result, ok) = combine(f.clone());
            assert!(!ok);
            assert_eq!(result, f);
        }
    }

    #[test]
    fn test_split_nary() {
        let f = Node::conjunction([v("A"), v("B"), v("C")]);
        let (result, ok) = split_nary(f.clone());
        assert!(ok);
        assert_eq!(result.signature(), "(A & (B & C))");
        assert!(is_equiv(&f, &result));

        let f = Node::disjunction([v("A"), v("B")]);
        let (result, ok) = split_nary(f);
        assert!(ok);
        assert_eq!(result, Node::or(v("A"), v("B")));
    }

    #[test]
    fn test_split_nary_degenerate() {
        assert_eq!(split_nary(Node::conjunction([])), (Node::top(), true));
        assert_eq!(split_nary(Node::disjunction([])), (Node::bottom(), true));
        assert_eq!(split_nary(Node::disjunction([v("A")])), (v("A"), true));
        assert_eq!(split_nary(v("A")), (v("A"), false));
    }

    #[test]
    fn test_combine_then_split_round_trip() {
        let f = Node::and(Node::and(v("A"), v("B")), v("C"));
        let (combined, _) = combine(f.clone());
        let (split, _) = split_nary(combined);
        assert_eq!(split.signature(), "(A & (B & C))");
        assert!(is_equiv(&f, &split));
    }
}
