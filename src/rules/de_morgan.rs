//! De Morgan's laws: `!(A & B) = !A | !B` and `!(A | B) = !A & !B`.

use crate::node::Node;
use crate::rules::junction;
use crate::types::NaryOp;

/// Strips one negation, or adds one if there is none.
fn toggle_negation(f: Node) -> Node {
    match f {
        Node::Not(x) => *x,
        _ => Node::not(f),
    }
}

/// Distributes a negation over a conjunction or disjunction.
///
/// The n-ary case negates every clause and flips the connective.
pub fn de_morgan_expand(f: Node) -> (Node, bool) {
    let inner = match f {
        Node::Not(inner) => inner,
        _ => return (f, false),
    };
    match *inner {
        Node::Binary(op, x, y) => match op.as_nary() {
            Some(nary) => (Node::binary(nary.flip().into(), Node::not(*x), Node::not(*y)), true),
            None => (Node::not(Node::Binary(op, x, y)), false),
        },
        Node::Nary(op, clauses) => (Node::Nary(op.flip(), clauses.into_iter().map(Node::not).collect()), true),
        other => (Node::not(other), false),
    }
}

/// Like [`de_morgan_expand`], but also fires on a bare conjunction or
/// disjunction by reading it as its double negation: `A & B = !(!A | !B)`.
pub fn de_morgan_expand_eager(f: Node) -> (Node, bool) {
    if matches!(f, Node::Not(_)) {
        return de_morgan_expand(f);
    }
    if junction(&f).is_none() {
        return (f, false);
    }
    let (expanded, _) = de_morgan_expand(Node::not(f));
    (Node::not(expanded), true)
}

/// Pulls the negations of a conjunction or disjunction of negated clauses
/// outward: `!A & !B` becomes `!(A | B)`.
///
/// Fails unless every clause is a negation. An empty n-ary node contracts
/// to the negated dual identity.
pub fn de_morgan_contract(f: Node) -> (Node, bool) {
    let Some(op) = junction(&f) else {
        return (f, false);
    };
    let all_negated = f.children().iter().all(|c| matches!(c, Node::Not(_)));
    if !all_negated {
        return (f, false);
    }
    (contract(f, op), true)
}

/// Like [`de_morgan_contract`], but double-negates clauses that are not
/// negations, so it applies to every conjunction or disjunction.
pub fn de_morgan_contract_eager(f: Node) -> (Node, bool) {
    match junction(&f) {
        Some(op) => (contract(f, op), true),
        None => (f, false),
    }
}

fn contract(f: Node, op: NaryOp) -> Node {
    let dual = op.flip();
    match f {
        Node::Binary(_, x, y) => Node::not(Node::binary(dual.into(), toggle_negation(*x), toggle_negation(*y))),
        Node::Nary(_, clauses) => Node::not(Node::Nary(dual, clauses.into_iter().map(toggle_negation).collect())),
        _ => f,
    }
}
