//! Whole-tree application of rewrite rules.
//!
//! Both walks are pre-order: the rule is tried on a node first, then the walk
//! descends into the children of whatever node the rule produced. The rule's
//! success flag does not influence the walk.
//!
//! Because the walk descends into the rewritten node, a rule whose output
//! contains a fresh instance of its own input shape does not terminate under
//! [`traverse`]. This covers the eager De Morgan rules, which rebuild a
//! junction one level down, and
//! [`de_morgan_contract`][crate::rules::de_morgan_contract] on an empty n-ary
//! node, which contracts `true` to `!false` and then `false` to `!true`. Such
//! rules need [`traverse_probabilistic`] with a probability below one.
//!
//! [`add_double_negation`][crate::rules::add_double_negation] is worse: each
//! success adds two fresh trials (the new inner negation and the original
//! node), so it only terminates with a probability below one half.

use log::debug;
use rand::Rng;

use crate::node::Node;

/// Applies `transform` to every node of `f`.
pub fn traverse<F>(f: Node, mut transform: F) -> Node
where
    F: FnMut(Node) -> (Node, bool),
{
    walk(f, &mut transform)
}

fn walk<F>(f: Node, transform: &mut F) -> Node
where
    F: FnMut(Node) -> (Node, bool),
{
    let (f, _) = transform(f);
    f.map_children(|child| walk(child, transform))
}

/// Applies `transform` to every node of `f` with the given probability.
///
/// Each node gets an independent Bernoulli trial drawn from `rng`.
///
/// # Panics
///
/// Panics if `probability` is not in `[0, 1]`.
pub fn traverse_probabilistic<F, R>(f: Node, mut transform: F, probability: f64, rng: &mut R) -> Node
where
    F: FnMut(Node) -> (Node, bool),
    R: Rng + ?Sized,
{
    assert!(
        (0.0..=1.0).contains(&probability),
        "Probability must be in [0, 1], but is {}",
        probability
    );
    debug!("traverse_probabilistic(f = {}, p = {})", f, probability);
    walk_probabilistic(f, &mut transform, probability, rng)
}

fn walk_probabilistic<F, R>(f: Node, transform: &mut F, probability: f64, rng: &mut R) -> Node
where
    F: FnMut(Node) -> (Node, bool),
    R: Rng + ?Sized,
{
    let f = if rng.random_bool(probability) { transform(f).0 } else { f };
    f.map_children(|child| walk_probabilistic(child, transform, probability, rng))
}
