//! Fixed compositions of rewrite rules.

use log::debug;
use rand::Rng;

use crate::node::Node;
use crate::rules::{
    combine, de_morgan_expand_eager, remove_double_negation, remove_idempotency, remove_iff, remove_implies,
    split_nary, substitute_by_iff, substitute_by_implies,
};
use crate::traversal::{traverse, traverse_probabilistic};

/// Parameters of [`de_morgan_iteration_with`].
#[derive(Debug, Clone)]
pub struct IterationConfig {
    /// Number of expansion rounds. Always performed in full.
    pub rounds: usize,
    /// Per-node probability of attempting an eager De Morgan expansion.
    /// Must be in `[0, 1)`: at one the expansion of every junction rebuilds a
    /// junction below itself and the walk never ends.
    pub probability: f64,
}

impl IterationConfig {
    pub fn new(rounds: usize, probability: f64) -> Self {
        Self { rounds, probability }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self::new(5, 0.5)
    }
}

/// Cancels double negations, flattens associative chains and removes
/// duplicate clauses.
pub fn simplify(f: Node) -> Node {
    let f = traverse(f, remove_double_negation);
    let f = traverse(f, combine);
    let f = traverse(f, remove_idempotency);
    debug!("simplify: {}", f);
    f
}

/// Reintroduces `->` and `<->` into a formula written with `&`, `|` and `!`.
///
/// N-ary nodes are split into binary chains first, since the substitutions
/// only match binary shapes.
pub fn substitute_arrows(f: Node) -> Node {
    let f = traverse(f, split_nary);
    let f = traverse(f, substitute_by_implies);
    let f = traverse(f, substitute_by_iff);
    debug!("substitute_arrows: {}", f);
    f
}

/// Eliminates arrows, simplifies, and then randomly pushes negations around
/// with eager De Morgan expansion for the default number of rounds.
pub fn de_morgan_iteration<R>(f: Node, rng: &mut R) -> Node
where
    R: Rng + ?Sized,
{
    de_morgan_iteration_with(f, &IterationConfig::default(), rng)
}

/// Like [`de_morgan_iteration`] with explicit round count and probability.
///
/// There is no convergence check: exactly `config.rounds` rounds run.
///
/// # Panics
///
/// Panics if `config.probability` is not in `[0, 1)`.
pub fn de_morgan_iteration_with<R>(f: Node, config: &IterationConfig, rng: &mut R) -> Node
where
    R: Rng + ?Sized,
{
    assert!(
        (0.0..1.0).contains(&config.probability),
        "Probability must be in [0, 1), but is {}",
        config.probability
    );

    let f = traverse(f, remove_iff);
    let f = traverse(f, remove_implies);
    let f = simplify(f);
    let mut f = traverse(f, split_nary);

    for round in 0..config.rounds {
        f = traverse_probabilistic(f, de_morgan_expand_eager, config.probability, rng);
        f = traverse(f, remove_double_negation);
        debug!("de_morgan_iteration: round {} -> {}", round, f);
    }

    f
}
