//! Randomized formula builders for fixtures and fuzzing.
//!
//! The builders only use the public node constructors; randomness is drawn
//! from the generator passed to each call.

use std::collections::HashMap;

use rand::Rng;

use crate::node::Node;
use crate::types::BinOp;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns `num_variables` distinct variable names.
///
/// Up to 26 variables are named `A`, `B`, ...; larger scopes use `x1`, `x2`, ...
///
/// # Panics
///
/// Panics if `num_variables` is zero.
pub fn build_scope(num_variables: usize) -> Vec<String> {
    assert!(num_variables > 0, "Number of variables must be positive");
    if num_variables <= ALPHABET.len() {
        ALPHABET.chars().take(num_variables).map(String::from).collect()
    } else {
        (1..=num_variables).map(|i| format!("x{}", i)).collect()
    }
}

fn random_variable<R>(scope: &[String], rng: &mut R) -> Node
where
    R: Rng + ?Sized,
{
    Node::var(scope[rng.random_range(0..scope.len())].clone())
}

#[derive(Debug, Copy, Clone)]
enum Operator {
    Not,
    Binary(BinOp),
}

impl Operator {
    /// Each of the five operators with equal probability.
    fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..5) {
            0 => Operator::Binary(BinOp::And),
            1 => Operator::Binary(BinOp::Or),
            2 => Operator::Binary(BinOp::Implies),
            3 => Operator::Binary(BinOp::Iff),
            _ => Operator::Not,
        }
    }
}

/// Builds random formulas over a fixed scope.
#[derive(Debug, Clone)]
pub struct RandomFormulaBuilder {
    scope: Vec<String>,
}

impl RandomFormulaBuilder {
    /// # Panics
    ///
    /// Panics if `num_variables` is zero.
    pub fn new(num_variables: usize) -> Self {
        Self {
            scope: build_scope(num_variables),
        }
    }

    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    pub fn random_variable<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        random_variable(&self.scope, rng)
    }

    /// Builds a formula with exactly `num_operators` operator nodes.
    ///
    /// The tree grows to the right: every binary operator gets a random
    /// variable as its left operand and the next operator as its right one.
    ///
    /// # Panics
    ///
    /// Panics if `num_operators` is zero.
    pub fn build<R>(&self, num_operators: usize, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        assert!(num_operators > 0, "Number of operators must be positive");
        let operators: Vec<Operator> = (0..num_operators).map(|_| Operator::random(rng)).collect();
        self.grow_or_leaf(&operators, rng)
    }

    fn grow<R>(&self, operator: Operator, rest: &[Operator], rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        match operator {
            Operator::Not => Node::not(self.grow_or_leaf(rest, rng)),
            Operator::Binary(op) => {
                let x = self.random_variable(rng);
                let y = self.grow_or_leaf(rest, rng);
                Node::binary(op, x, y)
            }
        }
    }

    fn grow_or_leaf<R>(&self, operators: &[Operator], rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        match operators.split_first() {
            Some((&operator, rest)) => self.grow(operator, rest, rng),
            None => self.random_variable(rng),
        }
    }
}

/// Builds disjunctions of conjunctions of literals.
#[derive(Debug, Clone)]
pub struct DnfBuilder {
    scope: Vec<String>,
    num_conjunctions: usize,
    num_clauses: usize,
}

impl DnfBuilder {
    /// Variables are named `x1`, `x2`, ...
    ///
    /// # Panics
    ///
    /// Panics if there are no variables or conjunctions, or if conjunctions
    /// would have fewer than two clauses.
    pub fn new(num_variables: usize, num_conjunctions: usize, num_clauses: usize) -> Self {
        assert!(num_variables > 0, "Number of variables must be positive");
        assert!(num_conjunctions > 0, "Number of conjunctions must be positive");
        assert!(num_clauses >= 2, "Non-trivial conjunctions need at least two clauses");
        Self {
            scope: (1..=num_variables).map(|i| format!("x{}", i)).collect(),
            num_conjunctions,
            num_clauses,
        }
    }

    /// A satisfiable DNF: its first conjunction never contains a variable
    /// together with its negation.
    pub fn build_sat<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        let mut conjunctions = vec![self.sat_conjunction(rng)];
        for _ in 1..self.num_conjunctions {
            conjunctions.push(self.random_conjunction(rng));
        }
        Node::disjunction(conjunctions)
    }

    /// An unsatisfiable DNF: every conjunction contains some `x` and `!x`.
    pub fn build_unsat<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        Node::disjunction((0..self.num_conjunctions).map(|_| self.unsat_conjunction(rng)))
    }

    fn random_literal<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        let variable = random_variable(&self.scope, rng);
        if rng.random_bool(0.5) {
            variable
        } else {
            Node::not(variable)
        }
    }

    fn random_conjunction<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        Node::conjunction((0..self.num_clauses).map(|_| self.random_literal(rng)))
    }

    fn sat_conjunction<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        let mut polarity: HashMap<String, bool> = HashMap::new();
        let mut clauses = Vec::with_capacity(self.num_clauses);
        for _ in 0..self.num_clauses {
            let name = self.scope[rng.random_range(0..self.scope.len())].clone();
            let positive = *polarity.entry(name.clone()).or_insert_with(|| rng.random_bool(0.5));
            let variable = Node::var(name);
            clauses.push(if positive { variable } else { Node::not(variable) });
        }
        Node::conjunction(clauses)
    }

    fn unsat_conjunction<R>(&self, rng: &mut R) -> Node
    where
        R: Rng + ?Sized,
    {
        let variable = random_variable(&self.scope, rng);
        let mut clauses = vec![variable.clone(), Node::not(variable)];
        for _ in 2..self.num_clauses {
            clauses.push(self.random_literal(rng));
        }
        Node::conjunction(clauses)
    }
}

/// Builds a question formula together with an equivalent and a
/// non-equivalent variant of it.
#[derive(Debug, Clone)]
pub struct EquivalentFormulaBuilder {
    scope: Vec<String>,
    base: Node,
    appendix: Node,
}

impl EquivalentFormulaBuilder {
    /// The base formula is a random formula over all but the last variable;
    /// the appendix is the last variable, independent of the base.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` is less than two.
    pub fn new<R>(num_variables: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(num_variables >= 2, "Number of variables must be at least 2");
        let scope = build_scope(num_variables);
        let base = RandomFormulaBuilder::new(num_variables - 1).build(6, rng);
        let appendix = Node::var(scope[scope.len() - 1].clone());
        Self { scope, base, appendix }
    }

    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    /// `appendix & base`
    pub fn question(&self) -> Node {
        Node::and(self.appendix.clone(), self.base.clone())
    }

    /// `base & appendix`, equivalent to [`question`][Self::question].
    pub fn equivalent(&self) -> Node {
        Node::and(self.base.clone(), self.appendix.clone())
    }

    /// `base | !appendix`, never equivalent to [`question`][Self::question].
    pub fn not_equivalent(&self) -> Node {
        Node::or(self.base.clone(), Node::not(self.appendix.clone()))
    }
}
