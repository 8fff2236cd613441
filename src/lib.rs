//! # scramble-rs: Propositional formulas in Rust
//!
//! **`scramble-rs`** represents propositional formulas as trees, decides
//! satisfiability, validity and equivalence by exhaustive enumeration, and
//! rewrites formulas with sound algebraic identities.
//!
//! ## Key Features
//!
//! - **Closed formula type**: [`Node`][crate::node::Node] is a single enum over constants, variables,
//!   negation, binary connectives and flattened n-ary conjunctions/disjunctions.
//! - **Exact decisions**: [`sat`] enumerates all `2^n` assignments, for formulas with at most 31 variables.
//! - **Local rewrite rules**: every rule in [`rules`] looks at one node and its children and reports whether it applied.
//! - **Persistent trees**: rewriting never mutates a subtree in place, so subtrees can be shared between formulas.
//! - **Injected randomness**: everything random takes an explicit [`rand::Rng`], so a fixed seed reproduces a run.
//!
//! ## Basic Usage
//!
//! ```rust
//! use scramble_rs::node::Node;
//! use scramble_rs::rules::de_morgan_expand;
//! use scramble_rs::sat::{is_equiv, is_sat, is_taut};
//!
//! let a = Node::var("A");
//! let b = Node::var("B");
//!
//! // !(A & B)
//! let f = Node::not(Node::and(a.clone(), b.clone()));
//! assert!(is_sat(&f));
//! assert!(!is_taut(&f));
//!
//! // De Morgan: !(A & B) -> !A | !B
//! let (g, applied) = de_morgan_expand(f.clone());
//! assert!(applied);
//! assert_eq!(g.to_string(), "(!A | !B)");
//! assert!(is_equiv(&f, &g));
//! ```
//!
//! ## Core Components
//!
//! - **[`node`]**: the formula tree, evaluation, scope and the canonical signature.
//! - **[`sat`]**: brute-force satisfiability, tautology and equivalence checks.
//! - **[`traversal`]**: whole-tree application of a rule, deterministic or per-node probabilistic.
//! - **[`rules`]**: the catalog of algebraic identities.
//! - **[`pipeline`]**: fixed compositions of rules for simplification and normalization.
//! - **[`builder`]**: random formula builders for fixtures.

pub mod builder;
pub mod node;
pub mod pipeline;
pub mod rules;
pub mod sat;
pub mod traversal;
pub mod types;
