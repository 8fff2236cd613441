//! Brute-force decision procedures.
//!
//! Every question is answered by enumerating all `2^n` assignments over the
//! scope of the formula. Scopes are capped at [`MAX_VARIABLES`] so that the
//! enumeration fits into a 32-bit code and stays exact.

use log::debug;
use num_bigint::BigUint;

use crate::node::Node;
use crate::types::Assignment;

/// Largest scope accepted by the enumeration.
pub const MAX_VARIABLES: usize = 31;

/// All assignments over a fixed list of variable names.
///
/// Bit `i` of the code is the value of `names[i]`, so the index-to-name mapping
/// is fixed before enumeration and every assignment is produced exactly once.
struct Assignments {
    names: Vec<String>,
    code: u64,
    end: u64,
}

impl Assignments {
    fn new(f: &Node) -> Self {
        let names: Vec<String> = f.scope().into_iter().collect();
        assert!(
            names.len() <= MAX_VARIABLES,
            "Too many variables in formula f={}: {} > {}",
            f,
            names.len(),
            MAX_VARIABLES
        );
        debug!("enumerating 2^{} assignments for {}", names.len(), f);
        let end = 1u64 << names.len();
        Self { names, code: 0, end }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.code >= self.end {
            return None;
        }
        let code = self.code as u32;
        self.code += 1;
        let assignment = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), (code >> i) & 1 == 1))
            .collect();
        Some(assignment)
    }
}

/// Returns the first satisfying assignment in enumeration order, if any exists.
///
/// # Panics
///
/// Panics if the formula has more than [`MAX_VARIABLES`] variables.
pub fn one_sat(f: &Node) -> Option<Assignment> {
    let model = Assignments::new(f).find(|assignment| f.eval(assignment));
    if let Some(model) = &model {
        debug!("one_sat: found model {:?}", model);
    }
    model
}

/// Returns `true` iff the formula is satisfiable.
///
/// Stops at the first satisfying assignment. A formula without variables is
/// evaluated once against the empty assignment.
///
/// # Panics
///
/// Panics if the formula has more than [`MAX_VARIABLES`] variables.
pub fn is_sat(f: &Node) -> bool {
    one_sat(f).is_some()
}

/// Returns `true` iff the formula is a tautology, i.e. its negation is unsatisfiable.
pub fn is_taut(f: &Node) -> bool {
    !is_sat(&Node::not(f.clone()))
}

/// Returns `true` iff `f <-> g` is a tautology.
pub fn is_equiv(f: &Node, g: &Node) -> bool {
    is_taut(&Node::iff(f.clone(), g.clone()))
}

/// Counts the satisfying assignments over the scope of the formula.
///
/// # Panics
///
/// Panics if the formula has more than [`MAX_VARIABLES`] variables.
pub fn count_models(f: &Node) -> BigUint {
    let count = Assignments::new(f).filter(|assignment| f.eval(assignment)).count();
    BigUint::from(count)
}
