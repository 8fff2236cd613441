//! Formula trees.
//!
//! A [`Node`] is a finite tree over five variants: constants, variables,
//! negation, binary connectives and flattened n-ary conjunctions/disjunctions.
//! Trees are persistent: rewrites build new nodes and never mutate a subtree
//! in place, so subtrees may be freely cloned into several formulas.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Assignment, BinOp, NaryOp};

/// A propositional formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Constant `true` (top) or `false` (bottom).
    Const(bool),
    /// Propositional variable.
    Var(String),
    /// Negation.
    Not(Box<Node>),
    /// Binary connective.
    Binary(BinOp, Box<Node>, Box<Node>),
    /// Flattened chain of an associative connective; may be empty.
    Nary(NaryOp, Vec<Node>),
}

impl Node {
    pub fn top() -> Self {
        Node::Const(true)
    }

    pub fn bottom() -> Self {
        Node::Const(false)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(x: Node) -> Self {
        Node::Not(Box::new(x))
    }

    pub fn binary(op: BinOp, x: Node, y: Node) -> Self {
        Node::Binary(op, Box::new(x), Box::new(y))
    }

    pub fn and(x: Node, y: Node) -> Self {
        Node::binary(BinOp::And, x, y)
    }

    pub fn or(x: Node, y: Node) -> Self {
        Node::binary(BinOp::Or, x, y)
    }

    pub fn implies(x: Node, y: Node) -> Self {
        Node::binary(BinOp::Implies, x, y)
    }

    pub fn iff(x: Node, y: Node) -> Self {
        Node::binary(BinOp::Iff, x, y)
    }

    /// N-ary conjunction. The empty conjunction is `true`.
    pub fn conjunction(clauses: impl IntoIterator<Item = Node>) -> Self {
        Node::Nary(NaryOp::And, clauses.into_iter().collect())
    }

    /// N-ary disjunction. The empty disjunction is `false`.
    pub fn disjunction(clauses: impl IntoIterator<Item = Node>) -> Self {
        Node::Nary(NaryOp::Or, clauses.into_iter().collect())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Const(value)
    }
}

impl Node {
    /// Evaluates the formula under the given assignment.
    ///
    /// # Panics
    ///
    /// Panics if a variable of the formula is missing from `assignment`.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Node::Const(value) => *value,
            Node::Var(name) => match assignment.get(name) {
                Some(&value) => value,
                None => panic!("Variable '{}' is not in scope of assignment {:?}", name, assignment),
            },
            Node::Not(x) => !x.eval(assignment),
            Node::Binary(op, x, y) => op.apply(x.eval(assignment), y.eval(assignment)),
            Node::Nary(NaryOp::And, clauses) => clauses.iter().all(|c| c.eval(assignment)),
            Node::Nary(NaryOp::Or, clauses) => clauses.iter().any(|c| c.eval(assignment)),
        }
    }

    /// The set of variable names occurring in the formula.
    pub fn scope(&self) -> BTreeSet<String> {
        let mut scope = BTreeSet::new();
        self.collect_scope(&mut scope);
        scope
    }

    fn collect_scope(&self, scope: &mut BTreeSet<String>) {
        match self {
            Node::Const(_) => {}
            Node::Var(name) => {
                scope.insert(name.clone());
            }
            _ => {
                for child in self.children() {
                    child.collect_scope(scope);
                }
            }
        }
    }

    /// Canonical textual rendering used for syntactic equality.
    ///
    /// Two formulas with equal signatures are the same tree up to the
    /// binary/n-ary distinction; logically equivalent formulas generally differ.
    pub fn signature(&self) -> String {
        self.to_string()
    }

    /// Immediate subformulas, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Const(_) | Node::Var(_) => Vec::new(),
            Node::Not(x) => vec![x.as_ref()],
            Node::Binary(_, x, y) => vec![x.as_ref(), y.as_ref()],
            Node::Nary(_, clauses) => clauses.iter().collect(),
        }
    }

    /// Rebuilds the node with every immediate child replaced by `f(child)`.
    ///
    /// Leaves are returned unchanged and `f` is never called for them.
    #[inline(always)]
    pub fn map_children<F>(self, mut f: F) -> Node
    where
        F: FnMut(Node) -> Node,
    {
        match self {
            Node::Const(_) | Node::Var(_) => self,
            Node::Not(x) => Node::Not(Box::new(f(*x))),
            Node::Binary(op, x, y) => {
                let x = f(*x);
                let y = f(*y);
                Node::Binary(op, Box::new(x), Box::new(y))
            }
            Node::Nary(op, clauses) => Node::Nary(op, clauses.into_iter().map(f).collect()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Const(_) | Node::Var(_))
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|c| c.size()).sum::<usize>()
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        self.children().iter().map(|c| 1 + c.depth()).max().unwrap_or(0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Const(value) => write!(f, "{}", value),
            Node::Var(name) => write!(f, "{}", name),
            Node::Not(x) => write!(f, "!{}", x),
            Node::Binary(op, x, y) => write!(f, "({} {} {})", x, op, y),
            Node::Nary(op, clauses) => {
                if clauses.is_empty() {
                    return write!(f, "{}", op.identity());
                }
                write!(f, "(")?;
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op)?;
                    }
                    write!(f, "{}", clause)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn assignment(values: &[(&str, bool)]) -> Assignment {
        values.iter().map(|&(name, value)| (name.to_string(), value)).collect()
    }

    #[test]
    fn test_eval_constants() {
        let empty = Assignment::new();
        assert!(Node::top().eval(&empty));
        assert!(!Node::bottom().eval(&empty));
        assert!(Node::from(true).eval(&empty));
    }

    #[test]
    fn test_eval_binary_truth_tables() {
        let a = Node::var("A");
        let b = Node::var("B");
        let and = Node::and(a.clone(), b.clone());
        let or = Node::or(a.clone(), b.clone());
        let implies = Node::implies(a.clone(), b.clone());
        let iff = Node::iff(a, b);

        for x in [false, true] {
            for y in [false, true] {
                let asg = assignment(&[("A", x), ("B", y)]);
                assert_eq!(and.eval(&asg), x && y);
                assert_eq!(or.eval(&asg), x || y);
                assert_eq!(implies.eval(&asg), !x || y);
                assert_eq!(iff.eval(&asg), x == y);
            }
        }
    }

    #[test]
    fn test_eval_nested() {
        // !(A & B) | C
        let f = Node::or(Node::not(Node::and(Node::var("A"), Node::var("B"))), Node::var("C"));
        assert!(!f.eval(&assignment(&[("A", true), ("B", true), ("C", false)])));
        assert!(f.eval(&assignment(&[("A", true), ("B", true), ("C", true)])));
        assert!(f.eval(&assignment(&[("A", false), ("B", true), ("C", false)])));
    }

    #[test]
    fn test_eval_nary() {
        let conj = Node::conjunction([Node::var("A"), Node::var("B"), Node::var("C")]);
        let disj = Node::disjunction([Node::var("A"), Node::var("B"), Node::var("C")]);

        let all = assignment(&[("A", true), ("B", true), ("C", true)]);
        let one = assignment(&[("A", false), ("B", true), ("C", false)]);
        let none = assignment(&[("A", false), ("B", false), ("C", false)]);

        assert!(conj.eval(&all));
        assert!(!conj.eval(&one));
        assert!(disj.eval(&one));
        assert!(!disj.eval(&none));
    }

    #[test]
    fn test_empty_nary_identity() {
        let empty = Assignment::new();
        assert!(Node::conjunction([]).eval(&empty));
        assert!(!Node::disjunction([]).eval(&empty));

        // Identity must hold regardless of the assignment.
        let asg = assignment(&[("A", true), ("B", false)]);
        assert!(Node::conjunction([]).eval(&asg));
        assert!(!Node::disjunction([]).eval(&asg));
    }

    #[test]
    #[should_panic(expected = "Variable 'B' is not in scope of assignment")]
    fn test_eval_missing_variable_panics() {
        let f = Node::and(Node::var("A"), Node::var("B"));
        f.eval(&assignment(&[("A", true)]));
    }

    #[test]
    fn test_scope() {
        let f = Node::iff(
            Node::conjunction([Node::var("A"), Node::not(Node::var("B"))]),
            Node::or(Node::var("A"), Node::top()),
        );
        let scope: Vec<String> = f.scope().into_iter().collect();
        assert_eq!(scope, vec!["A".to_string(), "B".to_string()]);
        assert!(Node::bottom().scope().is_empty());
        assert!(Node::disjunction([]).scope().is_empty());
    }

    #[test]
    fn test_signature() {
        let a = || Node::var("A");
        let b = || Node::var("B");
        assert_eq!(Node::top().signature(), "true");
        assert_eq!(Node::bottom().signature(), "false");
        assert_eq!(Node::not(a()).signature(), "!A");
        assert_eq!(Node::and(a(), b()).signature(), "(A & B)");
        assert_eq!(Node::or(a(), b()).signature(), "(A | B)");
        assert_eq!(Node::implies(a(), b()).signature(), "(A -> B)");
        assert_eq!(Node::iff(a(), b()).signature(), "(A <-> B)");
        assert_eq!(Node::conjunction([a(), b(), Node::var("C")]).signature(), "(A & B & C)");
        assert_eq!(Node::disjunction([a()]).signature(), "(A)");
        assert_eq!(Node::conjunction([]).signature(), "true");
        assert_eq!(Node::disjunction([]).signature(), "false");
        assert_eq!(Node::not(Node::not(Node::or(a(), b()))).signature(), "!!(A | B)");
    }

    #[test]
    fn test_size_and_depth() {
        let a = Node::var("A");
        assert_eq!(a.size(), 1);
        assert_eq!(a.depth(), 0);
        assert!(a.is_leaf());

        let f = Node::and(Node::not(Node::var("A")), Node::var("B"));
        assert_eq!(f.size(), 4);
        assert_eq!(f.depth(), 2);
        assert!(!f.is_leaf());

        let g = Node::conjunction([Node::var("A"), Node::var("B"), Node::var("C")]);
        assert_eq!(g.size(), 4);
        assert_eq!(g.depth(), 1);
        assert_eq!(g.children().len(), 3);
    }

    /// Evaluates `f` on all 32 rows of a 5-variable table at once: bit `r` of
    /// the result is the value under row `r`, where variable `i` is true iff
    /// bit `i` of `r` is set.
    fn truth_table(f: &Node, names: &[String]) -> u32 {
        match f {
            Node::Const(true) => u32::MAX,
            Node::Const(false) => 0,
            Node::Var(name) => {
                let i = names.iter().position(|n| n == name).unwrap();
                (0..32u32).filter(|r| (r >> i) & 1 == 1).fold(0u32, |mask, r| mask | (1 << r))
            }
            Node::Not(x) => !truth_table(x, names),
            Node::Binary(op, x, y) => {
                let (a, b) = (truth_table(x, names), truth_table(y, names));
                match op {
                    BinOp::And => a & b,
                    BinOp::Or => a | b,
                    BinOp::Implies => !a | b,
                    BinOp::Iff => !(a ^ b),
                }
            }
            Node::Nary(NaryOp::And, clauses) => clauses.iter().fold(u32::MAX, |m, c| m & truth_table(c, names)),
            Node::Nary(NaryOp::Or, clauses) => clauses.iter().fold(0, |m, c| m | truth_table(c, names)),
        }
    }

    #[test]
    fn test_eval_matches_truth_table_on_five_variables() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        use crate::builder::{build_scope, RandomFormulaBuilder};

        let names = build_scope(5);
        let builder = RandomFormulaBuilder::new(5);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for k in 1..=12 {
            let f = builder.build(k, &mut rng);
            let table = truth_table(&f, &names);
            for row in 0..32u32 {
                let a: Assignment = names.iter().enumerate().map(|(i, n)| (n.clone(), (row >> i) & 1 == 1)).collect();
                assert_eq!(f.eval(&a), (table >> row) & 1 == 1, "f = {}, row = {:05b}", f, row);
            }
        }
    }
}
