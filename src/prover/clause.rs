use std::fmt::Formatter;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::set::IndexSet;
use itertools::Itertools;

use crate::ast::{Proposition, Symbol};
use crate::prover::Literal;

/// A recursive macro that constructs a clause over `String` symbols from identifiers
#[macro_export]
macro_rules! clause {
    // the base case: the empty clause
    () => {
        $crate::prover::Clause::<String>::empty()
    };
    ($term:ident) => {
        $crate::prover::Clause::<String>::empty().set( stringify!($term).to_string() , true)
    };
    ( ~ $term:ident) => {
        $crate::prover::Clause::<String>::empty().set( stringify!($term).to_string() , false)
    };
    // the recursive, truthy case
    ( $term:ident, $($tail:tt)*) => {
        $crate::clause!( $($tail)* ).set( stringify!($term).to_string() , true)
    };
    // the recursive, falsy case
    ( ~ $term:ident, $($tail:tt)*) => {
        $crate::clause!( $($tail)* ).set( stringify!($term).to_string() , false)
    };
}

/// Any number of literals, at least one of which is true
/// (the empty clause, of course, represents paradox)
#[derive(Clone)]
pub struct Clause<S> {
    /// deduplicated, sorted by `Literal::sort_key`
    literals: Vec<Literal<S>>,
}

impl<S: Symbol> Clause<S> {
    /// Creates the empty clause
    pub fn empty() -> Clause<S> {
        Clause { literals: Vec::new() }
    }
    /// Creates the clause with the given literals, discarding repeats
    pub fn new<I>(literals: I) -> Clause<S>
        where I: IntoIterator<Item = Literal<S>>
    {
        let mut literals = literals.into_iter().collect::<Vec<_>>();
        literals.sort_by_key(Literal::sort_key);
        // equal literals share a key, but two different propositions may too,
        // so repeats are only guaranteed to land in the same run of keys
        let mut canonical: Vec<Literal<S>> = Vec::with_capacity(literals.len());
        let mut run_start = 0;
        for literal in literals {
            if canonical.last().map(Literal::sort_key) != Some(literal.sort_key()) {
                run_start = canonical.len();
            }
            if !canonical[run_start..].contains(&literal) {
                canonical.push(literal);
            }
        }
        Clause { literals: canonical }
    }
    /// Add the literal `symbol` (or its negation, if `truth_value` is false), returning `self`
    pub fn set(self, symbol: S, truth_value: bool) -> Clause<S> {
        self.with(Literal::new(Proposition::new(symbol), !truth_value))
    }
    /// Add a literal, returning `self`
    pub fn with(self, literal: Literal<S>) -> Clause<S> {
        Clause::new(self.literals.into_iter().chain(std::iter::once(literal)))
    }

    pub fn literals(&self) -> &[Literal<S>] {
        self.literals.as_slice()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Literal<S>> {
        self.literals.iter()
    }
    pub fn len(&self) -> usize {
        self.literals.len()
    }
    /// Returns true if this is the empty clause, i.e falso
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
    pub fn contains(&self, literal: &Literal<S>) -> bool {
        let key = literal.sort_key();
        let start = self.literals.partition_point(|l| l.sort_key() < key);
        self.literals[start..]
            .iter()
            .take_while(|l| l.sort_key() == key)
            .any(|l| l == literal)
    }

    fn positive_count(&self) -> usize {
        self.literals.iter().filter(|l| l.is_positive()).count()
    }
    /// At most one positive literal
    pub fn is_horn(&self) -> bool {
        self.positive_count() <= 1
    }
    /// Exactly one positive literal
    pub fn is_definite(&self) -> bool {
        self.positive_count() == 1
    }
    /// No positive literals
    pub fn is_goal(&self) -> bool {
        self.positive_count() == 0
    }
    /// Exactly one literal
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
    /// Contains some literal along with its negation
    pub fn is_tautology(&self) -> bool {
        self.literals.iter().any(|l| l.is_positive() && self.contains(&l.negate()))
    }
    /// The single positive proposition of a definite clause
    pub fn consequent(&self) -> Option<&Proposition<S>> {
        let mut positives = self.literals.iter().filter(|l| l.is_positive());
        match (positives.next(), positives.next()) {
            (Some(literal), None) => Some(literal.proposition()),
            _ => None,
        }
    }
    /// The propositions of the negative literals, i.e. the premises of a definite clause
    pub fn antecedents(&self) -> impl Iterator<Item = &Proposition<S>> {
        self.literals.iter()
            .filter(|l| l.is_negated())
            .map(Literal::proposition)
    }

    /// apply the resolution rule to two clauses
    /// For example, suppose we have
    ///     `{p, q}` (p is true OR q is true)
    ///    `{~q, r}` (q is false OR r is true)
    /// Then, it must be the case that p is true, OR r is true,
    ///       and we don't know anything about q. This gives us:
    ///     `{p, r}` (p is true OR r is true)
    ///
    /// Every complementary pair gives its own resolvent, so
    ///     `{p, q}` and `{~p, ~q}`
    /// resolve to both `{q, ~q}` and `{p, ~p}`.
    /// Tautologies like these are returned, not discarded.
    pub fn resolve(&self, other: &Clause<S>) -> IndexSet<Clause<S>> {
        let mut resolvents = IndexSet::new();
        for (i, literal) in self.literals.iter().enumerate() {
            let complement = literal.negate();
            if !other.contains(&complement) {
                continue;
            }
            let ours = self.literals.iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, l)| l.clone());
            let theirs = other.literals.iter()
                .filter(|l| **l != complement)
                .cloned();
            resolvents.insert(Clause::new(ours.chain(theirs)));
        }
        resolvents
    }
}

impl<S: Symbol> PartialEq for Clause<S> {
    fn eq(&self, other: &Self) -> bool {
        // both sides are deduplicated, so containment one way is enough
        self.literals.len() == other.literals.len()
            && (self.literals == other.literals || self.literals.iter().all(|l| other.contains(l)))
    }
}
impl<S: Symbol> Eq for Clause<S> {}

impl<S: Symbol> Hash for Clause<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // literals sharing a key may sit in either order, but hash the same
        state.write_usize(self.literals.len());
        for literal in self.literals.iter() {
            literal.sort_key().hash(state);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Clause<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for literal in self.literals.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{:?}", literal)?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

impl<S: fmt::Display> fmt::Display for Clause<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.literals.iter().join(", "))
    }
}
