use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Deref, Not};
use std::rc::Rc;

use indexmap::IndexSet;
use itertools::Itertools;

use crate::ast::{stable_digest, Proposition, Symbol};

/// An assignment of truth values to propositions
pub type Model<S> = HashMap<Proposition<S>, bool>;

/// An immutable sentence of propositional logic.
/// Cloning is cheap: sub-sentences are shared, never copied.
#[derive(Clone)]
pub struct Sentence<S> {
    kind: Rc<SentenceKind<S>>,
    /// structural hash of the whole tree, order-independent for the symmetric connectives
    digest: u64,
}

/// Represents what type of sentence it is, and any associated data
pub enum SentenceKind<S> {
    Proposition(Proposition<S>),
    Not(Sentence<S>),
    /// symmetric: `And(a, b)` equals `And(b, a)`
    And(Sentence<S>, Sentence<S>),
    /// symmetric
    Or(Sentence<S>, Sentence<S>),
    /// antecedent, consequent
    If(Sentence<S>, Sentence<S>),
    /// symmetric
    Iff(Sentence<S>, Sentence<S>),
}

impl<S: Symbol> From<SentenceKind<S>> for Sentence<S> {
    fn from(kind: SentenceKind<S>) -> Self {
        use SentenceKind::*;
        let symmetric = |tag: u8, a: &Sentence<S>, b: &Sentence<S>| {
            let (lo, hi) = if a.digest <= b.digest { (a.digest, b.digest) } else { (b.digest, a.digest) };
            stable_digest(&(tag, lo, hi))
        };
        let digest = match &kind {
            Proposition(p) => stable_digest(&(0u8, p.digest())),
            Not(inner) => stable_digest(&(1u8, inner.digest)),
            And(a, b) => symmetric(2, a, b),
            Or(a, b) => symmetric(3, a, b),
            If(a, b) => stable_digest(&(4u8, a.digest, b.digest)),
            Iff(a, b) => symmetric(5, a, b),
        };
        Sentence { kind: Rc::new(kind), digest }
    }
}

impl<S: Symbol> From<Proposition<S>> for Sentence<S> {
    fn from(proposition: Proposition<S>) -> Self {
        SentenceKind::Proposition(proposition).into()
    }
}

impl<S: Symbol> Sentence<S> {
    pub fn proposition(symbol: S) -> Sentence<S> {
        Proposition::new(symbol).into()
    }
    pub fn negation(sentence: Sentence<S>) -> Sentence<S> {
        SentenceKind::Not(sentence).into()
    }
    pub fn conjunction(left: Sentence<S>, right: Sentence<S>) -> Sentence<S> {
        SentenceKind::And(left, right).into()
    }
    pub fn disjunction(left: Sentence<S>, right: Sentence<S>) -> Sentence<S> {
        SentenceKind::Or(left, right).into()
    }
    pub fn implication(antecedent: Sentence<S>, consequent: Sentence<S>) -> Sentence<S> {
        SentenceKind::If(antecedent, consequent).into()
    }
    pub fn equivalence(left: Sentence<S>, right: Sentence<S>) -> Sentence<S> {
        SentenceKind::Iff(left, right).into()
    }
    /// Conjoin every operand into a left-nested tree, `None` if there are no operands
    pub fn all<I>(operands: I) -> Option<Sentence<S>>
        where I: IntoIterator<Item = Sentence<S>>
    {
        operands.into_iter().fold1(Sentence::conjunction)
    }
    /// Disjoin every operand into a left-nested tree, `None` if there are no operands
    pub fn any<I>(operands: I) -> Option<Sentence<S>>
        where I: IntoIterator<Item = Sentence<S>>
    {
        operands.into_iter().fold1(Sentence::disjunction)
    }

    pub fn kind(&self) -> &SentenceKind<S> {
        &self.kind
    }
    pub fn negate(&self) -> Sentence<S> {
        SentenceKind::Not(self.clone()).into()
    }
    /// True if both handles point at the very same node
    pub fn same_node(&self, other: &Sentence<S>) -> bool {
        Rc::ptr_eq(&self.kind, &other.kind)
    }
    /// Returns the proposition if this sentence is a bare proposition
    pub fn as_proposition(&self) -> Option<&Proposition<S>> {
        match self.kind() {
            SentenceKind::Proposition(p) => Some(p),
            _ => None,
        }
    }

    /// The distinct propositions mentioned in this sentence, in order of first occurrence
    pub fn propositions(&self) -> IndexSet<Proposition<S>> {
        let mut found = IndexSet::new();
        self.collect_propositions(&mut found);
        found
    }
    pub(crate) fn collect_propositions(&self, found: &mut IndexSet<Proposition<S>>) {
        use SentenceKind::*;
        match self.kind() {
            Proposition(p) => {
                found.insert(p.clone());
            }
            Not(inner) => inner.collect_propositions(found),
            And(a, b) | Or(a, b) | If(a, b) | Iff(a, b) => {
                a.collect_propositions(found);
                b.collect_propositions(found);
            }
        }
    }

    /// Evaluate the sentence under `model`.
    /// Propositions the model does not mention are taken to be false.
    pub fn evaluate(&self, model: &Model<S>) -> bool {
        use SentenceKind::*;
        match self.kind() {
            Proposition(p) => model.get(p).copied().unwrap_or(false),
            Not(inner) => !inner.evaluate(model),
            And(a, b) => a.evaluate(model) && b.evaluate(model),
            Or(a, b) => a.evaluate(model) || b.evaluate(model),
            If(a, b) => !a.evaluate(model) || b.evaluate(model),
            Iff(a, b) => a.evaluate(model) == b.evaluate(model),
        }
    }

    /// Rebuild a unary node, reusing `self` when the child did not change
    pub(crate) fn rebuild_unary<F>(&self, old: &Sentence<S>, new: Sentence<S>, make: F) -> Sentence<S>
        where F: FnOnce(Sentence<S>) -> SentenceKind<S>
    {
        if old.same_node(&new) {
            self.clone()
        } else {
            make(new).into()
        }
    }
    /// Rebuild a binary node, reusing `self` when neither child changed
    pub(crate) fn rebuild_binary<F>(&self, old: (&Sentence<S>, &Sentence<S>), new: (Sentence<S>, Sentence<S>), make: F) -> Sentence<S>
        where F: FnOnce(Sentence<S>, Sentence<S>) -> SentenceKind<S>
    {
        if old.0.same_node(&new.0) && old.1.same_node(&new.1) {
            self.clone()
        } else {
            make(new.0, new.1).into()
        }
    }

    fn fmt_with<F>(&self, f: &mut fmt::Formatter<'_>, leaf: &F) -> fmt::Result
        where F: Fn(&Proposition<S>, &mut fmt::Formatter<'_>) -> fmt::Result
    {
        use SentenceKind::*;
        let infix = |a: &Sentence<S>, op: &str, b: &Sentence<S>, f: &mut fmt::Formatter<'_>| {
            write!(f, "(")?;
            a.fmt_with(f, leaf)?;
            write!(f, " {} ", op)?;
            b.fmt_with(f, leaf)?;
            write!(f, ")")
        };
        match self.kind() {
            Proposition(p) => leaf(p, f),
            Not(inner) => {
                write!(f, "¬")?;
                inner.fmt_with(f, leaf)
            }
            And(a, b) => infix(a, "∧", b, f),
            Or(a, b) => infix(a, "∨", b, f),
            If(a, b) => infix(a, "⇒", b, f),
            Iff(a, b) => infix(a, "⇔", b, f),
        }
    }
}

impl<S: Symbol> PartialEq for SentenceKind<S> {
    fn eq(&self, other: &Self) -> bool {
        use SentenceKind::*;
        let unordered = |a: &Sentence<S>, b: &Sentence<S>, c: &Sentence<S>, d: &Sentence<S>| {
            (a == c && b == d) || (a == d && b == c)
        };
        match (self, other) {
            (Proposition(p), Proposition(q)) => p == q,
            (Not(a), Not(b)) => a == b,
            (And(a, b), And(c, d)) => unordered(a, b, c, d),
            (Or(a, b), Or(c, d)) => unordered(a, b, c, d),
            (Iff(a, b), Iff(c, d)) => unordered(a, b, c, d),
            (If(a, b), If(c, d)) => a == c && b == d,
            _ => false,
        }
    }
}
impl<S: Symbol> Eq for SentenceKind<S> {}

impl<S: Symbol> PartialEq for Sentence<S> {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other) || (self.digest == other.digest && self.kind.deref() == other.kind.deref())
    }
}
impl<S: Symbol> Eq for Sentence<S> {}

impl<S: Symbol> Hash for Sentence<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.digest);
    }
}

impl<S: Symbol> Not for Sentence<S> {
    type Output = Sentence<S>;
    fn not(self) -> Sentence<S> {
        Sentence::negation(self)
    }
}
impl<S: Symbol> BitAnd for Sentence<S> {
    type Output = Sentence<S>;
    fn bitand(self, other: Sentence<S>) -> Sentence<S> {
        Sentence::conjunction(self, other)
    }
}
impl<S: Symbol> BitOr for Sentence<S> {
    type Output = Sentence<S>;
    fn bitor(self, other: Sentence<S>) -> Sentence<S> {
        Sentence::disjunction(self, other)
    }
}

impl<S: Symbol> fmt::Debug for Sentence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &|p: &Proposition<S>, f: &mut fmt::Formatter<'_>| write!(f, "{:?}", p))
    }
}

impl<S: Symbol + fmt::Display> fmt::Display for Sentence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &|p: &Proposition<S>, f: &mut fmt::Formatter<'_>| write!(f, "{}", p))
    }
}
