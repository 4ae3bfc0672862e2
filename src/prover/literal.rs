use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ast::{Proposition, Sentence, Symbol};

/// A proposition, or its negation
#[derive(Clone)]
pub struct Literal<S> {
    proposition: Proposition<S>,
    negated: bool,
}

impl<S: Symbol> Literal<S> {
    pub fn new(proposition: Proposition<S>, negated: bool) -> Literal<S> {
        Literal { proposition, negated }
    }
    pub fn positive(proposition: Proposition<S>) -> Literal<S> {
        Literal::new(proposition, false)
    }
    pub fn negative(proposition: Proposition<S>) -> Literal<S> {
        Literal::new(proposition, true)
    }
    pub fn proposition(&self) -> &Proposition<S> {
        &self.proposition
    }
    pub fn is_negated(&self) -> bool {
        self.negated
    }
    pub fn is_positive(&self) -> bool {
        !self.negated
    }
    /// The complementary literal, about the same proposition
    pub fn negate(&self) -> Literal<S> {
        Literal::new(self.proposition.clone(), !self.negated)
    }
    /// Literals are kept ordered by this key inside a clause:
    /// the proposition's hash first, then positive before negative
    pub(crate) fn sort_key(&self) -> (u64, bool) {
        (self.proposition.digest(), self.negated)
    }
    pub fn to_sentence(&self) -> Sentence<S> {
        let sentence = Sentence::from(self.proposition.clone());
        if self.negated { sentence.negate() } else { sentence }
    }
}

impl<S: Symbol> PartialEq for Literal<S> {
    fn eq(&self, other: &Self) -> bool {
        self.negated == other.negated && self.proposition == other.proposition
    }
}
impl<S: Symbol> Eq for Literal<S> {}

impl<S: Symbol> Hash for Literal<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl<S: fmt::Debug> fmt::Debug for Literal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~{:?}", self.proposition)
        } else {
            write!(f, "{:?}", self.proposition)
        }
    }
}

impl<S: fmt::Display> fmt::Display for Literal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~{}", self.proposition)
        } else {
            write!(f, "{}", self.proposition)
        }
    }
}
