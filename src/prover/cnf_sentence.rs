use std::fmt;

use itertools::Itertools;

use crate::ast::{Sentence, SentenceKind, Symbol};
use crate::error::BoxedErrorTrait;
use crate::prover::{Clause, Literal};

/// A sentence in conjunctive normal form, broken into its clauses
#[derive(Debug, Clone)]
pub struct CnfSentence<S> {
    clauses: Vec<Clause<S>>,
}

impl<S: Symbol> CnfSentence<S> {
    /// Convert `sentence` to conjunctive normal form and decompose it
    pub fn new(sentence: &Sentence<S>) -> Result<CnfSentence<S>, BoxedErrorTrait> {
        CnfSentence::decompose(&sentence.to_cnf())
    }
    /// Decompose a sentence that is already in conjunctive normal form.
    /// Anything else is an internal error: the converter was bypassed or is broken.
    pub fn decompose(cnf: &Sentence<S>) -> Result<CnfSentence<S>, BoxedErrorTrait> {
        let mut clauses = Vec::new();
        collect_clauses(cnf, &mut clauses)?;
        Ok(CnfSentence { clauses })
    }
    pub fn clauses(&self) -> &[Clause<S>] {
        self.clauses.as_slice()
    }
    pub fn into_clauses(self) -> Vec<Clause<S>> {
        self.clauses
    }
}

/// walk the conjunction spine, every leaf is a clause
fn collect_clauses<S: Symbol>(sentence: &Sentence<S>, clauses: &mut Vec<Clause<S>>) -> Result<(), BoxedErrorTrait> {
    if let SentenceKind::And(a, b) = sentence.kind() {
        collect_clauses(a, clauses)?;
        return collect_clauses(b, clauses);
    }
    let mut literals = Vec::new();
    collect_literals(sentence, &mut literals)?;
    clauses.push(Clause::new(literals));
    Ok(())
}

/// walk the disjunction spine, every leaf is a literal
fn collect_literals<S: Symbol>(sentence: &Sentence<S>, literals: &mut Vec<Literal<S>>) -> Result<(), BoxedErrorTrait> {
    match sentence.kind() {
        SentenceKind::Or(a, b) => {
            collect_literals(a, literals)?;
            collect_literals(b, literals)
        }
        SentenceKind::Proposition(p) => {
            literals.push(Literal::positive(p.clone()));
            Ok(())
        }
        SentenceKind::Not(inner) => match inner.as_proposition() {
            Some(p) => {
                literals.push(Literal::negative(p.clone()));
                Ok(())
            }
            None => internal_error!("not a CNF clause: `{:?}` is negated", inner),
        },
        _ => internal_error!("not a CNF clause: `{:?}`", sentence),
    }
}

impl<S: fmt::Display> fmt::Display for CnfSentence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().join(" ∧ "))
    }
}
