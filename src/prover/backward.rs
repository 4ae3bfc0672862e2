use std::collections::HashMap;

use indexmap::IndexMap;

use crate::ast::{Proposition, Sentence, Symbol};
use crate::error::{BoxedErrorTrait, ShapeViolation, UnsupportedSentenceShape};
use crate::prover::{Clause, CnfSentence, KnowledgeBase};

/// Goal-directed proof search over definite clauses.
/// Anything it cannot prove is taken to be false.
#[derive(Debug)]
pub struct BackwardChainingKnowledgeBase<S> {
    /// maps a proposition to the clauses that conclude it
    clauses_by_consequent: HashMap<Proposition<S>, Vec<Clause<S>>>,
}

/// Why a proposition holds: the clause used to conclude it,
/// and a proof of each of that clause's premises
#[derive(Debug, Clone)]
pub struct Proof<S> {
    conclusion: Proposition<S>,
    clause: Clause<S>,
    premises: IndexMap<Proposition<S>, Proof<S>>,
}

impl<S: Symbol> Proof<S> {
    pub fn clause(&self) -> &Clause<S> {
        &self.clause
    }
    /// The proposition this node proves
    pub fn conclusion(&self) -> &Proposition<S> {
        &self.conclusion
    }
    /// Proofs of the premises, keyed by the proposition they prove
    pub fn premises(&self) -> &IndexMap<Proposition<S>, Proof<S>> {
        &self.premises
    }
    /// Maps every proposition in the proof to the clause used to conclude it
    pub fn flatten(&self) -> IndexMap<Proposition<S>, Clause<S>> {
        let mut flattened = IndexMap::new();
        self.flatten_into(&mut flattened);
        flattened
    }
    fn flatten_into(&self, flattened: &mut IndexMap<Proposition<S>, Clause<S>>) {
        flattened.insert(self.conclusion.clone(), self.clause.clone());
        for premise in self.premises.values() {
            premise.flatten_into(flattened);
        }
    }
}

impl<S: Symbol> BackwardChainingKnowledgeBase<S> {
    pub fn new() -> BackwardChainingKnowledgeBase<S> {
        BackwardChainingKnowledgeBase { clauses_by_consequent: HashMap::new() }
    }
    /// Search for a proof of `query`, which must be a single proposition
    pub fn prove(&self, query: &Sentence<S>) -> Result<Option<Proof<S>>, BoxedErrorTrait> {
        let goal = match query.as_proposition() {
            Some(goal) => goal,
            None => return Err(Box::new(UnsupportedSentenceShape {
                violation: ShapeViolation::NonPropositionQuery,
                sentence: format!("{:?}", query),
            })),
        };
        let mut path = Vec::new();
        let proof = self.prove_goal(goal, &mut path);
        debug!("{:?} is {}", goal, if proof.is_some() { "proven" } else { "not provable" });
        Ok(proof)
    }

    /// `path` holds the goals currently being proven, above this one
    fn prove_goal(&self, goal: &Proposition<S>, path: &mut Vec<Proposition<S>>) -> Option<Proof<S>> {
        trace!("visiting {:?} with path {:?}", goal, path);
        // closed world: nothing concludes this, so it is false
        let clauses = self.clauses_by_consequent.get(goal)?;
        if let Some(fact) = clauses.iter().find(|c| c.is_unit()) {
            return Some(Proof { conclusion: goal.clone(), clause: fact.clone(), premises: IndexMap::new() });
        }
        // already trying to prove this further up, going round again can't help
        if path.contains(goal) {
            return None;
        }
        path.push(goal.clone());
        let proof = clauses.iter().find_map(|clause| {
            self.prove_premises(clause, path)
                .map(|premises| Proof { conclusion: goal.clone(), clause: clause.clone(), premises })
        });
        path.pop();
        proof
    }

    /// Every antecedent of `clause` has to be proven
    fn prove_premises(&self, clause: &Clause<S>, path: &mut Vec<Proposition<S>>) -> Option<IndexMap<Proposition<S>, Proof<S>>> {
        let mut premises = IndexMap::new();
        for antecedent in clause.antecedents() {
            let proof = self.prove_goal(antecedent, path)?;
            premises.insert(antecedent.clone(), proof);
        }
        Some(premises)
    }
}

impl<S: Symbol> Default for BackwardChainingKnowledgeBase<S> {
    fn default() -> Self {
        BackwardChainingKnowledgeBase::new()
    }
}

impl<S: Symbol> KnowledgeBase<S> for BackwardChainingKnowledgeBase<S> {
    fn tell(&mut self, sentence: Sentence<S>) -> Result<(), BoxedErrorTrait> {
        let cnf = CnfSentence::new(&sentence)?;
        // check everything first, so a rejected sentence leaves nothing behind
        if !cnf.clauses().iter().all(Clause::is_definite) {
            return Err(Box::new(UnsupportedSentenceShape {
                violation: ShapeViolation::NonDefiniteClause,
                sentence: format!("{:?}", sentence),
            }));
        }
        for clause in cnf.into_clauses() {
            let consequent = match clause.consequent() {
                Some(consequent) => consequent.clone(),
                None => return internal_error!("definite clause {:?} has no consequent", clause),
            };
            self.clauses_by_consequent
                .entry(consequent)
                .or_insert_with(Vec::new)
                .push(clause);
        }
        Ok(())
    }
    fn ask(&self, query: &Sentence<S>) -> Result<bool, BoxedErrorTrait> {
        Ok(self.prove(query)?.is_some())
    }
}
