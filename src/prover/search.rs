use indexmap::set::IndexSet;

use crate::ast::{Sentence, Symbol};
use crate::error::BoxedErrorTrait;
use crate::prover::{Clause, ClauseSet, CnfSentence, KnowledgeBase};

/// Answers queries by refutation: the query is entailed iff
/// the told clauses plus the negated query resolve to the empty clause
#[derive(Debug)]
pub struct ResolutionKnowledgeBase<S> {
    sentences: Vec<CnfSentence<S>>,
}

impl<S: Symbol> ResolutionKnowledgeBase<S> {
    pub fn new() -> ResolutionKnowledgeBase<S> {
        ResolutionKnowledgeBase { sentences: Vec::new() }
    }
    /// every told clause followed by the clauses of the negated query
    fn refutation_clauses(&self, query: &Sentence<S>) -> Result<Vec<Clause<S>>, BoxedErrorTrait> {
        // we do proof by contradiction
        // negate the goal, and if we find a contradiction, that's a proof
        let negated_query = CnfSentence::new(&query.negate())?;
        let clauses = self.sentences
            .iter()
            .flat_map(|s| s.clauses().iter().cloned())
            .chain(negated_query.into_clauses())
            .collect();
        Ok(clauses)
    }
}

impl<S: Symbol> Default for ResolutionKnowledgeBase<S> {
    fn default() -> Self {
        ResolutionKnowledgeBase::new()
    }
}

impl<S: Symbol> KnowledgeBase<S> for ResolutionKnowledgeBase<S> {
    fn tell(&mut self, sentence: Sentence<S>) -> Result<(), BoxedErrorTrait> {
        self.sentences.push(CnfSentence::new(&sentence)?);
        Ok(())
    }
    fn ask(&self, query: &Sentence<S>) -> Result<bool, BoxedErrorTrait> {
        let mut clause_set = ClauseSet::seeded(self.refutation_clauses(query)?);
        debug!("searching for a refutation of {:?} from {} clauses", query, clause_set.len());
        Ok(clause_set.has_contradiction())
    }
}

/// Resolution the way the textbook writes it: every round resolves every pair of clauses
/// and the search gives up once a round adds nothing new.
/// Much slower than `ResolutionKnowledgeBase`, kept as a second opinion.
#[derive(Debug)]
pub struct NaiveResolutionKnowledgeBase<S> {
    inner: ResolutionKnowledgeBase<S>,
}

impl<S: Symbol> NaiveResolutionKnowledgeBase<S> {
    pub fn new() -> NaiveResolutionKnowledgeBase<S> {
        NaiveResolutionKnowledgeBase { inner: ResolutionKnowledgeBase::new() }
    }
}

impl<S: Symbol> Default for NaiveResolutionKnowledgeBase<S> {
    fn default() -> Self {
        NaiveResolutionKnowledgeBase::new()
    }
}

impl<S: Symbol> KnowledgeBase<S> for NaiveResolutionKnowledgeBase<S> {
    fn tell(&mut self, sentence: Sentence<S>) -> Result<(), BoxedErrorTrait> {
        self.inner.tell(sentence)
    }
    fn ask(&self, query: &Sentence<S>) -> Result<bool, BoxedErrorTrait> {
        let mut clauses = self.inner.refutation_clauses(query)?
            .into_iter()
            .collect::<IndexSet<_>>();
        let mut round = 0;
        loop {
            round += 1;
            let mut new_clauses = IndexSet::new();
            for ci in clauses.iter() {
                for cj in clauses.iter() {
                    let resolvents = ci.resolve(cj);
                    if resolvents.contains(&Clause::empty()) {
                        debug!("derived the empty clause in round {}", round);
                        return Ok(true);
                    }
                    new_clauses.extend(resolvents);
                }
            }
            if new_clauses.iter().all(|c| clauses.contains(c)) {
                debug!("no new clauses in round {}, {} clauses", round, clauses.len());
                return Ok(false);
            }
            clauses.extend(new_clauses);
        }
    }
}
