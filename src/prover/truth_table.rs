use std::fmt;

use indexmap::IndexSet;

use crate::ast::{Model, Proposition, Sentence, Symbol};
use crate::error::BoxedErrorTrait;
use crate::prover::KnowledgeBase;

/// Answers queries by enumerating every model.
/// Exponential in the number of propositions, so only fit to check the other engines against.
pub struct TruthTableKnowledgeBase<S> {
    /// every proposition mentioned by a told sentence
    propositions: IndexSet<Proposition<S>>,
    sentences: Vec<Sentence<S>>,
}

impl<S: Symbol> TruthTableKnowledgeBase<S> {
    pub fn new() -> TruthTableKnowledgeBase<S> {
        TruthTableKnowledgeBase {
            propositions: IndexSet::new(),
            sentences: Vec::new(),
        }
    }

    /// False iff some completion of `model` satisfies every told sentence but not the query
    fn check_all(&self, query: &Sentence<S>, unassigned: &[Proposition<S>], model: &mut Model<S>) -> bool {
        match unassigned.split_first() {
            // all symbols are assigned:
            // the model only disproves the query if it satisfies the knowledge base and not the query
            None => !self.sentences.iter().all(|s| s.evaluate(model)) || query.evaluate(model),
            Some((proposition, rest)) => {
                model.insert(proposition.clone(), true);
                if !self.check_all(query, rest, model) {
                    return false;
                }
                model.insert(proposition.clone(), false);
                self.check_all(query, rest, model)
            }
        }
    }
}

impl<S: Symbol> Default for TruthTableKnowledgeBase<S> {
    fn default() -> Self {
        TruthTableKnowledgeBase::new()
    }
}

impl<S: Symbol> fmt::Debug for TruthTableKnowledgeBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TruthTableKnowledgeBase")
            .field("propositions", &self.propositions)
            .field("sentences", &self.sentences)
            .finish()
    }
}

impl<S: Symbol> KnowledgeBase<S> for TruthTableKnowledgeBase<S> {
    fn tell(&mut self, sentence: Sentence<S>) -> Result<(), BoxedErrorTrait> {
        sentence.collect_propositions(&mut self.propositions);
        self.sentences.push(sentence);
        Ok(())
    }
    fn ask(&self, query: &Sentence<S>) -> Result<bool, BoxedErrorTrait> {
        let mut propositions = self.propositions.clone();
        query.collect_propositions(&mut propositions);
        let propositions = propositions.into_iter().collect::<Vec<_>>();
        debug!("enumerating models over {} propositions for {:?}", propositions.len(), query);
        let mut model = Model::<S>::with_capacity(propositions.len());
        Ok(self.check_all(query, &propositions, &mut model))
    }
}
