mod literal;
pub use literal::*;

#[macro_use]
mod clause;
pub use clause::*;

mod cnf_sentence;
pub use cnf_sentence::*;

mod clause_set;
pub use clause_set::*;

mod search;
pub use search::*;

mod backward;
pub use backward::*;

mod truth_table;
pub use truth_table::*;

use crate::ast::{self, Sentence, Symbol};
use crate::error::BoxedErrorTrait;

/// A store of sentences known to be true, which can be asked what follows from them
pub trait KnowledgeBase<S: Symbol> {
    /// Assert that `sentence` is always true.
    /// A rejected sentence leaves the knowledge base as it was.
    fn tell(&mut self, sentence: Sentence<S>) -> Result<(), BoxedErrorTrait>;
    /// Returns true iff `query` is entailed by everything told so far.
    /// False covers both "known false" and "can't say"; ask about the negation to tell them apart.
    fn ask(&self, query: &Sentence<S>) -> Result<bool, BoxedErrorTrait>;
}

/// Parse the givens and the goal, then search for a proof by resolution,
/// returning `true` if the goal follows from the givens
pub fn find_proof(givens: &[&str], goal: &str) -> Result<bool, BoxedErrorTrait> {
    let mut knowledge_base = ResolutionKnowledgeBase::new();
    for &source in givens {
        knowledge_base.tell(ast::parse(source)?)?;
    }
    let goal = ast::parse(goal)?;
    knowledge_base.ask(&goal)
}
