#[macro_use]
pub mod error;
#[macro_use]
pub mod prover;
pub mod ast;
pub mod client;

#[macro_use] extern crate log;

pub use ast::{parse, Proposition, Sentence, Symbol};
pub use prover::{
    find_proof, KnowledgeBase,
    ResolutionKnowledgeBase, NaiveResolutionKnowledgeBase,
    BackwardChainingKnowledgeBase, TruthTableKnowledgeBase,
};
