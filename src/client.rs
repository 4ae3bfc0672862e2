use std::fs;

use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::ast;
use crate::error::BoxedErrorTrait;
use crate::prover::{
    BackwardChainingKnowledgeBase, KnowledgeBase, NaiveResolutionKnowledgeBase,
    ResolutionKnowledgeBase, TruthTableKnowledgeBase,
};

pub const CONFIG_FILE_PATH: &'static str = "problem.toml";

const PROVABLE_REACT: char = '✅';
const UNPROVABLE_REACT: char = '❌';

/// Which knowledge base answers the queries
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    Resolution,
    NaiveResolution,
    BackwardChaining,
    TruthTable,
}
impl Engine {
    pub fn knowledge_base(self) -> Box<dyn KnowledgeBase<String>> {
        match self {
            Engine::Resolution => Box::new(ResolutionKnowledgeBase::new()),
            Engine::NaiveResolution => Box::new(NaiveResolutionKnowledgeBase::new()),
            Engine::BackwardChaining => Box::new(BackwardChainingKnowledgeBase::new()),
            Engine::TruthTable => Box::new(TruthTableKnowledgeBase::new()),
        }
    }
}
impl Default for Engine {
    fn default() -> Self {
        Engine::Resolution
    }
}

/// A problem file: sentences to tell, then sentences to ask about
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    engine: Engine,
    #[serde(default)]
    tell: Vec<String>,
    #[serde(default)]
    ask: Vec<String>,
}
impl Config {
    pub fn load(path: &str) -> Result<Config, BoxedErrorTrait> {
        let buf = fs::read_to_string(path)?;
        Config::parse(buf.as_str())
    }
    pub fn parse(source: &str) -> Result<Config, BoxedErrorTrait> {
        let config = toml::from_str(source)?;
        Ok(config)
    }
    pub fn engine(&self) -> Engine { self.engine }
    pub fn tell(&self) -> &[String] { self.tell.as_slice() }
    pub fn ask(&self) -> &[String] { self.ask.as_slice() }
}

/// The outcome of asking one query
#[derive(Debug)]
pub struct Answer {
    pub query: String,
    pub entailed: bool,
    pub elapsed: Duration,
}
impl Answer {
    pub fn react(&self) -> char {
        if self.entailed { PROVABLE_REACT } else { UNPROVABLE_REACT }
    }
}

/// Tell every sentence of the problem to a fresh knowledge base, then ask every query.
/// Stops at the first sentence that does not parse or is rejected.
pub fn solve(config: &Config) -> Result<Vec<Answer>, BoxedErrorTrait> {
    let mut knowledge_base = config.engine().knowledge_base();
    for source in config.tell() {
        let sentence = ast::parse(source)?;
        if let Err(why) = knowledge_base.tell(sentence) {
            error!("could not tell `{}`: {}", source, why);
            return Err(why);
        }
    }
    let mut answers = Vec::with_capacity(config.ask().len());
    for source in config.ask() {
        let query = ast::parse(source)?;
        let started = Utc::now();
        let entailed = knowledge_base.ask(&query)?;
        let elapsed = Utc::now() - started;
        info!("asked `{}` using {:?}, took {}ms", source, config.engine(), elapsed.num_milliseconds());
        answers.push(Answer { query: source.clone(), entailed, elapsed });
    }
    Ok(answers)
}

pub fn start(path: &str) -> Result<(), BoxedErrorTrait> {
    let config = Config::load(path)?;
    info!("loaded {} with {} sentences and {} queries", path, config.tell().len(), config.ask().len());
    for answer in solve(&config)? {
        let micros = answer.elapsed.num_microseconds().unwrap_or(i64::MAX);
        println!("{} {} ({}µs)", answer.react(), answer.query, micros);
    }
    Ok( () )
}
