use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Anything that can name an atomic fact.
/// Two propositions are the same fact iff their symbols are equal.
pub trait Symbol: Clone + Eq + Hash + fmt::Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Hash a value with fixed keys, so the result is the same for every run of the process
pub(crate) fn stable_digest<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// An atomic boolean fact
#[derive(Clone)]
pub struct Proposition<S> {
    symbol: S,
    /// the symbol's stable hash, computed once
    digest: u64,
}

impl<S: Symbol> Proposition<S> {
    pub fn new(symbol: S) -> Proposition<S> {
        let digest = stable_digest(&symbol);
        Proposition { symbol, digest }
    }
    pub fn symbol(&self) -> &S {
        &self.symbol
    }
    pub fn digest(&self) -> u64 {
        self.digest
    }
}

impl<S: Symbol> PartialEq for Proposition<S> {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest && self.symbol == other.symbol
    }
}
impl<S: Symbol> Eq for Proposition<S> {}

impl<S: Symbol> Hash for Proposition<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.digest);
    }
}

impl<S: Symbol> From<S> for Proposition<S> {
    fn from(symbol: S) -> Self {
        Proposition::new(symbol)
    }
}

impl<S: fmt::Debug> fmt::Debug for Proposition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.symbol)
    }
}

impl<S: fmt::Display> fmt::Display for Proposition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
