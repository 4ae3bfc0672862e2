use std::collections::VecDeque;
use std::fmt;

use indexmap::set::IndexSet;
use itertools::iproduct;

use crate::ast::Symbol;
use crate::prover::Clause;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
/// id's used to reference clauses in a `ClauseSet`
pub struct ClauseId(usize);

/// A set of clauses, closed under resolution on demand.
/// Clauses are only ever appended, so a `ClauseId` stays valid for the life of the set.
#[derive(Debug)]
pub struct ClauseSet<S> {
    /// the set of all clauses we have encountered thus far
    clauses: IndexSet<Clause<S>>,

    /// pairs of clauses that still have to be resolved against each other
    pending: VecDeque<(ClauseId, ClauseId)>,
}

impl<S: Symbol> ClauseSet<S> {
    pub fn new() -> ClauseSet<S> {
        ClauseSet {
            clauses: IndexSet::new(),
            pending: VecDeque::new(),
        }
    }
    /// Start from `clauses`, with every ordered pair of them waiting to be resolved
    pub fn seeded<I>(clauses: I) -> ClauseSet<S>
        where I: IntoIterator<Item = Clause<S>>
    {
        let clauses = clauses.into_iter().collect::<IndexSet<_>>();
        let count = clauses.len();
        let pending = iproduct!(0..count, 0..count)
            .map(|(i, j)| (ClauseId(i), ClauseId(j)))
            .collect();
        ClauseSet { clauses, pending }
    }
    /// Inserts the clause if it is new, pairing it with everything already present.
    /// Returns `None` if the clause was already here.
    pub fn integrate_clause(&mut self, clause: Clause<S>) -> Option<ClauseId> {
        if self.clauses.contains(&clause) {
            return None;
        }
        let clause_id = ClauseId(self.clauses.len());
        for idx in 0..self.clauses.len() {
            self.pending.push_back((ClauseId(idx), clause_id));
        }
        self.clauses.insert(clause);
        Some(clause_id)
    }
    pub fn get(&self, id: ClauseId) -> &Clause<S> {
        self.clauses.get_index(id.0).expect("an invalid ClauseId was created")
    }
    pub fn contains(&self, clause: &Clause<S>) -> bool {
        self.clauses.contains(clause)
    }
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Clause<S>> {
        self.clauses.iter()
    }
    /// Resolve pending pairs until the empty clause turns up (`true`)
    /// or nothing is left to resolve (`false`), at which point the set is closed under resolution
    pub fn has_contradiction(&mut self) -> bool {
        if self.clauses.iter().any(Clause::is_empty) {
            // we can return early in this case
            return true;
        }
        let mut resolutions = 0usize;
        while let Some((left, right)) = self.pending.pop_front() {
            let resolvents = self.get(left).resolve(self.get(right));
            resolutions += 1;
            for resolvent in resolvents {
                if resolvent.is_empty() {
                    debug!("derived the empty clause after {} resolutions, {} clauses", resolutions, self.len());
                    return true;
                }
                trace!("resolving {:?} and {:?} produced {:?}", left, right, resolvent);
                self.integrate_clause(resolvent);
            }
        }
        debug!("closed under resolution after {} resolutions, {} clauses", resolutions, self.len());
        false
    }
}

impl<S: Symbol> Default for ClauseSet<S> {
    fn default() -> Self {
        ClauseSet::new()
    }
}

impl fmt::Debug for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clause {}", self.0)
    }
}
