use crate::ast::{Sentence, SentenceKind, Symbol};

impl<S: Symbol> Sentence<S> {
    /// Rewrite into conjunctive normal form: a conjunction of disjunctions of literals.
    /// Runs the three passes in order, each to its fixed point.
    pub fn to_cnf(&self) -> Sentence<S> {
        self.eliminate_implications()
            .normalize_negations()
            .distribute_ors_inward()
    }

    /// Convert `P implies Q` to `not P or Q`,
    /// and `P iff Q` to `(not P or Q) and (P or not Q)`
    pub fn eliminate_implications(&self) -> Sentence<S> {
        use SentenceKind::*;
        match self.kind() {
            Proposition(_) => self.clone(),
            Not(inner) => {
                let new = inner.eliminate_implications();
                self.rebuild_unary(inner, new, Not)
            }
            And(a, b) => {
                let new = (a.eliminate_implications(), b.eliminate_implications());
                self.rebuild_binary((a, b), new, And)
            }
            Or(a, b) => {
                let new = (a.eliminate_implications(), b.eliminate_implications());
                self.rebuild_binary((a, b), new, Or)
            }
            If(antecedent, consequent) => {
                let antecedent = antecedent.eliminate_implications();
                let consequent = consequent.eliminate_implications();
                Sentence::disjunction(antecedent.negate(), consequent)
            }
            Iff(a, b) => {
                // expanded as (P => Q) and (Q => P), which distribution can already work with
                let a = a.eliminate_implications();
                let b = b.eliminate_implications();
                Sentence::conjunction(
                    Sentence::disjunction(a.negate(), b.clone()),
                    Sentence::disjunction(a, b.negate()),
                )
            }
        }
    }

    /// Move all NOTs to immediately before propositions.
    /// Expects implications to be eliminated already; a NOT above one is left in place.
    pub fn normalize_negations(&self) -> Sentence<S> {
        use SentenceKind::*;
        match self.kind() {
            Proposition(_) => self.clone(),
            Not(negated) => {
                match negated.kind() {
                    // double negation elimination
                    // `not not P` becomes `P`
                    Not(inner) => inner.normalize_negations(),
                    // de morgan's law
                    // `not (P and Q)` becomes `not P or not Q`
                    And(a, b) => Sentence::disjunction(
                        a.negate().normalize_negations(),
                        b.negate().normalize_negations(),
                    ),
                    // de morgan's law
                    // `not (P or Q)` becomes `not P and not Q`
                    Or(a, b) => Sentence::conjunction(
                        a.negate().normalize_negations(),
                        b.negate().normalize_negations(),
                    ),
                    Proposition(_) => self.clone(),
                    If(_, _) | Iff(_, _) => {
                        let new = negated.normalize_negations();
                        self.rebuild_unary(negated, new, Not)
                    }
                }
            }
            And(a, b) => {
                let new = (a.normalize_negations(), b.normalize_negations());
                self.rebuild_binary((a, b), new, And)
            }
            Or(a, b) => {
                let new = (a.normalize_negations(), b.normalize_negations());
                self.rebuild_binary((a, b), new, Or)
            }
            If(a, b) => {
                let new = (a.normalize_negations(), b.normalize_negations());
                self.rebuild_binary((a, b), new, If)
            }
            Iff(a, b) => {
                let new = (a.normalize_negations(), b.normalize_negations());
                self.rebuild_binary((a, b), new, Iff)
            }
        }
    }

    /// Distribute disjunctions over conjunctions until no OR has an AND beneath it:
    /// `P or (Q and R)` becomes `(P or Q) and (P or R)`, and likewise with the operands swapped.
    /// Expects negation normal form.
    pub fn distribute_ors_inward(&self) -> Sentence<S> {
        use SentenceKind::*;
        match self.kind() {
            And(a, b) => {
                let new = (a.distribute_ors_inward(), b.distribute_ors_inward());
                self.rebuild_binary((a, b), new, And)
            }
            Or(a, b) => {
                // both sides are in cnf from here on
                let left = a.distribute_ors_inward();
                let right = b.distribute_ors_inward();
                if let And(x, y) = left.kind() {
                    return Sentence::conjunction(
                        Sentence::disjunction(x.clone(), right.clone()).distribute_ors_inward(),
                        Sentence::disjunction(y.clone(), right).distribute_ors_inward(),
                    );
                }
                if let And(x, y) = right.kind() {
                    return Sentence::conjunction(
                        Sentence::disjunction(left.clone(), x.clone()).distribute_ors_inward(),
                        Sentence::disjunction(left, y.clone()).distribute_ors_inward(),
                    );
                }
                self.rebuild_binary((a, b), (left, right), Or)
            }
            // literals, or something the earlier passes should have removed
            Proposition(_) | Not(_) | If(_, _) | Iff(_, _) => self.clone(),
        }
    }

    /// True if this sentence is a proposition or a negated proposition
    pub fn is_literal(&self) -> bool {
        match self.kind() {
            SentenceKind::Proposition(_) => true,
            SentenceKind::Not(inner) => inner.as_proposition().is_some(),
            _ => false,
        }
    }

    /// True if this sentence is a conjunction of disjunctions of literals
    pub fn is_cnf(&self) -> bool {
        fn is_clause<S: Symbol>(sentence: &Sentence<S>) -> bool {
            match sentence.kind() {
                SentenceKind::Or(a, b) => is_clause(a) && is_clause(b),
                _ => sentence.is_literal(),
            }
        }
        match self.kind() {
            SentenceKind::And(a, b) => a.is_cnf() && b.is_cnf(),
            _ => is_clause(self),
        }
    }
}
