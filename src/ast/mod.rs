mod symbols;
pub use symbols::*;
pub(crate) use symbols::stable_digest;

mod expr;
pub use expr::*;

mod cnf;

#[allow(dead_code)]
mod parse;
pub use parse::*;


#[cfg(test)]
mod tests {
    use crate::ast::{parse, Model, Proposition, Sentence, SentenceKind};
    use std::collections::HashSet;

    fn atom(name: &str) -> Sentence<String> {
        Sentence::proposition(name.to_string())
    }

    /// every assignment to the propositions of `sentence`
    fn models(sentence: &Sentence<String>) -> Vec<Model<String>> {
        let propositions = sentence.propositions().into_iter().collect::<Vec<_>>();
        (0..1u32 << propositions.len())
            .map(|bits| {
                propositions.iter()
                    .enumerate()
                    .map(|(i, p)| (p.clone(), bits & (1 << i) != 0))
                    .collect()
            })
            .collect()
    }

    fn assert_equivalent(before: &Sentence<String>, after: &Sentence<String>) {
        for model in models(before) {
            assert_eq!(before.evaluate(&model), after.evaluate(&model),
                       "{} and {} disagree under {:?}", before, after, model);
        }
    }

    #[test]
    fn parse_simple_0() {
        let source = "llama";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, atom("llama"))
    }
    #[test]
    fn parse_simple_1() {
        let source = "sweet or sour or something";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, (atom("sweet") | atom("sour")) | atom("something"))
    }
    #[test]
    fn parse_simple_2() {
        let source = "hot and spicy and something";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, (atom("hot") & atom("spicy")) & atom("something"))
    }
    #[test]
    fn parse_simple_3() {
        let source = "tasty implies good";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, Sentence::implication(atom("tasty"), atom("good")))
    }
    #[test]
    fn parse_simple_4() {
        let source = "not pleasant";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, !atom("pleasant"))
    }
    #[test]
    fn parse_simple_5() {
        let source = "p iff q";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, Sentence::equivalence(atom("p"), atom("q")))
    }
    #[test]
    fn parse_symbols_0() {
        let source = "¬p ∧ (q ⇒ r) ∨ s";
        let _ = parse(source).expect_err("ambiguous operators not allowed");
        let source = "(¬p & (q => r)) | ~s | (t <=> u)";
        let sentence = parse(source).expect("should not error");
        let expected = ((!atom("p") & Sentence::implication(atom("q"), atom("r"))) | !atom("s"))
            | Sentence::equivalence(atom("t"), atom("u"));
        assert_eq!(sentence, expected)
    }
    #[test]
    fn parse_keyword_prefix() {
        // words that merely start with a reserved word are propositions
        let source = "android or order";
        let sentence = parse(source).expect("should not error");
        assert_eq!(sentence, atom("android") | atom("order"))
    }

    #[test]
    fn parse_failure_0() {
        let source = "if and when";
        let err = parse(source).expect_err("`if` is reserved and should error");
        assert!(err.to_string().contains("reserved word"));
    }
    #[test]
    fn parse_failure_1() {
        let source = "this implies that implies something";
        let _ = parse(source).expect_err("implies can not be chained");
    }
    #[test]
    fn parse_failure_2() {
        let source = "red and blue or green and orange";
        let _ = parse(source).expect_err("ambigious operators not allowed");
    }
    #[test]
    fn parse_failure_3() {
        let source = "x or and";
        let _ = parse(source).expect_err("should reject a reserved word in this position");
    }
    #[test]
    fn parse_failure_4() {
        let source = "a iff b iff c";
        let _ = parse(source).expect_err("biconditionals can not be chained");
    }

    #[test]
    fn parse_nested_0() {
        let source = "(red and blue) or (green and orange)";
        let sentence = match parse(source) {
            Ok(sentence) => sentence,
            Err(why) => {
                eprintln!("{}", why);
                panic!("`{}` should parse", source);
            }
        };
        assert_eq!(sentence, (atom("red") & atom("blue")) | (atom("green") & atom("orange")));
    }
    #[test]
    fn parse_nested_1() {
        let source = "((ace implies king) or (king implies ace)) and not ( (ace implies king) and (king implies ace) )";
        let sentence = match parse(source) {
            Ok(sentence) => sentence,
            Err(why) => {
                eprintln!("{}", why);
                panic!("`{}` should parse", source);
            }
        };
        let ace_king = Sentence::implication(atom("ace"), atom("king"));
        let king_ace = Sentence::implication(atom("king"), atom("ace"));
        assert_eq!(sentence,
                   (ace_king.clone() | king_ace.clone()) & !(ace_king & king_ace));
    }

    #[test]
    fn symmetric_equality() {
        let (a, b) = (atom("a"), atom("b"));
        assert_eq!(a.clone() & b.clone(), b.clone() & a.clone());
        assert_eq!(a.clone() | b.clone(), b.clone() | a.clone());
        assert_eq!(Sentence::equivalence(a.clone(), b.clone()), Sentence::equivalence(b.clone(), a.clone()));
        // implication is not symmetric
        assert_ne!(Sentence::implication(a.clone(), b.clone()), Sentence::implication(b.clone(), a.clone()));
        assert_ne!(a.clone() & b.clone(), a.clone() | b.clone());

        let mut set = HashSet::new();
        set.insert((a.clone() & b.clone()) | !a.clone());
        assert!(set.contains(&(!a.clone() | (b & a))));
    }
    #[test]
    fn proposition_identity() {
        assert_eq!(Proposition::new("p".to_string()), Proposition::new("p".to_string()));
        assert_ne!(Proposition::new("p".to_string()), Proposition::new("q".to_string()));
        // symbols can be anything hashable
        assert_eq!(Sentence::proposition((1, 'x')) & Sentence::proposition((2, 'y')),
                   Sentence::proposition((2, 'y')) & Sentence::proposition((1, 'x')));
    }
    #[test]
    fn all_and_any() {
        let sentence = Sentence::all(vec![atom("a"), atom("b"), atom("c")]).expect("has operands");
        assert_eq!(sentence, (atom("a") & atom("b")) & atom("c"));
        let sentence = Sentence::any(vec![atom("a")]).expect("has operands");
        assert_eq!(sentence, atom("a"));
        assert!(Sentence::<String>::all(vec![]).is_none());
    }
    #[test]
    fn propositions_in_order() {
        let sentence = parse("(b implies a) and not (b or c)").expect("should parse");
        let names = sentence.propositions()
            .into_iter()
            .map(|p| p.symbol().clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
    #[test]
    fn evaluate_0() {
        let sentence = parse("(p implies q) iff (not p or q)").expect("should parse");
        for model in models(&sentence) {
            assert!(sentence.evaluate(&model));
        }
        let mut model = Model::new();
        model.insert(Proposition::new("p".to_string()), true);
        // unassigned q is false
        assert!(!parse("p and q").expect("should parse").evaluate(&model));
    }
    #[test]
    fn display_0() {
        let sentence = parse("not (a and b) implies (c iff d or e)");
        let _ = sentence.expect_err("mixed operators need parentheses");
        let sentence = parse("not (a and b) implies (c iff (d or e))").expect("should parse");
        assert_eq!(sentence.to_string(), "(¬(a ∧ b) ⇒ (c ⇔ (d ∨ e)))");
    }

    #[test]
    fn eliminate_implications_0() {
        let sentence = Sentence::implication(atom("p"), atom("q"));
        assert_eq!(sentence.eliminate_implications(), !atom("p") | atom("q"));
    }
    #[test]
    fn eliminate_implications_1() {
        let sentence = Sentence::equivalence(atom("p"), atom("q"));
        assert_eq!(sentence.eliminate_implications(),
                   (!atom("p") | atom("q")) & (atom("p") | !atom("q")));
    }
    #[test]
    fn eliminate_implications_shares_untouched() {
        let sentence = (atom("p") | !atom("q")) & atom("r");
        assert!(sentence.eliminate_implications().same_node(&sentence));
        assert!(sentence.normalize_negations().same_node(&sentence));
        assert!(sentence.distribute_ors_inward().same_node(&sentence));
    }

    #[test]
    fn negate_normalize_0() {
        let sentence = !!!!!atom("apple");
        assert_eq!(sentence.normalize_negations(), !atom("apple"))
    }
    #[test]
    fn negate_normalize_1() {
        let sentence = !(atom("apple") & atom("banana"));
        let normalized = !atom("apple") | !atom("banana");
        assert_eq!(sentence.normalize_negations(), normalized);
    }
    #[test]
    fn negate_normalize_2() {
        let sentence = !(atom("apple") | atom("banana"));
        let normalized = !atom("apple") & !atom("banana");
        assert_eq!(sentence.normalize_negations(), normalized)
    }
    #[test]
    fn negate_normalize_3() {
        let sentence = !((atom("apple") | atom("banana")) | !(atom("coconut") & !atom("dragonfruit")));
        let normalized = (!atom("apple") & !atom("banana")) & (atom("coconut") & !atom("dragonfruit"));
        assert_eq!(sentence.normalize_negations(), normalized)
    }

    #[test]
    fn distribute_0() {
        // (day and night) or (love and war)
        // (day or (love and war)) and (night or (love and war))
        // (day or love) and (day or war) and (night or love) and (night or war)
        let sentence = (atom("day") & atom("night")) | (atom("love") & atom("war"));
        let distributed = ((atom("day") | atom("love")) & (atom("day") | atom("war")))
            & ((atom("night") | atom("love")) & (atom("night") | atom("war")));
        assert_eq!(sentence.distribute_ors_inward(), distributed);
    }
    #[test]
    fn distribute_1() {
        // the conjunction on the right hand side
        let sentence = atom("a") | (atom("b") & atom("c"));
        let distributed = (atom("a") | atom("b")) & (atom("a") | atom("c"));
        assert_eq!(sentence.distribute_ors_inward(), distributed);
    }

    #[test]
    fn to_cnf_0() {
        let sentence = Sentence::equivalence(atom("L"), atom("R1") | atom("R2"));
        let cnf = sentence.to_cnf();
        assert!(cnf.is_cnf());
        assert!(!sentence.is_cnf());
        assert_equivalent(&sentence, &cnf);
    }
    #[test]
    fn to_cnf_sound() {
        let sources = [
            "(a iff b) implies (not c or (a and b))",
            "not ((a implies b) iff (b implies a))",
            "((a or b) and (c or d)) or not (a iff (b and not c))",
            "not not not (a and (b or (c and (d or not a))))",
            "(a iff b) iff (c iff d)",
            "((king implies ace) or (not king implies ace)) and not ((king implies ace) and (not king implies ace))",
        ];
        for source in sources.iter() {
            let sentence = parse(source).expect("should parse");
            let cnf = sentence.to_cnf();
            assert!(cnf.is_cnf(), "{} is not in cnf", cnf);
            assert_equivalent(&sentence, &cnf);
        }
    }
    #[test]
    fn to_cnf_literal_unchanged() {
        let sentence = !atom("a");
        assert!(sentence.to_cnf().same_node(&sentence));
        assert!(sentence.is_literal());
        match sentence.kind() {
            SentenceKind::Not(inner) => assert_eq!(inner.as_proposition(), Some(&Proposition::new("a".to_string()))),
            _ => panic!("expected a negation"),
        }
    }
}
