use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::error::{Error, ErrorVariant, InputLocation};

use pest_derive::*;
use crate::ast::Sentence;

#[derive(Parser)]
#[grammar = "../grammar.pest"]
struct Grammar;

/// Parse the textual form of a sentence, e.g. `(rain or snow) implies not dry`
pub fn parse(source: &str) -> Result<Sentence<String>, Error<Rule>> {
    // pest (essentially) tokenizes it for us,
    // all we have to do is deal with operator precedence
    // and converting into Sentences
    let pairs = Grammar::parse(Rule::source, source).map_err(|e| explain_reserved(source, e))?;
    parse_expr(pairs)
}

fn parse_expr(pairs: Pairs<Rule>) -> Result<Sentence<String>, Error<Rule>> {
    let mut operator: Option<Pair<Rule>> = None; // we don't have an operator yet
    let mut terms = vec![];
    for pair in pairs {
        match pair.as_rule() {
            Rule::EOI => { break; }
            Rule::operator => {
                let new_operator = match pair.into_inner().next() {
                    Some(inner) => inner,
                    None => unreachable!("operator always wraps exactly one of `and`, `or`, `implies` or `iff`"),
                };
                match operator.as_ref().map(|p| p.as_rule()) {
                    // if this is the first operator we've seen, update the operator
                    None => operator = Some(new_operator),
                    // we can not chain implications or biconditionals,
                    // and we can not chain different operators together
                    Some(old_rule)
                        if old_rule == Rule::implies
                        || old_rule == Rule::bicond
                        || old_rule != new_operator.as_rule() => {
                        let variant = ErrorVariant::CustomError {
                            message: format!("unexpected {:?} after {:?}; try adding parenthesis to disambiguate",
                                              new_operator.as_rule(), old_rule
                            )
                        };
                        return Err(Error::new_from_span(variant, new_operator.as_span()));
                    }
                    Some(_) => {}
                }
            }
            _ => {
                // not an operator, it is a term
                terms.push(parse_term(pair)?);
            }
        }
    }
    let rule = operator.map(|p| p.as_rule());
    // the grammar alternates terms and operators, so there is always at least one term
    // and exactly two whenever the operator is `implies` or `iff`
    let mut terms = terms.into_iter();
    let first = match terms.next() {
        Some(first) => first,
        None => unreachable!("an expression always begins with a term"),
    };
    let sentence = terms.fold(first, |acc, next| match rule {
        Some(Rule::implies) => Sentence::implication(acc, next),
        Some(Rule::bicond) => Sentence::equivalence(acc, next),
        Some(Rule::and) => Sentence::conjunction(acc, next),
        Some(Rule::or) => Sentence::disjunction(acc, next),
        other => unreachable!("`{:?}` is not a valid operator", other),
    });
    Ok(sentence)
}

fn parse_term(pair: Pair<Rule>) -> Result<Sentence<String>, Error<Rule>> {
    let sentence = match pair.as_rule() {
        Rule::literal => {
            Sentence::proposition(pair.as_str().to_string())
        }
        Rule::negation => {
            let mut inner = pair.into_inner();
            inner.next(); // the `not` itself
            parse_expr(inner)?.negate()
        }
        Rule::parenthetical => {
            parse_expr(pair.into_inner())?
        }
        // we're not expecting operators or EOI here
        Rule::operator | Rule::or | Rule::and | Rule::implies | Rule::bicond | Rule::not | Rule::EOI => {
            unreachable!("unexpected operator or EOI {} in parse_term", pair.as_str())
        }
        // silent rules produce nothing
        rule => unreachable!("rule {:?} should produce nothing", rule),
    };
    Ok(sentence)
}

/// updates the error so that reserved words are mentioned in the error message
fn explain_reserved(source: &str, mut error: Error<Rule>) -> Error<Rule> {
    let start_idx = match error.location {
        InputLocation::Pos(idx) => idx,
        InputLocation::Span((idx, _)) => idx,
    };
    // check if reserved word would parse starting here
    let pair = match source.get(start_idx..).map(|rest| Grammar::parse(Rule::reserved, rest)) {
        Some(Ok(pair)) => pair,
        // not a reserved word, it did not fail because of that
        _ => return error,
    };
    error.variant = ErrorVariant::CustomError {
        message: format!("unexpected reserved word `{}`; expected proposition, negation, or parenthetical",
                           pair.as_str().trim()
        )
    };
    error
}
