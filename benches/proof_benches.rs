use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use propositional_kb::{
    find_proof, parse, KnowledgeBase,
    ResolutionKnowledgeBase, NaiveResolutionKnowledgeBase,
    BackwardChainingKnowledgeBase, TruthTableKnowledgeBase,
};

const CHAIN: [&str; 6] = [
    "a implies b",
    "b implies c",
    "(c and a) implies d",
    "d implies e",
    "(e and b) implies f",
    "a",
];

pub fn bench_theorems(c: &mut Criterion) {
    let mut group = c.benchmark_group("Theorems (No givens)");
    let goals = [
        "(a iff not b) iff not (a iff b)",
        "((p implies q) and (q implies r)) implies (p implies r)",
    ];
    for goal in goals.iter() {
        group.bench_with_input(BenchmarkId::new("find proof", goal), goal,
            |b, goal| {
                b.iter(|| find_proof(&[], goal))
            });
    }
    group.finish();
}

pub fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("Definite clause chain");
    let givens = CHAIN.iter()
        .map(|source| parse(source))
        .collect::<Result<Vec<_>, _>>()
        .expect("givens should parse");
    let goal = parse("f").expect("goal should parse");
    let engines: Vec<(&str, Box<dyn KnowledgeBase<String>>)> = vec![
        ("resolution", Box::new(ResolutionKnowledgeBase::new()) as Box<dyn KnowledgeBase<String>>),
        ("naive resolution", Box::new(NaiveResolutionKnowledgeBase::new()) as Box<dyn KnowledgeBase<String>>),
        ("backward chaining", Box::new(BackwardChainingKnowledgeBase::new()) as Box<dyn KnowledgeBase<String>>),
        ("truth table", Box::new(TruthTableKnowledgeBase::new()) as Box<dyn KnowledgeBase<String>>),
    ];
    for (name, mut knowledge_base) in engines {
        for given in givens.iter() {
            knowledge_base.tell(given.clone()).expect("definite clauses are accepted by every engine");
        }
        group.bench_function(BenchmarkId::new("ask", name), |b| {
            b.iter(|| knowledge_base.ask(&goal))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_theorems, bench_engines);
criterion_main!(benches);
