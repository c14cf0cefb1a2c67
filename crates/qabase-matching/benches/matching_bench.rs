use criterion::{criterion_group, criterion_main, Criterion};

use qabase_core::config::MatchingConfig;
use qabase_matching::{ratio, MatchingEngine};
use qabase_nlp::IdentityAnalyzer;
use qabase_storage::StorageEngine;

const WORDS: [&str; 12] = [
    "мыть", "машина", "шланг", "купить", "колесо", "менять", "зимний", "шина", "масло",
    "фильтр", "двигатель", "тормоз",
];

/// A store with 1K recorded questions of three content words each.
fn seeded_store() -> StorageEngine {
    let storage = StorageEngine::open_in_memory().unwrap();
    {
        let engine = MatchingEngine::new(&storage, &IdentityAnalyzer, MatchingConfig::default());
        for i in 0..1000 {
            let question = format!(
                "{} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i / 3) % WORDS.len()],
                WORDS[(i / 7) % WORDS.len()]
            );
            engine.record_answer(&question, &format!("answer {i}")).unwrap();
        }
    }
    storage
}

fn bench_ratio(c: &mut Criterion) {
    c.bench_function("ratio_short_phrases", |b| {
        b.iter(|| ratio("правильно мыть мыть машина", "мыть машина шланг"));
    });
}

fn bench_answer_query_1k(c: &mut Criterion) {
    let storage = seeded_store();
    let engine = MatchingEngine::new(&storage, &IdentityAnalyzer, MatchingConfig::default());

    c.bench_function("answer_query_1k_requests", |b| {
        b.iter(|| engine.answer_query("Как правильно помыть машину шлангом?").unwrap());
    });
}

criterion_group!(benches, bench_ratio, bench_answer_query_1k);
criterion_main!(benches);
