use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexicon_engine::core::engine::Engine;
use lexicon_engine::core::types::Status;
use rand::Rng;

const VOCAB: &[&str] = &[
    "rust", "search", "index", "query", "engine", "term", "document", "score",
    "relevance", "token", "corpus", "rating", "status", "cache", "thread", "shard",
];

fn synthetic_corpus(doc_count: usize, terms_per_doc: usize) -> Engine {
    let mut rng = rand::thread_rng();
    let mut engine = Engine::new("a the of").unwrap();
    for id in 0..doc_count as i64 {
        let text: String = (0..terms_per_doc)
            .map(|_| VOCAB[rng.gen_range(0..VOCAB.len())])
            .collect::<Vec<_>>()
            .join(" ");
        engine.add(id, &text, Status::Actual, &[rng.gen_range(1..=5)]).unwrap();
    }
    engine
}

fn bench_find_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_top");
    for &doc_count in &[100usize, 1_000, 10_000] {
        let engine = synthetic_corpus(doc_count, 20);

        group.bench_with_input(BenchmarkId::new("sequential", doc_count), &doc_count, |b, _| {
            b.iter(|| black_box(engine.find_top("rust search -cache", Status::Actual).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("parallel", doc_count), &doc_count, |b, _| {
            b.iter(|| black_box(engine.find_top_par("rust search -cache", Status::Actual).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_top);
criterion_main!(benches);
