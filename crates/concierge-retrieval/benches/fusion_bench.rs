use concierge_core::Chunk;
use concierge_retrieval::ranking::fusion::{fuse, Candidate, FusionWeights};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn candidates(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate {
            chunk: Chunk::new(format!("c{i}"), "text"),
            semantic_score: (i % 97) as f64 / 97.0,
            keyword_score: (i % 13) as f64,
        })
        .collect()
}

fn bench_fusion(c: &mut Criterion) {
    let weights = FusionWeights::default();
    let input = candidates(1_000);
    c.bench_function("fuse_1k_candidates", |b| {
        b.iter(|| fuse(black_box(input.clone()), &weights))
    });
}

criterion_group!(benches, bench_fusion);
criterion_main!(benches);
