use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termhash::dataset::digest_dataset;
use termhash::term::parse_nquads;
use termhash::{hash_term, term_hash, HashAlgorithm, HashConfig, HashInput, Term};

fn bench_term_hash(c: &mut Criterion) {
    let term = Term::lang_literal("the quick brown fox", "en").unwrap();
    let blake3 = HashConfig {
        algorithm: HashAlgorithm::Blake3,
        input: HashInput::Canonical,
        key: None,
    };

    c.bench_function("term_hash_value", |b| b.iter(|| term_hash(black_box(&term))));
    c.bench_function("hash_term_blake3_canonical", |b| {
        b.iter(|| hash_term(black_box(&blake3), black_box(&term)).unwrap())
    });
}

fn bench_dataset_digest(c: &mut Criterion) {
    let doc: String = (0..1000)
        .map(|i| format!("<http://ex.org/s{i}> <http://ex.org/p> \"value {i}\" .\n"))
        .collect();
    let dataset = parse_nquads(&doc).unwrap();

    c.bench_function("digest_dataset_1000", |b| {
        b.iter(|| digest_dataset(black_box(&dataset), None))
    });
}

criterion_group!(benches, bench_term_hash, bench_dataset_digest);
criterion_main!(benches);
