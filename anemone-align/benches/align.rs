use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use anemone_align::{align, alignment_score, edit_distance, AlignmentMode, ScoringMatrix};

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    // Deterministic pseudo-random for reproducibility
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn mutate_dna(seq: &[u8], rate: f64) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut out = seq.to_vec();
    let mut state: u64 = 137;
    for b in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = (state >> 33) as f64 / (u32::MAX as f64);
        if r < rate {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *b = bases[((state >> 33) % 4) as usize];
        }
    }
    out
}

fn bench_pairwise(c: &mut Criterion) {
    let scoring = ScoringMatrix::dna_default();

    let mut group = c.benchmark_group("pairwise");

    for &len in &[100, 1000] {
        let q = random_dna(len);
        let t = mutate_dna(&q, 0.1);

        group.bench_with_input(BenchmarkId::new("global", len), &len, |b, _| {
            b.iter(|| align(black_box(&q), black_box(&t), &scoring, AlignmentMode::Global))
        });

        group.bench_with_input(BenchmarkId::new("local", len), &len, |b, _| {
            b.iter(|| align(black_box(&q), black_box(&t), &scoring, AlignmentMode::Local))
        });

        group.bench_with_input(BenchmarkId::new("score_only_global", len), &len, |b, _| {
            b.iter(|| {
                alignment_score(black_box(&q), black_box(&t), &scoring, AlignmentMode::Global)
            })
        });

        group.bench_with_input(BenchmarkId::new("edit_distance", len), &len, |b, _| {
            b.iter(|| edit_distance(black_box(&q), black_box(&t)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise);
criterion_main!(benches);
