use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aurelia_align::{global_align, GapPenalties, Nucleotide, WeightMatrix, ALPHABET};

fn random_dna(len: usize) -> Vec<Nucleotide> {
    // Deterministic pseudo-random for reproducibility
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(ALPHABET[((state >> 33) % 4) as usize]);
    }
    seq
}

fn mutate_dna(seq: &[Nucleotide], rate: f64) -> Vec<Nucleotide> {
    let mut out = seq.to_vec();
    let mut state: u64 = 137;
    for n in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = (state >> 33) as f64 / (u32::MAX as f64);
        if r < rate {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *n = ALPHABET[((state >> 33) % 4) as usize];
        }
    }
    out
}

fn bench_global(c: &mut Criterion) {
    let weights = WeightMatrix::uniform(2.0, -1.0);
    let gaps = GapPenalties::uniform(-2.0);

    let mut group = c.benchmark_group("global");

    for &len in &[100, 1000] {
        let a = random_dna(len);
        let b = mutate_dna(&a, 0.1);

        group.bench_with_input(BenchmarkId::new("align", len), &len, |bench, _| {
            bench.iter(|| global_align(black_box(&a), black_box(&b), &weights, &gaps))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_global);
criterion_main!(benches);
