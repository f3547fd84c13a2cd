use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use gf_sbox::{generate, gf_inverse, gf_mul, AES_CONSTANT, AES_MODULUS, DEFAULT_MODULUS};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(10);
    group.bench_function("generate_aes", |b| {
        b.iter(|| generate(black_box(AES_MODULUS), black_box(AES_CONSTANT)));
    });
    group.bench_function("generate_default", |b| {
        b.iter(|| generate(black_box(DEFAULT_MODULUS), black_box(AES_CONSTANT)));
    });
    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut operands = [0u8; 64];
    rng.fill_bytes(&mut operands);

    let mut group = c.benchmark_group("field");
    group.bench_function("gf_mul", |b| {
        b.iter(|| {
            for pair in operands.chunks_exact(2) {
                black_box(gf_mul(pair[0], pair[1], AES_MODULUS));
            }
        });
    });
    group.bench_function("gf_inverse", |b| {
        b.iter(|| {
            for &x in operands.iter() {
                black_box(gf_inverse(x, AES_MODULUS));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_generation, bench_field);
criterion_main!(benches);
