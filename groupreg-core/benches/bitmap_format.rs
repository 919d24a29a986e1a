use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use groupreg_core::{compare, format_bitmap, Bitmap};
use rand::{Rng, SeedableRng};

fn random_bitmap(rng: &mut impl Rng, span: usize, ones: usize) -> Bitmap {
    let bits: Vec<usize> = (0..ones).map(|_| rng.gen_range(0..span)).collect();
    Bitmap::from_bits(&bits).unwrap()
}

fn bench_format(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("format_bitmap");

    for span in [32, 256, 4096] {
        let bitmap = random_bitmap(&mut rng, span, span / 8);
        let mut buf = [0u8; 2048];
        for template in ["%x", "%#o", "%b"] {
            group.bench_with_input(BenchmarkId::new(template, span), &bitmap, |b, bitmap| {
                b.iter(|| format_bitmap(&mut buf, black_box(template), Some(bitmap)))
            });
        }
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let a = random_bitmap(&mut rng, 4096, 64);
    let b = a.clone();

    c.bench_function("compare_equal_4096", |bench| {
        bench.iter(|| compare(Some(black_box(&a)), Some(black_box(&b))))
    });
}

criterion_group!(benches, bench_format, bench_compare);
criterion_main!(benches);
