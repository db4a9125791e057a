use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordfloat::{decode_float, decompose, encode_float, peek_float_length, FloatKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Input generation
// ---------------------------------------------------------------------------

/// Uniform doubles in `[0, 1)` from a fixed seed, so runs are comparable.
fn unit_values(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.random::<f64>()).collect()
}

const SAMPLES: &[(&str, f64)] = &[
    ("integer", 1234.0),
    ("short_fraction", 12.345),
    ("full_precision", std::f64::consts::PI),
    ("tiny", 1e-300),
    ("huge", f64::MAX),
    ("negative", -9999.000099),
];

// ---------------------------------------------------------------------------
// Encoding benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut g = c.benchmark_group("encode");

    let values = unit_values(10_000);
    let mut buf = Vec::with_capacity(16);
    let mut i = 0;
    g.bench_function("encode_float/random_unit", |b| {
        b.iter(|| {
            buf.clear();
            i = (i + 1) % values.len();
            encode_float(&mut buf, black_box(values[i]))
        });
    });

    for &(name, value) in SAMPLES {
        g.bench_with_input(BenchmarkId::new("encode_float", name), &value, |b, &v| {
            let mut buf = Vec::with_capacity(16);
            b.iter(|| {
                buf.clear();
                encode_float(&mut buf, black_box(v))
            });
        });
    }

    g.bench_function("decompose/full_precision", |b| {
        b.iter(|| decompose(black_box(std::f64::consts::PI)));
    });

    g.bench_function("float_key/from_f64", |b| {
        b.iter(|| FloatKey::from(black_box(123.456_789_f64)));
    });

    // Special values
    g.bench_function("special/nan", |b| {
        b.iter(FloatKey::nan);
    });
    g.bench_function("special/zero", |b| {
        b.iter(FloatKey::zero);
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Decoding benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut g = c.benchmark_group("decode");

    let encoded: Vec<Vec<u8>> = unit_values(10_000)
        .into_iter()
        .map(|v| FloatKey::from(v).into_bytes())
        .collect();
    let mut i = 0;
    g.bench_function("decode_float/random_unit", |b| {
        b.iter(|| {
            i = (i + 1) % encoded.len();
            decode_float(black_box(&encoded[i]))
        });
    });

    for &(name, value) in SAMPLES {
        let key = FloatKey::from(value);
        g.bench_with_input(BenchmarkId::new("decode_float", name), &key, |b, k| {
            b.iter(|| decode_float(black_box(k.as_bytes())));
        });
        g.bench_with_input(BenchmarkId::new("peek_length", name), &key, |b, k| {
            b.iter(|| peek_float_length(black_box(k.as_bytes())));
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Comparison benchmarks
// ---------------------------------------------------------------------------

fn bench_compare(c: &mut Criterion) {
    let mut g = c.benchmark_group("compare");

    let a = FloatKey::from(123.456_789);
    let b = FloatKey::from(987.654_321);
    let a_clone = a.clone();

    g.bench_function("cmp/equal", |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&a_clone)));
    });
    g.bench_function("cmp/different", |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&b)));
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_encode, bench_decode, bench_compare);
criterion_main!(benches);
