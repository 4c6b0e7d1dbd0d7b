//! Conversion Benchmarks — Fixed-Point Encoding and Key Loading
//!
//! Compares the floating-point and decimal-string conversion paths and
//! measures identity derivation from a hex key.
//!
//! Run with: cargo bench --bench conversion_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clearing_house_ops::adapters::identity::OperatorIdentity;
use clearing_house_ops::domain::fixed_point::{to_parse_units, to_precision};
use clearing_house_ops::domain::market_spec::MarketSpec;

const KEY: &str = "4f3c2a1b0e9d8c7b6a5f4e3d2c1b0a99887766554433221100ffeeddccbbaa90";

/// Benchmark the float multiply-and-truncate path.
fn bench_to_precision(c: &mut Criterion) {
    c.bench_function("to_precision", |b| {
        b.iter(|| to_precision(black_box(2e-8)));
    });
}

/// Benchmark the format-then-parse decimal path.
fn bench_to_parse_units(c: &mut Criterion) {
    c.bench_function("to_parse_units", |b| {
        b.iter(|| to_parse_units(black_box(1234.5678)));
    });
}

/// Benchmark encoding a full market specification.
fn bench_market_spec(c: &mut Criterion) {
    let spec = MarketSpec::btc_perpetual();

    c.bench_function("market_spec_to_params", |b| {
        b.iter(|| black_box(&spec).to_params());
    });
}

/// Benchmark hex decode + Ed25519 key + principal derivation.
fn bench_identity(c: &mut Criterion) {
    c.bench_function("identity_from_hex", |b| {
        b.iter(|| OperatorIdentity::from_private_key_hex(black_box(KEY)));
    });
}

criterion_group!(
    benches,
    bench_to_precision,
    bench_to_parse_units,
    bench_market_spec,
    bench_identity,
);
criterion_main!(benches);
