//! # CRT Challenge Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | serialize (HMAC-SHA256 + encode) | < 10µs |
//! | deserialize_authenticated | < 10µs |
//! | deserialize (no tag check) | < 1µs |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crt_challenge::{Challenge, ChallengeService};
use crt_tests::{sample_challenge, test_config, TEST_SECRET, TEST_SERVER};

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("challenge-codec");
    group.measurement_time(Duration::from_secs(5));

    let challenge = sample_challenge();
    let wire = challenge.serialize(TEST_SECRET).unwrap();
    group.throughput(Throughput::Bytes(wire.len() as u64));

    group.bench_function("serialize", |b| {
        b.iter(|| black_box(challenge.serialize(black_box(TEST_SECRET)).unwrap()))
    });

    group.bench_function("deserialize_authenticated", |b| {
        b.iter(|| {
            black_box(Challenge::deserialize_authenticated(black_box(&wire), TEST_SECRET).unwrap())
        })
    });

    group.bench_function("deserialize", |b| {
        b.iter(|| black_box(Challenge::deserialize(black_box(&wire)).unwrap()))
    });

    group.finish();
}

fn bench_user_name_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("challenge-user-name-length");

    for len in [8usize, 64, 1024, 70_000] {
        let user = "u".repeat(len);
        let wire = Challenge::new(&[1; 20], 1, 2, &[2; 6], TEST_SERVER, user)
            .unwrap()
            .serialize(TEST_SECRET)
            .unwrap();

        group.throughput(Throughput::Bytes(wire.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &wire, |b, wire| {
            b.iter(|| {
                black_box(Challenge::deserialize_authenticated(black_box(wire), TEST_SECRET).unwrap())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Service Benchmarks
// ============================================================================

fn bench_service(c: &mut Criterion) {
    let mut group = c.benchmark_group("challenge-service");
    let service = ChallengeService::new(test_config()).unwrap();
    let key = [7u8; 32];

    group.bench_function("issue", |b| {
        b.iter(|| black_box(service.issue("alice", &key).unwrap()))
    });

    group.bench_function("issue_and_verify", |b| {
        b.iter(|| {
            let issued = service.issue("alice", &key).unwrap();
            black_box(service.verify(&issued.wire).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_user_name_length, bench_service);
criterion_main!(benches);
