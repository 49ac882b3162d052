//! Benchmarks for postings compression.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ircodec::{CodecKind, IntegerCodec};

/// d-gaps of a postings list with the given average spacing.
fn gaps(count: u64, spacing: u64) -> Vec<u64> {
    (0..count).map(|i| 1 + (i * 7919) % (2 * spacing)).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for kind in CodecKind::ALL {
        let codec = kind.codec();
        for count in [100u64, 1000, 10000] {
            let values = gaps(count, 100);
            let mut buffer = vec![0u8; codec.encoded_len(&values).unwrap()];

            group.throughput(Throughput::Elements(count));
            group.bench_with_input(BenchmarkId::new(kind.name(), count), &count, |bench, _| {
                bench.iter(|| codec.encode(black_box(&mut buffer), black_box(&values)))
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for kind in CodecKind::ALL {
        let codec = kind.codec();
        for count in [100u64, 1000, 10000] {
            let values = gaps(count, 100);
            let encoded = codec.encode_to_vec(&values).unwrap();
            let mut decoded = vec![0u64; values.len()];

            group.throughput(Throughput::Elements(count));
            group.bench_with_input(BenchmarkId::new(kind.name(), count), &count, |bench, _| {
                bench.iter(|| codec.decode(black_box(&mut decoded), black_box(&encoded)))
            });
        }
    }

    group.finish();
}

fn bench_decode_by_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_by_density");

    let codec = CodecKind::EliasDelta.codec();
    for spacing in [1u64, 100, 1 << 20] {
        let values = gaps(10000, spacing);
        let encoded = codec.encode_to_vec(&values).unwrap();
        let mut decoded = vec![0u64; values.len()];

        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("elias_delta", spacing),
            &spacing,
            |bench, _| bench.iter(|| codec.decode(black_box(&mut decoded), black_box(&encoded))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_decode_by_density);
criterion_main!(benches);
