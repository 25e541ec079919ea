use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use twvarint::{
    MAX_VARINT_LEN64, VarintReader, append_varint64, decode_varint64, encode_varint64,
};

const VALUE_COUNT: usize = 4096;

fn sample_values(scale: u32) -> Vec<i64> {
    (0..VALUE_COUNT as i64)
        .map(|n| {
            let magnitude = (n * 2_654_435_761) % (1i64 << scale);
            if n % 2 == 0 { magnitude } else { -magnitude - 1 }
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint64");
    group.throughput(Throughput::Elements(VALUE_COUNT as u64));

    for scale in [6u32, 20, 62] {
        let values = sample_values(scale);
        let mut encoded = Vec::new();
        for &value in &values {
            append_varint64(value, &mut encoded);
        }

        group.bench_with_input(BenchmarkId::new("encode", scale), &values, |b, values| {
            let mut buf = [0u8; MAX_VARINT_LEN64];
            b.iter(|| {
                let mut total = 0usize;
                for &value in values {
                    total += encode_varint64(black_box(value), &mut buf);
                }
                total
            });
        });

        group.bench_with_input(BenchmarkId::new("decode_buffer", scale), &encoded, |b, bytes| {
            b.iter(|| {
                let mut offset = 0;
                let mut sum = 0i64;
                while offset < bytes.len() {
                    let (value, read) = decode_varint64(black_box(&bytes[offset..]));
                    sum = sum.wrapping_add(value);
                    offset += read;
                }
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("decode_stream", scale), &encoded, |b, bytes| {
            b.iter(|| {
                let mut reader = VarintReader::new(bytes.as_slice());
                let mut sum = 0i64;
                for _ in 0..VALUE_COUNT {
                    sum = sum.wrapping_add(reader.read_i64().expect("valid stream"));
                }
                sum
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
