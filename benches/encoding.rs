use base32_codec::{Format, decode, encode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn bench_encode(c: &mut Criterion) {
    for format in Format::ALL {
        let mut group = c.benchmark_group(format!("encode_{}", format));

        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();

            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| encode(black_box(data), black_box(format)));
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    for format in Format::ALL {
        let mut group = c.benchmark_group(format!("decode_{}", format));

        for size in SIZES {
            let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
            let encoded = encode(&data, format);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                b.iter(|| decode(black_box(encoded), black_box(format)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_decode_crockford_separated(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_crockford_separated");

    for size in SIZES {
        let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
        let encoded = encode(&data, Format::Crockford);
        // Groups of four, the way Crockford strings are usually written out
        let separated = encoded
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("-");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &separated,
            |b, separated| {
                b.iter(|| decode(black_box(separated), Format::Crockford).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_decode_crockford_separated,
);
criterion_main!(benches);
