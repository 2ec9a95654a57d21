use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ring::digest::SHA256;
use sha256_rs::sha256;

const TEXT: &[u8] = b"some text to test hash algorithms";

pub fn ben_my_sha2(c: &mut Criterion) {
    c.bench_function("my sha256", |b| {
        b.iter(|| {
            let mut hasher = sha256::Sha256::new();
            hasher.update(black_box(TEXT));
            hasher.finalize()
        })
    });
}

pub fn ben_ring_sha256(c: &mut Criterion) {
    c.bench_function("ring sha256", |b| {
        b.iter(|| {
            ring::digest::digest(&SHA256, black_box(TEXT));
        })
    });
}

pub fn ben_sha256_throughput(c: &mut Criterion) {
    let data = vec![0xa5u8; 1 << 16];
    let mut group = c.benchmark_group("sha256 64KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("one-shot", |b| b.iter(|| sha256::digest(black_box(&data))));
    group.bench_function("4KiB chunks", |b| {
        b.iter(|| {
            let mut hasher = sha256::Sha256::new();
            for chunk in black_box(&data).chunks(4096) {
                hasher.update(chunk);
            }
            hasher.finalize()
        })
    });
    group.bench_function("ring", |b| {
        b.iter(|| ring::digest::digest(&SHA256, black_box(&data)))
    });
    group.finish();
}

criterion_group!(benches, ben_my_sha2, ben_ring_sha256, ben_sha256_throughput);
criterion_main!(benches);
