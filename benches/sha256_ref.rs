use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 1024, 16 * 1024, 1024 * 1024];

pub fn bench_sha2_ref(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2");

    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("one-shot", size), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Sha256::new();
                hasher.update(black_box(data));
                hasher.finalize()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha2_ref);
criterion_main!(benches);
