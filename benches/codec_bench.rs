// In tracepack-core/benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tracepack::{compress, decompress, TracepackConfig};

// --- Mock Data Generation ---

/// Generates a shape-realistic replay stream: smooth cursor motion, sparse
/// key-press runs, near-constant frame deltas.
fn generate_record_stream(frames: usize) -> String {
    let mut text = String::with_capacity(frames * 20);
    for i in 0..frames as i32 {
        let x = 256.0 + f64::from(i % 512) * 0.5 - f64::from((i / 512) % 64) * 2.0;
        let y = 192.0 + f64::from(i % 384) * 0.25;
        let keys = if (200..260).contains(&(i % 700)) { 5 } else { 0 };
        text.push_str(&format!("16|{}|{}|{},", x, y, keys));
    }
    text
}

// --- Benchmark Suite ---

const BENCH_FRAME_COUNT: usize = 20_000;

fn bench_pipeline(c: &mut Criterion) {
    let config = TracepackConfig::default();
    let stream = generate_record_stream(BENCH_FRAME_COUNT);
    let compressed = compress(&stream, &config).unwrap();

    let mut group = c.benchmark_group("Replay Pipeline");
    group.throughput(criterion::Throughput::Bytes(stream.len() as u64));

    group.bench_function("Compress", |b| {
        b.iter(|| black_box(compress(black_box(&stream), &config)))
    });
    group.bench_function("Decompress", |b| {
        b.iter(|| black_box(decompress(black_box(&compressed))))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
