//! Benchmark suite for GIF decoding and frame preparation
//!
//! This benchmark measures decoding plus Lanczos3 resizing to the window
//! width, which is the work done on every animation switch.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emopet_benches::generate_test_gif;
use emopet_types::anim::{TARGET_WIDTH, decode_reader, scaled_height};
use std::{hint::black_box, io::Cursor};

/// Benchmark decode + resize for a range of source sizes
fn bench_decode_sizes(c: &mut Criterion) {
	let mut group = c.benchmark_group("gif_decode");

	let sizes = [("small", 64, 64), ("native", 200, 200), ("large", 480, 360)];

	for (name, width, height) in sizes {
		let data = generate_test_gif(width, height, 8, 100);
		let pixels = u64::from(width) * u64::from(height) * 8;

		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("decode", name), &data, |b, data| {
			b.iter(|| {
				let result = decode_reader(Cursor::new(black_box(data.as_slice())), TARGET_WIDTH);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark how decode time grows with the frame count
fn bench_frame_count(c: &mut Criterion) {
	let mut group = c.benchmark_group("gif_frames");

	for frames in [1usize, 4, 16] {
		let data = generate_test_gif(120, 120, frames, 60);
		group.bench_with_input(BenchmarkId::from_parameter(frames), &data, |b, data| {
			b.iter(|| black_box(decode_reader(Cursor::new(data.as_slice()), TARGET_WIDTH)));
		});
	}

	group.finish();
}

/// Benchmark the aspect-ratio computation on its own
fn bench_scaled_height(c: &mut Criterion) {
	c.bench_function("scaled_height", |b| {
		b.iter(|| {
			for width in 1..512u32 {
				black_box(scaled_height(black_box(width), black_box(333), TARGET_WIDTH).ok());
			}
		});
	});
}

criterion_group!(benches, bench_decode_sizes, bench_frame_count, bench_scaled_height);

criterion_main!(benches);
