//! Criterion benchmarks for leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;
use leveled_logger::{info, infof};
use std::io;
use std::sync::Arc;

/// Sink that discards everything, so benchmarks measure the logger itself.
struct NullSink;

impl Sink for NullSink {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        black_box(buf);
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(min_level: Level, flags: LineFlags) -> Logger {
    Logger::builder()
        .with_sink(NullSink)
        .with_min_level(min_level)
        .with_flags(flags)
        .build()
        .unwrap()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_writer", |b| {
        b.iter(|| black_box(null_logger(Level::INFO, LineFlags::empty())));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Level::INFO, LineFlags::empty());

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("Processing {} items", black_box(100))));
    });

    group.bench_function("info_macro_concat", |b| {
        b.iter(|| info!(logger, "user=", black_box(42), " action=", black_box("login")));
    });

    group.bench_function("unknown_level", |b| {
        b.iter(|| logger.log(black_box(17), "Custom level"));
    });

    let headed = null_logger(
        Level::INFO,
        LineFlags::STD_FLAGS | LineFlags::MICROSECONDS | LineFlags::SHORT_FILE,
    );
    group.bench_function("info_with_header", |b| {
        b.iter(|| headed.info(black_box("Info message")));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(null_logger(Level::INFO, LineFlags::empty()));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            infof!(logger, "Concurrent message {}", i);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Level::EMERG, LineFlags::empty());

    group.bench_function("filtered_info", |b| {
        b.iter(|| logger.info(black_box("Filtered message")));
    });

    group.bench_function("filtered_infof", |b| {
        b.iter(|| logger.infof(format_args!("Filtered {}", black_box(1))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_sync_logging,
    bench_concurrent_logging,
    bench_filtering,
);
criterion_main!(benches);
