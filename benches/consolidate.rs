//! Benchmarks for chatstash cleaning, parsing, and consolidation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench consolidate -- cleaner`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstash::config::CleanConfig;
use chatstash::core::cleaner::clean;
use chatstash::core::merger::{Consolidator, sort_newest_first};
use chatstash::core::parser::InteractionParser;
use chatstash::record::Interaction;

use chrono::{TimeZone, Utc};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_backup_content(interactions: usize, lines_per_interaction: usize) -> String {
    let mut blocks = Vec::with_capacity(interactions);
    for i in 0..interactions {
        let hour = i % 24;
        let minute = i % 60;
        let mut block = format!("*Backup created on: 2024-01-15 {hour:02}:{minute:02}:00*\n");
        for line in 0..lines_per_interaction {
            match line % 5 {
                0 => block.push_str(&format!("User: question number {i}-{line}\n")),
                1 => block.push_str("DoneFeedback has been submitted\n"),
                2 => block.push_str(&format!("Assistant: answer {i}-{line} with some longer explanation text\n")),
                3 => block.push_str("\n\n"),
                _ => block.push_str("Press Enter again to interrupt and send a new message\n"),
            }
        }
        blocks.push(block);
    }
    blocks.join("\n")
}

fn generate_interactions(count: usize) -> Vec<Interaction> {
    (0..count)
        .map(|i| {
            let record = Interaction::new(format!("interaction body number {i}"));
            if i % 7 == 0 {
                record
            } else {
                let ts = Utc
                    .with_ymd_and_hms(2024, 1, 1 + (i % 28) as u32, (i % 24) as u32, 0, 0)
                    .unwrap();
                record.with_timestamp(ts)
            }
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_cleaner(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaner");
    let config = CleanConfig::new();

    for &interactions in &[10usize, 100, 500] {
        let content = generate_backup_content(interactions, 20);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(interactions),
            &content,
            |b, content| b.iter(|| clean(black_box(content), &config)),
        );
    }
    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");
    let config = CleanConfig::new();
    let parser = InteractionParser::new();

    for &interactions in &[10usize, 100, 500] {
        let cleaned = clean(&generate_backup_content(interactions, 20), &config);
        group.throughput(Throughput::Bytes(cleaned.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(interactions),
            &cleaned,
            |b, cleaned| b.iter(|| parser.parse(black_box(cleaned), None)),
        );
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &count in &[100usize, 1_000, 10_000] {
        let records = generate_interactions(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| {
                let mut copy = records.clone();
                sort_newest_first(black_box(&mut copy));
                copy
            });
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("consolidate");
    group.sample_size(20);

    for &files in &[5usize, 25] {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..files {
            let content = generate_backup_content(10, 20);
            std::fs::write(
                dir.path().join(format!("backup_202401{:02}_100000.md", i + 1)),
                content,
            )
            .unwrap();
        }

        let consolidator = Consolidator::new();
        group.bench_with_input(BenchmarkId::from_parameter(files), &dir, |b, dir| {
            b.iter(|| consolidator.consolidate(black_box(dir.path())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cleaner, bench_parser, bench_sort, bench_full_run);
criterion_main!(benches);
