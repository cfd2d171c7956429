// ABOUTME: Criterion benchmarks for health metric algorithms and panel commands
// ABOUTME: Measures assessments, BMI, calories, weekly reports, and output rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the health metric algorithms.
//!
//! Covers the pure calculators, weekly sample generation, and the full
//! command-plus-render path a terminal host takes.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use health_tracker_panel::config::PanelConfig;
use health_tracker_panel::formatters::{format_output, OutputFormat};
use health_tracker_panel::metrics::{
    compute_bmi, describe_sleep, describe_steps, describe_water, estimate_daily_calories,
    generate_weekly_sample, weekly_report, CalorieProfile,
};
use health_tracker_panel::panel::{Command, HealthPanel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_assessments(c: &mut Criterion) {
    let mut group = c.benchmark_group("assessments");

    group.bench_function("describe_all", |b| {
        b.iter(|| {
            (
                describe_water(black_box(6)),
                describe_steps(black_box(8_500)),
                describe_sleep(black_box(7)),
            )
        });
    });

    group.bench_function("compute_bmi", |b| {
        b.iter(|| compute_bmi(black_box(70.0), black_box(1.75)));
    });

    let profile = CalorieProfile::default();
    group.bench_function("estimate_daily_calories", |b| {
        b.iter(|| estimate_daily_calories(black_box(68.0), black_box(1.7), black_box(&profile)));
    });

    group.finish();
}

fn bench_weekly_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_report");

    group.bench_function("generate_sample", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| generate_weekly_sample(&mut rng));
    });

    let sample = generate_weekly_sample(&mut ChaCha8Rng::seed_from_u64(42));
    group.bench_function("report_from_sample", |b| {
        b.iter(|| weekly_report(black_box(&sample)));
    });

    group.finish();
}

fn bench_panel_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_commands");

    group.bench_function("parse_and_update", |b| {
        let mut panel = HealthPanel::new(PanelConfig::default().with_seed(7));
        b.iter(|| {
            let command: Command = black_box("update-metrics 8 10000 7").parse().unwrap();
            panel.execute(command)
        });
    });

    group.bench_function("snapshot_text", |b| {
        let mut panel = HealthPanel::new(PanelConfig::default().with_seed(7));
        b.iter(|| format_output(&panel.execute(Command::Snapshot), OutputFormat::Text));
    });

    group.bench_function("snapshot_json", |b| {
        let mut panel = HealthPanel::new(PanelConfig::default().with_seed(7));
        b.iter(|| format_output(&panel.execute(Command::Snapshot), OutputFormat::Json));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_assessments,
    bench_weekly_report,
    bench_panel_commands
);
criterion_main!(benches);
