// ABOUTME: Criterion benchmarks for the pure request and response pipeline stages
// ABOUTME: Measures allergy sanitization, request building, and response normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal plan pipeline.
//!
//! Covers the stages that run without I/O, with inputs at typical and
//! maximum sizes.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mealplan_client::models::Profile;
use mealplan_client::normalize::normalize;
use mealplan_client::request::build_request;
use mealplan_client::sanitize::{sanitize_allergies, sanitize_allergy_text};
use serde_json::{json, Value};

fn max_allergy_list() -> Value {
    json!((0..50).map(|i| format!("  allergen-{i:02}{}  ", "x".repeat(95))).collect::<Vec<_>>())
}

fn generate_plan_body(days: usize) -> String {
    let meals: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "day": day,
                "breakfast": {"name": "Oatmeal with Berries", "calories": 350, "protein": 12, "carbs": 60, "fats": 7},
                "lunch": {"name": "Chickpea Salad", "calories": 520, "protein": 21, "carbs": 55, "fats": 22},
                "dinner": {"name": "Lentil Curry", "calories": 640, "protein": 28, "carbs": 80, "fats": 18},
                "snacks": [{"name": "Apple", "calories": 95}, {"name": "Almonds", "calories": 160}]
            })
        })
        .collect();

    json!({
        "days": days,
        "meals": meals,
        "summary": {"totalCalories": 1805 * days, "averageDailyCalories": 1805},
        "disclaimer": {"message": "Generated from a limited food list.", "limitations": ["Approximate values"]}
    })
    .to_string()
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_allergies");

    let typical = "peanuts, shellfish, sesame";
    group.throughput(Throughput::Bytes(typical.len() as u64));
    group.bench_function("text_typical", |b| {
        b.iter(|| sanitize_allergy_text(black_box(typical)));
    });

    let long_text = (0..200)
        .map(|i| format!("ingredient number {i}"))
        .collect::<Vec<_>>()
        .join(", ");
    group.throughput(Throughput::Bytes(long_text.len() as u64));
    group.bench_function("text_oversized", |b| {
        b.iter(|| sanitize_allergy_text(black_box(&long_text)));
    });

    let list = max_allergy_list();
    group.bench_function("list_max", |b| {
        b.iter(|| sanitize_allergies(black_box(&list)));
    });

    group.finish();
}

fn bench_build_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_request");
    let profile = Profile::new("maintenance", "2200", "mediterranean");
    let preferences = json!(["Low Carb", "High Protein", "Gluten Free"]);

    let typical = json!("peanuts, shellfish");
    group.bench_function("typical", |b| {
        b.iter(|| {
            build_request(
                black_box(&profile),
                black_box(&preferences),
                black_box(&typical),
                black_box(&json!(7)),
            )
        });
    });

    let max_allergies = max_allergy_list();
    group.bench_function("max_allergies", |b| {
        b.iter(|| {
            build_request(
                black_box(&profile),
                black_box(&preferences),
                black_box(&max_allergies),
                black_box(&json!(30)),
            )
        });
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for days in [3_usize, 7, 30] {
        let body = generate_plan_body(days);
        normalize(&body).unwrap();

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_function(format!("days_{days}"), |b| {
            b.iter(|| normalize(black_box(&body)));
        });
    }

    let defective = json!({
        "meals": (0..30)
            .map(|i| if i % 3 == 0 { Value::Null } else { json!({"day": "x", "lunch": "soup", "snacks": [1, null]}) })
            .collect::<Vec<_>>()
    })
    .to_string();
    group.bench_function("defective_30", |b| {
        b.iter(|| normalize(black_box(&defective)));
    });

    group.finish();
}

criterion_group!(benches, bench_sanitize, bench_build_request, bench_normalize);
criterion_main!(benches);
