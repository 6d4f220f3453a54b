//! Benchmarks for plan dispatch and page rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use planboard::loader::LoadState;
use planboard::plan::{bundled_plan, DashboardPlan, SeriesSpec, WidgetDescriptor};
use planboard::render::render_document;
use planboard::widget::{dispatch, RenderOptions};
use serde_json::{json, Value};
use std::sync::Arc;

/// A plan with `count` tables of 50 rows each
fn large_plan(count: usize) -> DashboardPlan {
    let rows: Vec<Value> = (0..50)
        .map(|i| json!({"region": format!("Zona {}", i), "equipos": i * 3, "fallas": i % 7}))
        .collect();

    let dashboard_plan = (0..count)
        .map(|i| {
            let kind = if i % 2 == 0 { "table" } else { "bar" };
            WidgetDescriptor::new(format!("w{}", i), kind)
                .title(format!("Widget {}", i))
                .span(6)
                .data_key("region")
                .series(vec![SeriesSpec::new("equipos"), SeriesSpec::new("fallas")])
                .data(Value::Array(rows.clone()))
        })
        .collect();

    DashboardPlan {
        global_title: "Bench".to_string(),
        global_subtitle: String::new(),
        dashboard_plan,
    }
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let plan = bundled_plan().unwrap();
    let options = RenderOptions::default();

    group.throughput(Throughput::Elements(plan.widget_count() as u64));
    group.bench_function("bundled_plan", |b| {
        b.iter(|| {
            for descriptor in &plan.dashboard_plan {
                black_box(dispatch(black_box(descriptor), &options));
            }
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let bundled = LoadState::Ready(Arc::new(bundled_plan().unwrap()));
    group.bench_function("bundled_plan", |b| {
        b.iter(|| render_document(black_box(&bundled), &RenderOptions::default()))
    });
    group.bench_function("bundled_plan_print", |b| {
        b.iter(|| render_document(black_box(&bundled), &RenderOptions::print()))
    });

    for count in [10, 50] {
        let state = LoadState::Ready(Arc::new(large_plan(count)));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("widgets_{}", count), |b| {
            b.iter(|| render_document(black_box(&state), &RenderOptions::default()))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let json = serde_json::to_string(&large_plan(50)).unwrap();

    c.bench_function("parse_plan_50_widgets", |b| {
        b.iter(|| DashboardPlan::from_json(black_box(&json)).unwrap())
    });
}

criterion_group!(benches, bench_dispatch, bench_render, bench_parse);
criterion_main!(benches);
