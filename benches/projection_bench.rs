use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::api::{LineChartView, LineChartViewConfig, SurfaceLayout, plan_chart};
use linechart_rs::core::{
    AggregationMethod, Entry, Group, PropertyId, QueryResult, Rect, SeriesSpec, project,
};
use linechart_rs::render::{Color, NullRenderer, ThemeColors};
use std::hint::black_box;

fn generated_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let mut entry = Entry::new(format!("logs/day-{i:05}.md"))
                .with_property("note.value", 100.0 + (t * 0.05).sin() * 25.0)
                .with_property("note.text", format!("{:.2}", t * 0.1));
            if i % 7 != 0 {
                entry = entry.with_property("note.sparse", t);
            }
            entry
        })
        .collect()
}

fn series_specs() -> Vec<SeriesSpec> {
    ["note.value", "note.text", "note.sparse"]
        .into_iter()
        .map(|property| SeriesSpec {
            property: PropertyId::new(property),
            display_name: property.to_owned(),
            color: Color::rgb(0.5, 0.5, 0.5),
            aggregation: AggregationMethod::Avg,
        })
        .collect()
}

fn bench_flat_projection_10k(c: &mut Criterion) {
    let result = QueryResult::flat(generated_entries(10_000));
    let series = series_specs();
    let label_property = PropertyId::new("file.name");

    c.bench_function("flat_projection_10k", |b| {
        b.iter(|| {
            let _ = project(
                black_box(&result),
                black_box(&series),
                black_box(&label_property),
            );
        })
    });
}

fn bench_grouped_projection_10k(c: &mut Criterion) {
    let groups = generated_entries(10_000)
        .chunks(50)
        .enumerate()
        .map(|(i, entries)| Group::keyed(format!("[[teams/Team {i}]]"), entries.to_vec()))
        .collect();
    let result = QueryResult::new(groups);
    let series = series_specs();
    let label_property = PropertyId::new("file.name");

    c.bench_function("grouped_projection_10k", |b| {
        b.iter(|| {
            let _ = project(
                black_box(&result),
                black_box(&series),
                black_box(&label_property),
            );
        })
    });
}

fn bench_view_update_2k(c: &mut Criterion) {
    let result = QueryResult::flat(generated_entries(2_000));
    let config = LineChartViewConfig::new()
        .with_property("note.value")
        .with_property("note.sparse")
        .with_fill_area(true);
    let layout = SurfaceLayout::filling(Rect::new(0.0, 0.0, 1600.0, 900.0));
    let mut view = LineChartView::new(NullRenderer::default(), layout);

    c.bench_function("plan_chart_2k", |b| {
        b.iter(|| {
            let _ = plan_chart(black_box(&result), black_box(&config), ThemeColors::default())
                .expect("plan should succeed");
        })
    });

    c.bench_function("view_update_2k", |b| {
        b.iter(|| {
            let _ = view.on_data_updated(black_box(&result), black_box(&config));
        })
    });
}

criterion_group!(
    benches,
    bench_flat_projection_10k,
    bench_grouped_projection_10k,
    bench_view_update_2k
);
criterion_main!(benches);
