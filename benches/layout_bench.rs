// Benchmark for the layout engine
// Measures overlap clustering and week packing at realistic cardinalities

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use booking_calendar::models::rental::Rental;
use booking_calendar::services::layout::month_layout;
use booking_calendar::services::layout::overlap::{assign_columns, PixelInterval};
use booking_calendar::services::layout::rows::pack;
use booking_calendar::services::layout::segments::Segment;
use chrono::{Duration, NaiveDate};

fn sample_intervals(count: usize) -> Vec<PixelInterval> {
    (0..count)
        .map(|i| {
            let start = ((i * 37) % 900) as f32;
            PixelInterval {
                session_id: i as i64,
                start,
                end: start + 64.0 + ((i * 13) % 90) as f32,
            }
        })
        .collect()
}

fn sample_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let start_column = (i % 7) as u32 + 1;
            Segment {
                rental_id: i as i64,
                start_column,
                span: ((i % 3) as u32 + 1).min(8 - start_column),
                is_start: true,
                is_end: true,
                row: 0,
            }
        })
        .collect()
}

fn sample_rentals(count: usize) -> Vec<Rental> {
    let base = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    (0..count)
        .map(|i| {
            let start = base + Duration::days((i % 28) as i64);
            let mut rental =
                Rental::new(1, start, start + Duration::days((i % 9) as i64), 1).unwrap();
            rental.id = Some(i as i64);
            rental
        })
        .collect()
}

fn bench_assign_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_columns");

    for count in [10, 50, 200].iter() {
        let intervals = sample_intervals(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| assign_columns(black_box(&intervals)));
        });
    }

    group.finish();
}

fn bench_pack_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_rows");

    for count in [10, 50, 200].iter() {
        let segments = sample_segments(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| pack(black_box(segments.clone())));
        });
    }

    group.finish();
}

fn bench_month_layout(c: &mut Criterion) {
    let rentals = sample_rentals(100);

    c.bench_function("month_layout_100_rentals", |b| {
        b.iter(|| month_layout(black_box(&rentals), black_box(2024), black_box(6)));
    });
}

criterion_group!(benches, bench_assign_columns, bench_pack_rows, bench_month_layout);
criterion_main!(benches);
