// Property-based tests for the layout engine invariants

use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

use booking_calendar::models::rental::Rental;
use booking_calendar::services::layout::rows;
use booking_calendar::services::layout::segments::{split, Segment, WeekWindow};
use booking_calendar::services::layout::time_grid::{GridConfig, TimeGridMapper};

fn mapper(start: u32, end: u32, snap: u32, pph: f32) -> TimeGridMapper {
    TimeGridMapper::new(GridConfig {
        business_start_hour: start,
        business_end_hour: end,
        snap_minutes: snap,
        pixels_per_hour: pph,
    })
}

proptest! {
    /// Any time on a snap boundary inside the window survives the
    /// time -> pixels -> time round trip unchanged.
    #[test]
    fn prop_round_trip_on_snap_boundaries(
        start in 0u32..12,
        span in 2u32..12,
        snap in prop::sample::select(vec![5u32, 10, 15, 20, 30]),
        pph in prop::sample::select(vec![32.0f32, 48.0, 64.0, 96.0]),
        hour_offset in 0u32..12,
        tick in 0u32..12,
    ) {
        let end = start + span;
        let mapper = mapper(start, end, snap, pph);

        let hour = start + hour_offset % span;
        let minute = (tick * snap) % 60;
        let t = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();

        prop_assert_eq!(mapper.offset_to_time(mapper.time_to_offset(t)), t);
    }

    /// offset_to_time never leaves the business-hours window.
    #[test]
    fn prop_offset_to_time_hour_stays_clamped(offset in -2000.0f32..4000.0) {
        use chrono::Timelike;
        let mapper = mapper(7, 23, 15, 64.0);
        let t = mapper.offset_to_time(offset);
        prop_assert!(t.hour() >= 7);
        prop_assert!(t.hour() <= 22);
    }

    /// split returns None exactly when the rental misses the window, and
    /// otherwise spans the clipped day count.
    #[test]
    fn prop_split_matches_clipped_range(
        start_offset in -20i64..20,
        length in 0i64..25,
    ) {
        let week = WeekWindow::containing(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        let start = week.first() + Duration::days(start_offset);
        let end = start + Duration::days(length);
        let rental = Rental::new(1, start, end, 1).unwrap();

        match split(&rental, &week) {
            None => {
                prop_assert!(end < week.first() || start > week.last());
            }
            Some(segment) => {
                let clipped =
                    (end.min(week.last()) - start.max(week.first())).num_days() + 1;
                prop_assert_eq!(segment.span as i64, clipped);
                prop_assert!(segment.start_column >= 1);
                prop_assert!(segment.start_column + segment.span - 1 <= 7);
                prop_assert_eq!(segment.is_start, start >= week.first());
                prop_assert_eq!(segment.is_end, end <= week.last());
            }
        }
    }

    /// No packed row ever holds two segments with intersecting column
    /// ranges, and row_count is the maximum row plus one.
    #[test]
    fn prop_packed_rows_are_disjoint(
        raw in prop::collection::vec((1u32..=7, 1u32..=7), 0..30),
    ) {
        let segments: Vec<Segment> = raw
            .iter()
            .enumerate()
            .map(|(i, &(start, span))| Segment {
                rental_id: i as i64,
                start_column: start,
                span: span.min(8 - start),
                is_start: true,
                is_end: true,
                row: 0,
            })
            .collect();

        let packed = rows::pack(segments);

        for a in &packed {
            for b in &packed {
                if a.rental_id != b.rental_id && a.row == b.row {
                    let disjoint = a.start_column + a.span <= b.start_column
                        || b.start_column + b.span <= a.start_column;
                    prop_assert!(disjoint);
                }
            }
        }

        let expected = packed.iter().map(|s| s.row + 1).max().unwrap_or(0);
        prop_assert_eq!(rows::row_count(&packed), expected);
    }
}
