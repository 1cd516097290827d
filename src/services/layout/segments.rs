//! Week windows and per-week rental bar segments for month-grid rendering.
//!
//! A rental spanning several weeks renders as one segment per week window;
//! rounded end-caps are drawn only where `is_start`/`is_end` say the rental
//! truly begins or ends inside that window.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::rental::Rental;
use crate::utils::date::week_start;

/// Seven consecutive calendar dates, Monday-first. Derived per rendered
/// month; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    first: NaiveDate,
}

impl WeekWindow {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: week_start(date),
        }
    }

    /// All week windows touching the given month, in order.
    pub fn for_month(year: i32, month: u32) -> Vec<Self> {
        let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let last_of_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .map(|d| d - Duration::days(1))
        .unwrap_or(first_of_month);

        let mut weeks = Vec::new();
        let mut cursor = week_start(first_of_month);
        while cursor <= last_of_month {
            weeks.push(Self { first: cursor });
            cursor += Duration::days(7);
        }
        weeks
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.first + Duration::days(6)
    }

    /// 1-based column of `date` within this week, if it falls inside.
    pub fn column_of(&self, date: NaiveDate) -> Option<u32> {
        if date < self.first() || date > self.last() {
            return None;
        }
        Some((date - self.first).num_days() as u32 + 1)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(move |i| self.first + Duration::days(i))
    }
}

/// One rental's contribution to one week window. Transient: produced by the
/// splitter, annotated with a row by the packer, discarded after render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub rental_id: i64,
    /// 1-based start column, 1..=7.
    pub start_column: u32,
    /// Number of columns covered; `start_column + span - 1 <= 7`.
    pub span: u32,
    /// True when the rental actually begins inside this window.
    pub is_start: bool,
    /// True when the rental actually ends inside this window.
    pub is_end: bool,
    /// Stacking row, assigned by the row packer.
    pub row: usize,
}

/// Slice a rental's inclusive date range down to one week window.
///
/// Returns `None` when the rental does not intersect the window at all.
pub fn split(rental: &Rental, week: &WeekWindow) -> Option<Segment> {
    if rental.end_date < week.first() || rental.start_date > week.last() {
        return None;
    }

    let is_start = rental.start_date >= week.first();
    let is_end = rental.end_date <= week.last();

    let start_column = if is_start {
        week.column_of(rental.start_date)?
    } else {
        1
    };
    let end_column_exclusive = if is_end {
        week.column_of(rental.end_date)? + 1
    } else {
        8
    };

    if end_column_exclusive <= start_column {
        return None;
    }

    Some(Segment {
        rental_id: rental.id.unwrap_or_default(),
        start_column,
        span: end_column_exclusive - start_column,
        is_start,
        is_end,
        row: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rental(id: i64, start: NaiveDate, end: NaiveDate) -> Rental {
        let mut r = Rental::new(1, start, end, 1).unwrap();
        r.id = Some(id);
        r
    }

    fn june_week() -> WeekWindow {
        // Mon 2024-06-03 .. Sun 2024-06-09
        WeekWindow::containing(date(2024, 6, 5))
    }

    #[test]
    fn test_week_window_bounds() {
        let week = june_week();
        assert_eq!(week.first(), date(2024, 6, 3));
        assert_eq!(week.last(), date(2024, 6, 9));
        assert_eq!(week.column_of(date(2024, 6, 3)), Some(1));
        assert_eq!(week.column_of(date(2024, 6, 9)), Some(7));
        assert_eq!(week.column_of(date(2024, 6, 10)), None);
    }

    #[test]
    fn test_weeks_for_month_cover_edges() {
        let weeks = WeekWindow::for_month(2024, 6);
        // June 2024: Sat the 1st through Sun the 30th
        assert_eq!(weeks.first().unwrap().first(), date(2024, 5, 27));
        assert_eq!(weeks.last().unwrap().last(), date(2024, 6, 30));
        assert_eq!(weeks.len(), 5);
    }

    #[test]
    fn test_weeks_for_month_december_rollover() {
        let weeks = WeekWindow::for_month(2024, 12);
        assert!(weeks.last().unwrap().last() >= date(2024, 12, 31));
    }

    // No intersection on either side
    #[test_case(2024, 5, 20, 2024, 6, 2 ; "ends before window")]
    #[test_case(2024, 6, 10, 2024, 6, 15 ; "starts after window")]
    fn test_split_no_overlap(y1: i32, m1: u32, d1: u32, y2: i32, m2: u32, d2: u32) {
        let r = rental(1, date(y1, m1, d1), date(y2, m2, d2));
        assert_eq!(split(&r, &june_week()), None);
    }

    #[test]
    fn test_split_continuation_from_previous_week() {
        // Starts before the window, ends inside: columns 1..=3, no start cap
        let r = rental(1, date(2024, 6, 1), date(2024, 6, 5));
        let segment = split(&r, &june_week()).unwrap();
        assert_eq!(segment.start_column, 1);
        assert_eq!(segment.span, 3);
        assert!(!segment.is_start);
        assert!(segment.is_end);
    }

    #[test]
    fn test_split_single_day() {
        let r = rental(2, date(2024, 6, 4), date(2024, 6, 4));
        let segment = split(&r, &june_week()).unwrap();
        assert_eq!(segment.start_column, 2);
        assert_eq!(segment.span, 1);
        assert!(segment.is_start);
        assert!(segment.is_end);
    }

    #[test]
    fn test_split_continues_into_next_week() {
        let r = rental(3, date(2024, 6, 4), date(2024, 6, 10));
        let segment = split(&r, &june_week()).unwrap();
        assert_eq!(segment.start_column, 2);
        assert_eq!(segment.span, 6);
        assert!(segment.is_start);
        assert!(!segment.is_end);
    }

    #[test]
    fn test_split_spans_entire_window() {
        let r = rental(4, date(2024, 5, 1), date(2024, 7, 1));
        let segment = split(&r, &june_week()).unwrap();
        assert_eq!(segment.start_column, 1);
        assert_eq!(segment.span, 7);
        assert!(!segment.is_start);
        assert!(!segment.is_end);
    }

    #[test]
    fn test_split_span_matches_clipped_day_count() {
        let week = june_week();
        let r = rental(5, date(2024, 6, 1), date(2024, 6, 7));
        let segment = split(&r, &week).unwrap();
        let clipped = (r.end_date.min(week.last()) - r.start_date.max(week.first())).num_days() + 1;
        assert_eq!(segment.span as i64, clipped);
    }
}
